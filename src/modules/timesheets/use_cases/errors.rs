use crate::modules::timesheets::core::entry::ValidationError;
use crate::shared::core::http::Message;
use crate::shared::core::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Week not found")]
    WeekNotFound,

    #[error("Entry not found")]
    EntryNotFound,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One mapping from application errors to HTTP responses, shared by every
/// inbound adapter so status codes cannot drift between endpoints.
impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::WeekNotFound | ApplicationError::EntryNotFound => {
                StatusCode::NOT_FOUND
            }
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &self {
            ApplicationError::Store(err) => {
                tracing::error!(error = %err, "store failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(Message::new(message))).into_response()
    }
}
