use crate::modules::auth::core::ports::SessionStore;
use crate::shared::core::http::Message;
use crate::shell::state::AppState;
use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

/// Opaque "is there an authenticated caller" gate for mutation and read
/// endpoints. Resolves the bearer token to a user id; nothing downstream
/// inspects identity beyond existence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(Message::new("Unauthorized")),
    )
        .into_response()
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(unauthorized)?;

        match state.sessions.resolve(token).await {
            Ok(Some(user_id)) => Ok(CurrentUser { user_id }),
            Ok(None) => Err(unauthorized()),
            Err(err) => {
                tracing::error!(error = %err, "session lookup failed");
                Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(Message::new("Internal server error")),
                )
                    .into_response())
            }
        }
    }
}
