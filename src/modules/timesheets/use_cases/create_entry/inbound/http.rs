use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::auth::use_cases::authenticate::extractor::CurrentUser;
use crate::modules::timesheets::core::entry::NewEntry;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    _caller: CurrentUser,
    Path(week_id): Path<String>,
    body: Result<Json<NewEntry>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.create_entry.handle(&week_id, draft).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(err) => err.into_response(),
    }
}
