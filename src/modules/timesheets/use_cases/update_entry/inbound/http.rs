use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::auth::use_cases::authenticate::extractor::CurrentUser;
use crate::modules::timesheets::core::entry::EntryPatch;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    _caller: CurrentUser,
    Path((week_id, entry_id)): Path<(String, String)>,
    body: Result<Json<EntryPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.update_entry.handle(&week_id, &entry_id, patch).await {
        Ok(entry) => Json(entry).into_response(),
        Err(err) => err.into_response(),
    }
}
