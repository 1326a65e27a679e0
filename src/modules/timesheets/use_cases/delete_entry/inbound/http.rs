use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::auth::use_cases::authenticate::extractor::CurrentUser;
use crate::shared::core::http::Message;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    _caller: CurrentUser,
    Path((week_id, entry_id)): Path<(String, String)>,
) -> impl IntoResponse {
    match state.delete_entry.handle(&week_id, &entry_id).await {
        Ok(()) => Json(Message::new("Entry deleted")).into_response(),
        Err(err) => err.into_response(),
    }
}
