use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::auth::use_cases::authenticate::extractor::CurrentUser;
use crate::modules::timesheets::core::entry::TimeEntry;
use crate::modules::timesheets::core::ports::{EntryStore, WeekStore};
use crate::modules::timesheets::core::week::Week;
use crate::shared::core::http::Message;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct WeekDetailResponse {
    pub week: Week,
    pub entries: Vec<TimeEntry>,
}

pub async fn handle(
    State(state): State<AppState>,
    _caller: CurrentUser,
    Path(week_id): Path<String>,
) -> impl IntoResponse {
    let week = match state.weeks.find(&week_id).await {
        Ok(Some(week)) => week,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(Message::new("Week not found")),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!(error = %err, week_id, "week lookup failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match state.entries.list_by_week(&week_id).await {
        Ok(entries) => Json(WeekDetailResponse { week, entries }).into_response(),
        Err(err) => {
            tracing::error!(error = %err, week_id, "entry listing failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
