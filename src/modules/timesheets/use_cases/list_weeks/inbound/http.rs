use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::auth::use_cases::authenticate::extractor::CurrentUser;
use crate::modules::timesheets::core::ports::{SortOrder, WeekQuery, WeekSortBy, WeekStore};
use crate::modules::timesheets::core::status::WeekStatus;
use crate::shared::core::http::Message;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWeeksParams {
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_by: Option<WeekSortBy>,
    pub sort_order: Option<SortOrder>,
}

pub async fn handle(
    State(state): State<AppState>,
    _caller: CurrentUser,
    Query(params): Query<ListWeeksParams>,
) -> impl IntoResponse {
    // `all` and absence both mean "no status filter".
    let status = match params.status.as_deref() {
        None | Some("all") => None,
        Some(raw) => match raw.parse::<WeekStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(Message::new("Invalid status filter")),
                )
                    .into_response();
            }
        },
    };

    let defaults = WeekQuery::default();
    let query = WeekQuery {
        status,
        start_date: params.start_date,
        end_date: params.end_date,
        sort_by: params.sort_by.unwrap_or(defaults.sort_by),
        sort_order: params.sort_order.unwrap_or(defaults.sort_order),
        page: params.page.unwrap_or(defaults.page),
        page_size: params.page_size.unwrap_or(defaults.page_size),
    };

    match state.weeks.list(&query).await {
        Ok(page) => Json(page).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "week listing failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
