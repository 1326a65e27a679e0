use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::auth::use_cases::login::inbound::http as login_http;
use crate::modules::timesheets::use_cases::create_entry::inbound::http as create_entry_http;
use crate::modules::timesheets::use_cases::delete_entry::inbound::http as delete_entry_http;
use crate::modules::timesheets::use_cases::get_week::inbound::http as get_week_http;
use crate::modules::timesheets::use_cases::list_weeks::inbound::http as list_weeks_http;
use crate::modules::timesheets::use_cases::update_entry::inbound::http as update_entry_http;
use crate::shell::seed;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(login_http::handle))
        .route("/api/seed", get(seed::handle))
        .route("/api/timesheets", get(list_weeks_http::handle))
        .route("/api/timesheets/{week_id}", get(get_week_http::handle))
        .route(
            "/api/timesheets/{week_id}/entries",
            post(create_entry_http::handle),
        )
        .route(
            "/api/timesheets/{week_id}/entries/{entry_id}",
            put(update_entry_http::handle).delete(delete_entry_http::handle),
        )
        .with_state(state)
}
