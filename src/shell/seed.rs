// Demo dataset and the reset endpoint. The figures mirror the sample
// timesheet period: twenty weeks from 2024-01-01, six of them with entries.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;

use crate::modules::auth::core::ports::UserStore;
use crate::modules::auth::core::user::User;
use crate::modules::timesheets::core::entry::TimeEntry;
use crate::modules::timesheets::core::ports::{EntryStore, WeekStore};
use crate::modules::timesheets::core::status::WeekStatus;
use crate::modules::timesheets::core::week::Week;
use crate::shared::core::http::Message;
use crate::shared::core::store::StoreError;
use crate::shell::state::AppState;

fn date(s: &str) -> NaiveDate {
    s.parse().expect("seed dates are valid ISO dates")
}

fn week(
    id: &str,
    week_number: u32,
    start: &str,
    end: &str,
    status: WeekStatus,
    total_hours: f64,
) -> Week {
    Week {
        id: id.to_string(),
        week_number,
        start_date: date(start),
        end_date: date(end),
        status,
        total_hours,
    }
}

fn entry(id: &str, week_id: &str, day: &str, task: &str, project: &str, work: &str, hours: f64) -> TimeEntry {
    TimeEntry {
        id: id.to_string(),
        week_id: week_id.to_string(),
        date: date(day),
        task_description: task.to_string(),
        project: project.to_string(),
        type_of_work: work.to_string(),
        hours,
    }
}

pub fn demo_users() -> Vec<User> {
    vec![User {
        id: "user-1".to_string(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        password: "password123".to_string(),
    }]
}

pub fn demo_weeks() -> Vec<Week> {
    use WeekStatus::{Completed, Incomplete, Missing};
    vec![
        week("w1", 1, "2024-01-01", "2024-01-05", Completed, 40.0),
        week("w2", 2, "2024-01-08", "2024-01-12", Completed, 40.0),
        week("w3", 3, "2024-01-15", "2024-01-19", Incomplete, 28.0),
        week("w4", 4, "2024-01-22", "2024-01-26", Completed, 40.0),
        week("w5", 5, "2024-01-29", "2024-02-02", Missing, 0.0),
        week("w6", 6, "2024-02-05", "2024-02-09", Completed, 40.0),
        week("w7", 7, "2024-02-12", "2024-02-16", Completed, 40.0),
        week("w8", 8, "2024-02-19", "2024-02-23", Incomplete, 16.0),
        week("w9", 9, "2024-02-26", "2024-03-01", Completed, 40.0),
        week("w10", 10, "2024-03-04", "2024-03-08", Missing, 0.0),
        week("w11", 11, "2024-03-11", "2024-03-15", Completed, 40.0),
        week("w12", 12, "2024-03-18", "2024-03-22", Incomplete, 32.0),
        week("w13", 13, "2024-03-25", "2024-03-29", Completed, 40.0),
        week("w14", 14, "2024-04-01", "2024-04-05", Completed, 40.0),
        week("w15", 15, "2024-04-08", "2024-04-12", Missing, 0.0),
        week("w16", 16, "2024-04-15", "2024-04-19", Completed, 40.0),
        week("w17", 17, "2024-04-22", "2024-04-26", Incomplete, 20.0),
        week("w18", 18, "2024-04-29", "2024-05-03", Completed, 40.0),
        week("w19", 19, "2024-05-06", "2024-05-10", Completed, 40.0),
        week("w20", 20, "2024-05-13", "2024-05-17", Missing, 0.0),
    ]
}

#[rustfmt::skip]
pub fn demo_entries() -> Vec<TimeEntry> {
    const HOMEPAGE: &str = "Homepage Development";
    const API: &str = "API Integration";
    const DASHBOARD: &str = "Dashboard Redesign";
    const MOBILE: &str = "Mobile App";
    vec![
        // Week 1: five full days.
        entry("entry-1", "w1", "2024-01-01", HOMEPAGE, HOMEPAGE, "Feature Development", 8.0),
        entry("entry-2", "w1", "2024-01-02", HOMEPAGE, HOMEPAGE, "Feature Development", 8.0),
        entry("entry-3", "w1", "2024-01-03", HOMEPAGE, HOMEPAGE, "Design", 8.0),
        entry("entry-4", "w1", "2024-01-04", HOMEPAGE, HOMEPAGE, "Bug Fixes", 8.0),
        entry("entry-5", "w1", "2024-01-05", HOMEPAGE, HOMEPAGE, "Testing", 8.0),
        // Week 2: five full days.
        entry("entry-6", "w2", "2024-01-08", API, API, "Feature Development", 8.0),
        entry("entry-7", "w2", "2024-01-09", API, API, "Feature Development", 8.0),
        entry("entry-8", "w2", "2024-01-10", API, API, "Testing", 8.0),
        entry("entry-9", "w2", "2024-01-11", API, API, "Documentation", 8.0),
        entry("entry-10", "w2", "2024-01-12", API, API, "Bug Fixes", 8.0),
        // Week 3: 28 hours, incomplete.
        entry("entry-11", "w3", "2024-01-15", HOMEPAGE, HOMEPAGE, "Feature Development", 8.0),
        entry("entry-12", "w3", "2024-01-16", HOMEPAGE, HOMEPAGE, "Bug Fixes", 8.0),
        entry("entry-13", "w3", "2024-01-17", HOMEPAGE, HOMEPAGE, "Design", 4.0),
        entry("entry-14", "w3", "2024-01-18", HOMEPAGE, HOMEPAGE, "Meetings", 4.0),
        entry("entry-15", "w3", "2024-01-19", HOMEPAGE, HOMEPAGE, "Testing", 4.0),
        // Week 4: ten half days.
        entry("entry-16", "w4", "2024-01-22", HOMEPAGE, HOMEPAGE, "Feature Development", 4.0),
        entry("entry-17", "w4", "2024-01-22", HOMEPAGE, HOMEPAGE, "Design", 4.0),
        entry("entry-18", "w4", "2024-01-23", HOMEPAGE, HOMEPAGE, "Feature Development", 4.0),
        entry("entry-19", "w4", "2024-01-23", HOMEPAGE, HOMEPAGE, "Bug Fixes", 4.0),
        entry("entry-20", "w4", "2024-01-23", HOMEPAGE, HOMEPAGE, "Testing", 4.0),
        entry("entry-21", "w4", "2024-01-24", HOMEPAGE, HOMEPAGE, "Feature Development", 4.0),
        entry("entry-22", "w4", "2024-01-24", HOMEPAGE, HOMEPAGE, "Meetings", 4.0),
        entry("entry-23", "w4", "2024-01-25", HOMEPAGE, HOMEPAGE, "Feature Development", 4.0),
        entry("entry-24", "w4", "2024-01-25", HOMEPAGE, HOMEPAGE, "Documentation", 4.0),
        entry("entry-25", "w4", "2024-01-26", HOMEPAGE, HOMEPAGE, "Feature Development", 4.0),
        // Week 6: five full days.
        entry("entry-26", "w6", "2024-02-05", DASHBOARD, DASHBOARD, "Design", 8.0),
        entry("entry-27", "w6", "2024-02-06", DASHBOARD, DASHBOARD, "Feature Development", 8.0),
        entry("entry-28", "w6", "2024-02-07", DASHBOARD, DASHBOARD, "Feature Development", 8.0),
        entry("entry-29", "w6", "2024-02-08", DASHBOARD, DASHBOARD, "Testing", 8.0),
        entry("entry-30", "w6", "2024-02-09", DASHBOARD, DASHBOARD, "Bug Fixes", 8.0),
        // Week 8: 16 hours, incomplete.
        entry("entry-31", "w8", "2024-02-19", "Mobile App Setup", MOBILE, "Feature Development", 8.0),
        entry("entry-32", "w8", "2024-02-20", "Mobile App Navigation", MOBILE, "Feature Development", 8.0),
    ]
}

/// Resets every store to the demo dataset.
pub async fn seed(state: &AppState) -> Result<(), StoreError> {
    state.users.replace_all(demo_users()).await?;
    state.weeks.replace_all(demo_weeks()).await?;
    state.entries.replace_all(demo_entries()).await?;
    tracing::info!("demo dataset seeded");
    Ok(())
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match seed(&state).await {
        Ok(()) => Json(Message::new("Database seeded successfully")).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "seeding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Message::new("Error seeding database")),
            )
                .into_response()
        }
    }
}
