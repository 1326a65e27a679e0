use crate::modules::timesheets::core::status::{WeekStatus, WeekSummary};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fixed calendar date range with its aggregated hours/status summary.
///
/// `status` and `total_hours` are cached derived fields, recomputed and
/// persisted after every entry mutation for this week. The source of truth
/// is the live set of entries with a matching `week_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub id: String,
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: WeekStatus,
    pub total_hours: f64,
}

impl Week {
    pub fn apply_summary(&mut self, summary: WeekSummary) {
        self.status = summary.status;
        self.total_hours = summary.total_hours;
    }
}
