use crate::modules::timesheets::core::entry::TimeEntry;
use serde::{Deserialize, Serialize};

/// Hours a week must reach to count as completed.
pub const FULL_WEEK_HOURS: f64 = 40.0;

/// Derived classification of a week. Variant order matches the
/// lexicographic order of the wire names, so sorting by status sorts
/// completed < incomplete < missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStatus {
    Completed,
    Incomplete,
    Missing,
}

impl WeekStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WeekStatus::Completed => "completed",
            WeekStatus::Incomplete => "incomplete",
            WeekStatus::Missing => "missing",
        }
    }
}

impl std::fmt::Display for WeekStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for WeekStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(WeekStatus::Completed),
            "incomplete" => Ok(WeekStatus::Incomplete),
            "missing" => Ok(WeekStatus::Missing),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekSummary {
    pub status: WeekStatus,
    pub total_hours: f64,
}

/// Derives a week's cached `status` and `total_hours` from its current
/// entries. Pure and total: any finite, possibly empty entry set maps to a
/// summary. Entries reach this function already validated (`hours > 0` is
/// enforced at write time), so no re-validation happens here.
///
/// Exactly 40 hours is completed, not incomplete.
pub fn summarize(entries: &[TimeEntry]) -> WeekSummary {
    let total_hours: f64 = entries.iter().map(|e| e.hours).sum();
    let status = if total_hours >= FULL_WEEK_HOURS {
        WeekStatus::Completed
    } else if total_hours > 0.0 {
        WeekStatus::Incomplete
    } else {
        WeekStatus::Missing
    };
    WeekSummary {
        status,
        total_hours,
    }
}
