use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Work type catalog shown by the entry form. Membership is not enforced at
/// write time.
pub const WORK_TYPES: [&str; 6] = [
    "Bug Fixes",
    "Feature Development",
    "Design",
    "Testing",
    "Meetings",
    "Documentation",
];

/// Project catalog shown by the entry form.
pub const PROJECTS: [&str; 5] = [
    "Homepage Development",
    "Mobile App",
    "API Integration",
    "Dashboard Redesign",
    "E-commerce Platform",
];

/// A single day's logged work item, owned by exactly one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub week_id: String,
    pub date: NaiveDate,
    pub task_description: String,
    pub project: String,
    pub type_of_work: String,
    pub hours: f64,
}

/// Payload for creating an entry. The id and owning week come from the
/// route, not the body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub date: NaiveDate,
    pub task_description: String,
    pub project: String,
    pub type_of_work: String,
    pub hours: f64,
}

/// Partial update for an entry. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPatch {
    pub task_description: Option<String>,
    pub project: Option<String>,
    pub type_of_work: Option<String>,
    pub hours: Option<f64>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Hours must be a positive number")]
    NonPositiveHours,
}

impl NewEntry {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.task_description.trim().is_empty()
            || self.project.trim().is_empty()
            || self.type_of_work.trim().is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if self.hours <= 0.0 {
            return Err(ValidationError::NonPositiveHours);
        }
        Ok(())
    }
}

impl EntryPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if matches!(self.hours, Some(h) if h <= 0.0) {
            return Err(ValidationError::NonPositiveHours);
        }
        Ok(())
    }

}
