use crate::modules::timesheets::core::entry::{NewEntry, TimeEntry};
use chrono::NaiveDate;

/// Builder for entry fixtures. Defaults to a full day on the homepage
/// project in week `w1`.
pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: TimeEntry {
                id: "entry-1".to_string(),
                week_id: "w1".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                task_description: "Homepage Development".to_string(),
                project: "Homepage Development".to_string(),
                type_of_work: "Feature Development".to_string(),
                hours: 8.0,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn week_id(mut self, v: impl Into<String>) -> Self {
        self.inner.week_id = v.into();
        self
    }

    pub fn date(mut self, v: &str) -> Self {
        self.inner.date = v.parse().expect("fixture date must be a valid ISO date");
        self
    }

    pub fn task_description(mut self, v: impl Into<String>) -> Self {
        self.inner.task_description = v.into();
        self
    }

    pub fn project(mut self, v: impl Into<String>) -> Self {
        self.inner.project = v.into();
        self
    }

    pub fn type_of_work(mut self, v: impl Into<String>) -> Self {
        self.inner.type_of_work = v.into();
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }

    /// The same fixture as a creation draft (no id, no owning week).
    pub fn build_draft(self) -> NewEntry {
        NewEntry {
            date: self.inner.date,
            task_description: self.inner.task_description,
            project: self.inner.project,
            type_of_work: self.inner.type_of_work,
            hours: self.inner.hours,
        }
    }
}
