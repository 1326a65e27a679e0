use crate::modules::timesheets::core::status::WeekStatus;
use crate::modules::timesheets::core::week::Week;
use chrono::NaiveDate;

/// Builder for week fixtures. Defaults to the first week of 2024 with a
/// completed 40-hour summary.
pub struct WeekBuilder {
    inner: Week,
}

impl Default for WeekBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WeekBuilder {
    pub fn new() -> Self {
        Self {
            inner: Week {
                id: "w1".to_string(),
                week_number: 1,
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                status: WeekStatus::Completed,
                total_hours: 40.0,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn week_number(mut self, v: u32) -> Self {
        self.inner.week_number = v;
        self
    }

    pub fn dates(mut self, start: &str, end: &str) -> Self {
        self.inner.start_date = start.parse().expect("fixture date must be valid");
        self.inner.end_date = end.parse().expect("fixture date must be valid");
        self
    }

    pub fn status(mut self, v: WeekStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn total_hours(mut self, v: f64) -> Self {
        self.inner.total_hours = v;
        self
    }

    pub fn build(self) -> Week {
        self.inner
    }
}
