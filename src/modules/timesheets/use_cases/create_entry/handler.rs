use crate::modules::timesheets::core::entry::{NewEntry, TimeEntry};
use crate::modules::timesheets::core::ports::{EntryStore, WeekStore};
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::recalculate_week::recalculate_week;
use std::sync::Arc;

pub struct CreateEntryHandler {
    weeks: Arc<dyn WeekStore>,
    entries: Arc<dyn EntryStore>,
}

impl CreateEntryHandler {
    pub fn new(weeks: Arc<dyn WeekStore>, entries: Arc<dyn EntryStore>) -> Self {
        Self { weeks, entries }
    }

    pub async fn handle(
        &self,
        week_id: &str,
        draft: NewEntry,
    ) -> Result<TimeEntry, ApplicationError> {
        if self.weeks.find(week_id).await?.is_none() {
            return Err(ApplicationError::WeekNotFound);
        }
        draft.validate()?;

        let entry = self.entries.insert(week_id, draft).await?;
        recalculate_week(&*self.weeks, &*self.entries, week_id).await?;
        tracing::info!(week_id, entry_id = %entry.id, "entry created");
        Ok(entry)
    }
}
