use crate::modules::timesheets::core::entry::{EntryPatch, TimeEntry};
use crate::modules::timesheets::core::ports::{EntryStore, WeekStore};
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::recalculate_week::recalculate_week;
use std::sync::Arc;

pub struct UpdateEntryHandler {
    weeks: Arc<dyn WeekStore>,
    entries: Arc<dyn EntryStore>,
}

impl UpdateEntryHandler {
    pub fn new(weeks: Arc<dyn WeekStore>, entries: Arc<dyn EntryStore>) -> Self {
        Self { weeks, entries }
    }

    pub async fn handle(
        &self,
        week_id: &str,
        entry_id: &str,
        patch: EntryPatch,
    ) -> Result<TimeEntry, ApplicationError> {
        if self.entries.find(week_id, entry_id).await?.is_none() {
            return Err(ApplicationError::EntryNotFound);
        }
        patch.validate()?;

        let updated = self
            .entries
            .update(week_id, entry_id, patch)
            .await?
            // The entry can vanish between the existence check and the
            // update; report it the same way.
            .ok_or(ApplicationError::EntryNotFound)?;
        recalculate_week(&*self.weeks, &*self.entries, week_id).await?;
        tracing::info!(week_id, entry_id, "entry updated");
        Ok(updated)
    }
}
