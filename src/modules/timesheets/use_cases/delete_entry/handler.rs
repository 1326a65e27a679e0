use crate::modules::timesheets::core::ports::{EntryStore, WeekStore};
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::recalculate_week::recalculate_week;
use std::sync::Arc;

pub struct DeleteEntryHandler {
    weeks: Arc<dyn WeekStore>,
    entries: Arc<dyn EntryStore>,
}

impl DeleteEntryHandler {
    pub fn new(weeks: Arc<dyn WeekStore>, entries: Arc<dyn EntryStore>) -> Self {
        Self { weeks, entries }
    }

    pub async fn handle(&self, week_id: &str, entry_id: &str) -> Result<(), ApplicationError> {
        let removed = self.entries.delete(week_id, entry_id).await?;
        if !removed {
            return Err(ApplicationError::EntryNotFound);
        }
        // Deleting a week's last entry leaves the week in place; the
        // recompute marks it missing.
        recalculate_week(&*self.weeks, &*self.entries, week_id).await?;
        tracing::info!(week_id, entry_id, "entry deleted");
        Ok(())
    }
}
