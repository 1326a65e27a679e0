// In-memory week and entry stores.
//
// Purpose
// - Exercise the use cases and serve the demo dataset without a database.
//
// Responsibilities
// - Store rows in plain vectors behind an async lock.
// - Apply the listing query (filter, sort, paginate) the same way a
//   database-backed adapter would push it into its query layer.

use crate::modules::timesheets::core::entry::{EntryPatch, NewEntry, TimeEntry};
use crate::modules::timesheets::core::ports::{
    EntryStore, SortOrder, WeekPage, WeekQuery, WeekSortBy, WeekStore,
};
use crate::modules::timesheets::core::status::WeekSummary;
use crate::modules::timesheets::core::week::Week;
use crate::shared::core::store::StoreError;
use std::cmp::Ordering;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryWeekStore {
    rows: RwLock<Vec<Week>>,
    is_offline: bool,
}

impl InMemoryWeekStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::backend("Week store offline"));
        }
        Ok(())
    }
}

fn matches(query: &WeekQuery, week: &Week) -> bool {
    if let Some(status) = query.status
        && week.status != status
    {
        return false;
    }
    if let Some(from) = query.start_date
        && week.start_date < from
    {
        return false;
    }
    if let Some(until) = query.end_date
        && week.end_date > until
    {
        return false;
    }
    true
}

fn compare(sort_by: WeekSortBy, a: &Week, b: &Week) -> Ordering {
    match sort_by {
        WeekSortBy::WeekNumber => a.week_number.cmp(&b.week_number),
        WeekSortBy::StartDate => a.start_date.cmp(&b.start_date),
        WeekSortBy::Status => a.status.cmp(&b.status),
    }
}

#[async_trait::async_trait]
impl WeekStore for InMemoryWeekStore {
    async fn find(&self, week_id: &str) -> Result<Option<Week>, StoreError> {
        self.check_online()?;
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|w| w.id == week_id)
            .cloned())
    }

    async fn list(&self, query: &WeekQuery) -> Result<WeekPage, StoreError> {
        self.check_online()?;
        let guard = self.rows.read().await;

        let mut items: Vec<Week> = guard
            .iter()
            .filter(|w| matches(query, w))
            .cloned()
            .collect();
        items.sort_by(|a, b| compare(query.sort_by, a, b));
        if query.sort_order == SortOrder::Desc {
            items.reverse();
        }

        let page = query.page.max(1);
        let page_size = query.page_size.max(1);
        let total = items.len() as u64;
        let total_pages = total.div_ceil(page_size as u64);

        let start = ((page - 1) as usize).saturating_mul(page_size as usize);
        let data = if start >= items.len() {
            Vec::new()
        } else {
            let end = start.saturating_add(page_size as usize).min(items.len());
            items[start..end].to_vec()
        };

        Ok(WeekPage {
            data,
            total,
            page,
            page_size,
            total_pages,
        })
    }

    async fn set_summary(&self, week_id: &str, summary: WeekSummary) -> Result<(), StoreError> {
        self.check_online()?;
        let mut guard = self.rows.write().await;
        if let Some(week) = guard.iter_mut().find(|w| w.id == week_id) {
            week.apply_summary(summary);
        }
        Ok(())
    }

    async fn replace_all(&self, weeks: Vec<Week>) -> Result<(), StoreError> {
        self.check_online()?;
        *self.rows.write().await = weeks;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryEntryStore {
    rows: RwLock<Vec<TimeEntry>>,
    is_offline: bool,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::backend("Entry store offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn list_by_week(&self, week_id: &str) -> Result<Vec<TimeEntry>, StoreError> {
        self.check_online()?;
        let guard = self.rows.read().await;
        let mut items: Vec<TimeEntry> = guard
            .iter()
            .filter(|e| e.week_id == week_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn find(&self, week_id: &str, entry_id: &str) -> Result<Option<TimeEntry>, StoreError> {
        self.check_online()?;
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|e| e.week_id == week_id && e.id == entry_id)
            .cloned())
    }

    async fn insert(&self, week_id: &str, draft: NewEntry) -> Result<TimeEntry, StoreError> {
        self.check_online()?;
        let entry = TimeEntry {
            id: Uuid::now_v7().to_string(),
            week_id: week_id.to_string(),
            date: draft.date,
            task_description: draft.task_description,
            project: draft.project,
            type_of_work: draft.type_of_work,
            hours: draft.hours,
        };
        self.rows.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn update(
        &self,
        week_id: &str,
        entry_id: &str,
        patch: EntryPatch,
    ) -> Result<Option<TimeEntry>, StoreError> {
        self.check_online()?;
        let mut guard = self.rows.write().await;
        let Some(entry) = guard
            .iter_mut()
            .find(|e| e.week_id == week_id && e.id == entry_id)
        else {
            return Ok(None);
        };
        if let Some(task_description) = patch.task_description {
            entry.task_description = task_description;
        }
        if let Some(project) = patch.project {
            entry.project = project;
        }
        if let Some(type_of_work) = patch.type_of_work {
            entry.type_of_work = type_of_work;
        }
        if let Some(hours) = patch.hours {
            entry.hours = hours;
        }
        Ok(Some(entry.clone()))
    }

    async fn delete(&self, week_id: &str, entry_id: &str) -> Result<bool, StoreError> {
        self.check_online()?;
        let mut guard = self.rows.write().await;
        let before = guard.len();
        guard.retain(|e| !(e.week_id == week_id && e.id == entry_id));
        Ok(guard.len() < before)
    }

    async fn replace_all(&self, entries: Vec<TimeEntry>) -> Result<(), StoreError> {
        self.check_online()?;
        *self.rows.write().await = entries;
        Ok(())
    }
}
