// Ports define what the timesheets module needs from the outside world,
// without implementing it.
//
// Responsibilities
// - Keep the module independent of any database by coding against traits.
//
// Boundaries
// - No concrete storage here. Adapters implement these traits in the
//   adapters layer.
//
// Testing guidance
// - The in-memory implementations double as the local development backend.

use crate::modules::timesheets::core::entry::{EntryPatch, NewEntry, TimeEntry};
use crate::modules::timesheets::core::status::{WeekStatus, WeekSummary};
use crate::modules::timesheets::core::week::Week;
use crate::shared::core::store::StoreError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum WeekSortBy {
    #[serde(rename = "weekNumber")]
    WeekNumber,
    #[serde(rename = "startDate")]
    StartDate,
    #[serde(rename = "status")]
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Listing surface for the weeks collection: status filter, date-range
/// filter, sort, and 1-based pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekQuery {
    pub status: Option<WeekStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort_by: WeekSortBy,
    pub sort_order: SortOrder,
    pub page: u32,
    pub page_size: u32,
}

impl Default for WeekQuery {
    fn default() -> Self {
        Self {
            status: None,
            start_date: None,
            end_date: None,
            sort_by: WeekSortBy::WeekNumber,
            sort_order: SortOrder::Asc,
            page: 1,
            page_size: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPage {
    pub data: Vec<Week>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
}

#[async_trait]
pub trait WeekStore: Send + Sync {
    async fn find(&self, week_id: &str) -> Result<Option<Week>, StoreError>;

    async fn list(&self, query: &WeekQuery) -> Result<WeekPage, StoreError>;

    /// Persists the cached derived fields for one week. A no-op when the
    /// week id is unknown.
    async fn set_summary(&self, week_id: &str, summary: WeekSummary) -> Result<(), StoreError>;

    /// Replaces the whole collection. Used by seeding.
    async fn replace_all(&self, weeks: Vec<Week>) -> Result<(), StoreError>;
}

#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn list_by_week(&self, week_id: &str) -> Result<Vec<TimeEntry>, StoreError>;

    async fn find(&self, week_id: &str, entry_id: &str) -> Result<Option<TimeEntry>, StoreError>;

    /// Inserts a validated draft and returns the stored entry. The store
    /// owns identifier generation.
    async fn insert(&self, week_id: &str, draft: NewEntry) -> Result<TimeEntry, StoreError>;

    /// Applies a partial update. Returns the updated entry, or `None` when
    /// no entry matches `(week_id, entry_id)`.
    async fn update(
        &self,
        week_id: &str,
        entry_id: &str,
        patch: EntryPatch,
    ) -> Result<Option<TimeEntry>, StoreError>;

    /// Returns whether an entry was actually removed.
    async fn delete(&self, week_id: &str, entry_id: &str) -> Result<bool, StoreError>;

    /// Replaces the whole collection. Used by seeding.
    async fn replace_all(&self, entries: Vec<TimeEntry>) -> Result<(), StoreError>;
}
