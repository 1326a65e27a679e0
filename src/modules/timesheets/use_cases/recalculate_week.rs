use crate::modules::timesheets::core::ports::{EntryStore, WeekStore};
use crate::modules::timesheets::core::status::{WeekSummary, summarize};
use crate::shared::core::store::StoreError;

/// Recomputes and persists one week's cached `status`/`total_hours` from the
/// live entry set. Every mutation path calls this, so the classification
/// rule lives in exactly one place.
///
/// The preceding mutation and this recompute are separate store writes with
/// no transaction across them. Racing mutations on the same week each
/// recompute; the last recompute to land wins.
pub async fn recalculate_week(
    weeks: &dyn WeekStore,
    entries: &dyn EntryStore,
    week_id: &str,
) -> Result<WeekSummary, StoreError> {
    let current = entries.list_by_week(week_id).await?;
    let summary = summarize(&current);
    weeks.set_summary(week_id, summary).await?;
    tracing::debug!(
        week_id,
        status = %summary.status,
        total_hours = summary.total_hours,
        "recalculated week summary"
    );
    Ok(summary)
}
