use chrono::NaiveTime;

use crate::db::repository::{MosqueRepository, RecordKind, StoreError};
use crate::models::MosqueSummary;
use crate::schedule::resolve_next;

/// Dashboard aggregate for one mosque: member count, upcoming-event count
/// (`date >= today` as a date-only string comparison) and the next prayer.
///
/// The three reads are independent, with no transaction around them;
/// concurrent writes can land between reads and skew a single summary.
/// Storage failures propagate unchanged, with no retry and no added context.
pub fn mosque_summary(
    repo: &dyn MosqueRepository,
    mosque_id: i64,
    today: &str,
    now: NaiveTime,
) -> Result<MosqueSummary, StoreError> {
    let member_count = repo.count(mosque_id, RecordKind::Members)?;
    let upcoming_event_count = repo.upcoming_event_count(mosque_id, today)?;
    let entries = repo.list_prayer_times(mosque_id)?;
    let next_prayer = resolve_next(&entries, now).cloned();

    Ok(MosqueSummary {
        next_prayer,
        member_count,
        upcoming_event_count,
    })
}
