use thiserror::Error;

use crate::models::{Event, Member, MemberRole, Mosque, PrayerEntry, PrayerName};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{what} not found")]
    NotFound { what: String },
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn not_found(what: impl Into<String>) -> Self {
        StoreError::NotFound { what: what.into() }
    }
}

/// Closed set of per-mosque record kinds. Each variant maps explicitly to its
/// backing table or collection, so an unknown kind is a compile error rather
/// than a bad string key at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Members,
    Events,
    PrayerTimes,
}

impl RecordKind {
    pub fn table(&self) -> &'static str {
        match self {
            RecordKind::Members => "members",
            RecordKind::Events => "events",
            RecordKind::PrayerTimes => "prayer_times",
        }
    }
}

/// Storage behind the schedule resolver and summary aggregator. Injected into
/// callers so tests and the demo mode can swap in [`MemoryRepository`] for
/// the SQLite implementation.
///
/// [`MemoryRepository`]: crate::db::MemoryRepository
pub trait MosqueRepository {
    fn add_mosque(&mut self, name: &str, address: Option<&str>) -> Result<Mosque, StoreError>;
    fn get_mosque(&self, id: i64) -> Result<Mosque, StoreError>;
    fn list_mosques(&self) -> Result<Vec<Mosque>, StoreError>;

    /// Resolve a mosque by numeric id or by exact name.
    fn find_mosque(&self, id_or_name: &str) -> Result<Mosque, StoreError> {
        if let Ok(id) = id_or_name.parse::<i64>() {
            if let Ok(mosque) = self.get_mosque(id) {
                return Ok(mosque);
            }
        }
        self.list_mosques()?
            .into_iter()
            .find(|m| m.name == id_or_name)
            .ok_or_else(|| StoreError::not_found(format!("mosque '{}'", id_or_name)))
    }

    fn add_member(
        &mut self,
        mosque_id: i64,
        name: &str,
        role: MemberRole,
    ) -> Result<Member, StoreError>;

    fn add_event(&mut self, mosque_id: i64, title: &str, date: &str) -> Result<Event, StoreError>;

    /// Set one slot of a mosque's schedule; a second write to the same slot
    /// replaces the time. The string is stored verbatim.
    fn upsert_prayer_time(
        &mut self,
        mosque_id: i64,
        name: PrayerName,
        time: &str,
    ) -> Result<PrayerEntry, StoreError>;

    fn list_prayer_times(&self, mosque_id: i64) -> Result<Vec<PrayerEntry>, StoreError>;

    fn count(&self, mosque_id: i64, kind: RecordKind) -> Result<u64, StoreError>;

    /// Events with `date >= today`, compared as "YYYY-MM-DD" strings.
    fn upcoming_event_count(&self, mosque_id: i64, today: &str) -> Result<u64, StoreError>;
}
