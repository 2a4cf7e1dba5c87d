use crate::db::repository::{MosqueRepository, RecordKind, StoreError};
use crate::models::{Event, Member, MemberRole, Mosque, PrayerEntry, PrayerName};

/// In-process implementation of [`MosqueRepository`]. Backs the unit tests
/// and the `--memory` demo mode; state lives in an owned value handed to the
/// caller, never in process-wide globals.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    mosques: Vec<Mosque>,
    members: Vec<Member>,
    events: Vec<Event>,
    prayer_times: Vec<(i64, PrayerEntry)>,
    next_id: i64,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MosqueRepository for MemoryRepository {
    fn add_mosque(&mut self, name: &str, address: Option<&str>) -> Result<Mosque, StoreError> {
        let mosque = Mosque {
            id: self.next_id(),
            name: name.to_string(),
            address: address.map(str::to_string),
        };
        self.mosques.push(mosque.clone());
        Ok(mosque)
    }

    fn get_mosque(&self, id: i64) -> Result<Mosque, StoreError> {
        self.mosques
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("mosque {}", id)))
    }

    fn list_mosques(&self) -> Result<Vec<Mosque>, StoreError> {
        Ok(self.mosques.clone())
    }

    fn add_member(
        &mut self,
        mosque_id: i64,
        name: &str,
        role: MemberRole,
    ) -> Result<Member, StoreError> {
        self.get_mosque(mosque_id)?;
        let member = Member {
            id: self.next_id(),
            mosque_id,
            name: name.to_string(),
            role,
        };
        self.members.push(member.clone());
        Ok(member)
    }

    fn add_event(&mut self, mosque_id: i64, title: &str, date: &str) -> Result<Event, StoreError> {
        self.get_mosque(mosque_id)?;
        let event = Event {
            id: self.next_id(),
            mosque_id,
            title: title.to_string(),
            date: date.to_string(),
        };
        self.events.push(event.clone());
        Ok(event)
    }

    fn upsert_prayer_time(
        &mut self,
        mosque_id: i64,
        name: PrayerName,
        time: &str,
    ) -> Result<PrayerEntry, StoreError> {
        self.get_mosque(mosque_id)?;

        if let Some((_, entry)) = self
            .prayer_times
            .iter_mut()
            .find(|(m, e)| *m == mosque_id && e.name == name)
        {
            entry.time = time.to_string();
            return Ok(entry.clone());
        }

        let entry = PrayerEntry::new(self.next_id().to_string(), name, time);
        self.prayer_times.push((mosque_id, entry.clone()));
        Ok(entry)
    }

    fn list_prayer_times(&self, mosque_id: i64) -> Result<Vec<PrayerEntry>, StoreError> {
        Ok(self
            .prayer_times
            .iter()
            .filter(|(m, _)| *m == mosque_id)
            .map(|(_, e)| e.clone())
            .collect())
    }

    fn count(&self, mosque_id: i64, kind: RecordKind) -> Result<u64, StoreError> {
        let n = match kind {
            RecordKind::Members => self.members.iter().filter(|m| m.mosque_id == mosque_id).count(),
            RecordKind::Events => self.events.iter().filter(|e| e.mosque_id == mosque_id).count(),
            RecordKind::PrayerTimes => self
                .prayer_times
                .iter()
                .filter(|(m, _)| *m == mosque_id)
                .count(),
        };
        Ok(n as u64)
    }

    fn upcoming_event_count(&self, mosque_id: i64, today: &str) -> Result<u64, StoreError> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.mosque_id == mosque_id && e.date.as_str() >= today)
            .count() as u64)
    }
}
