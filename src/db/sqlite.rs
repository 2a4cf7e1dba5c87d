use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::str::FromStr;

use crate::db::migrations::run_migrations;
use crate::db::repository::{MosqueRepository, RecordKind, StoreError};
use crate::models::{Event, Member, MemberRole, Mosque, PrayerEntry, PrayerName};

pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Opening database at {:?}", path))?;

        // WAL mode for better concurrent access
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Opening in-memory database")?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }
}

fn parse_name(s: &str) -> rusqlite::Result<PrayerName> {
    PrayerName::from_str(s).map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))
}

impl MosqueRepository for SqliteRepository {
    fn add_mosque(&mut self, name: &str, address: Option<&str>) -> Result<Mosque, StoreError> {
        self.conn.execute(
            "INSERT INTO mosques (name, address) VALUES (?1, ?2)",
            params![name, address],
        )?;
        Ok(Mosque {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            address: address.map(str::to_string),
        })
    }

    fn get_mosque(&self, id: i64) -> Result<Mosque, StoreError> {
        self.conn
            .query_row(
                "SELECT id, name, address FROM mosques WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Mosque {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        address: row.get(2)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| StoreError::not_found(format!("mosque {}", id)))
    }

    fn list_mosques(&self) -> Result<Vec<Mosque>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, address FROM mosques ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(Mosque {
                id: row.get(0)?,
                name: row.get(1)?,
                address: row.get(2)?,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    fn add_member(
        &mut self,
        mosque_id: i64,
        name: &str,
        role: MemberRole,
    ) -> Result<Member, StoreError> {
        self.get_mosque(mosque_id)?;
        self.conn.execute(
            "INSERT INTO members (mosque_id, name, role) VALUES (?1, ?2, ?3)",
            params![mosque_id, name, role.as_str()],
        )?;
        Ok(Member {
            id: self.conn.last_insert_rowid(),
            mosque_id,
            name: name.to_string(),
            role,
        })
    }

    fn add_event(&mut self, mosque_id: i64, title: &str, date: &str) -> Result<Event, StoreError> {
        self.get_mosque(mosque_id)?;
        self.conn.execute(
            "INSERT INTO events (mosque_id, title, date) VALUES (?1, ?2, ?3)",
            params![mosque_id, title, date],
        )?;
        Ok(Event {
            id: self.conn.last_insert_rowid(),
            mosque_id,
            title: title.to_string(),
            date: date.to_string(),
        })
    }

    fn upsert_prayer_time(
        &mut self,
        mosque_id: i64,
        name: PrayerName,
        time: &str,
    ) -> Result<PrayerEntry, StoreError> {
        self.get_mosque(mosque_id)?;
        self.conn.execute(
            "INSERT INTO prayer_times (mosque_id, slot, time) VALUES (?1, ?2, ?3)
             ON CONFLICT(mosque_id, slot) DO UPDATE SET time = ?3",
            params![mosque_id, name.as_str(), time],
        )?;

        let id: i64 = self.conn.query_row(
            "SELECT id FROM prayer_times WHERE mosque_id = ?1 AND slot = ?2",
            params![mosque_id, name.as_str()],
            |row| row.get(0),
        )?;
        Ok(PrayerEntry::new(id.to_string(), name, time))
    }

    fn list_prayer_times(&self, mosque_id: i64) -> Result<Vec<PrayerEntry>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, slot, time FROM prayer_times WHERE mosque_id = ?1 ORDER BY id",
        )?;

        let rows = stmt.query_map(params![mosque_id], |row| {
            let id: i64 = row.get(0)?;
            let slot: String = row.get(1)?;
            Ok(PrayerEntry {
                id: id.to_string(),
                name: parse_name(&slot)?,
                time: row.get(2)?,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    fn count(&self, mosque_id: i64, kind: RecordKind) -> Result<u64, StoreError> {
        // kind.table() is a closed set, never user input.
        let sql = format!("SELECT COUNT(*) FROM {} WHERE mosque_id = ?1", kind.table());
        let n: i64 = self.conn.query_row(&sql, params![mosque_id], |row| row.get(0))?;
        Ok(n as u64)
    }

    fn upcoming_event_count(&self, mosque_id: i64, today: &str) -> Result<u64, StoreError> {
        let n: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM events WHERE mosque_id = ?1 AND date >= ?2",
            params![mosque_id, today],
            |row| row.get(0),
        )?;
        Ok(n as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_replaces_slot() {
        let mut repo = SqliteRepository::open_in_memory().unwrap();
        let mosque = repo.add_mosque("Al-Noor", None).unwrap();

        repo.upsert_prayer_time(mosque.id, PrayerName::Fajr, "05:00")
            .unwrap();
        repo.upsert_prayer_time(mosque.id, PrayerName::Fajr, "05:15")
            .unwrap();

        let times = repo.list_prayer_times(mosque.id).unwrap();
        assert_eq!(times.len(), 1);
        assert_eq!(times[0].time, "05:15");
    }

    #[test]
    fn test_counts_are_tenant_scoped() {
        let mut repo = SqliteRepository::open_in_memory().unwrap();
        let a = repo.add_mosque("A", None).unwrap();
        let b = repo.add_mosque("B", None).unwrap();

        repo.add_member(a.id, "Ahmed", MemberRole::Imam).unwrap();
        repo.add_member(a.id, "Bilal", MemberRole::Muazzin).unwrap();
        repo.add_member(b.id, "Omar", MemberRole::Admin).unwrap();

        assert_eq!(repo.count(a.id, RecordKind::Members).unwrap(), 2);
        assert_eq!(repo.count(b.id, RecordKind::Members).unwrap(), 1);
        assert_eq!(repo.count(a.id, RecordKind::Events).unwrap(), 0);
    }

    #[test]
    fn test_upcoming_event_count_uses_date_string() {
        let mut repo = SqliteRepository::open_in_memory().unwrap();
        let mosque = repo.add_mosque("Al-Noor", None).unwrap();

        repo.add_event(mosque.id, "Jumu'ah lecture", "2026-09-04")
            .unwrap();
        repo.add_event(mosque.id, "Eid planning", "2026-08-01")
            .unwrap();

        // Same-day events count as upcoming (date >= today).
        assert_eq!(
            repo.upcoming_event_count(mosque.id, "2026-09-04").unwrap(),
            1
        );
        assert_eq!(
            repo.upcoming_event_count(mosque.id, "2026-08-01").unwrap(),
            2
        );
        assert_eq!(
            repo.upcoming_event_count(mosque.id, "2026-12-31").unwrap(),
            0
        );
    }

    #[test]
    fn test_missing_mosque_is_not_found() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let err = repo.get_mosque(42).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_find_mosque_by_name_or_id() {
        let mut repo = SqliteRepository::open_in_memory().unwrap();
        let mosque = repo.add_mosque("Al-Noor", Some("12 High St")).unwrap();

        assert_eq!(repo.find_mosque("Al-Noor").unwrap().id, mosque.id);
        assert_eq!(
            repo.find_mosque(&mosque.id.to_string()).unwrap().name,
            "Al-Noor"
        );
        assert!(repo.find_mosque("nowhere").is_err());
    }
}
