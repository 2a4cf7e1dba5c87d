use chrono::NaiveTime;
use tempfile::TempDir;

use minaret::db::{MosqueRepository, RecordKind, SqliteRepository};
use minaret::models::{MemberRole, PrayerName};
use minaret::schedule::resolve_next;
use minaret::summary::mosque_summary;

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn seeded_repo(dir: &TempDir) -> (SqliteRepository, i64) {
    let mut repo = SqliteRepository::open(&dir.path().join("minaret.db")).unwrap();
    let mosque = repo.add_mosque("Al-Noor", Some("12 High St")).unwrap();

    repo.add_member(mosque.id, "Ahmed", MemberRole::Imam).unwrap();
    repo.add_member(mosque.id, "Bilal", MemberRole::Muazzin).unwrap();
    repo.add_member(mosque.id, "Yusuf", MemberRole::Admin).unwrap();

    repo.add_event(mosque.id, "Friday lecture", "2099-01-02").unwrap();
    repo.add_event(mosque.id, "Old bazaar", "2000-01-01").unwrap();

    repo.upsert_prayer_time(mosque.id, PrayerName::Fajr, "05:00").unwrap();
    repo.upsert_prayer_time(mosque.id, PrayerName::Dhuhr, "12:30").unwrap();
    repo.upsert_prayer_time(mosque.id, PrayerName::Asr, "04:00 PM").unwrap();
    repo.upsert_prayer_time(mosque.id, PrayerName::Maghrib, "18:45").unwrap();
    repo.upsert_prayer_time(mosque.id, PrayerName::Isha, "20:00").unwrap();

    (repo, mosque.id)
}

#[test]
fn summary_reflects_storage_state() {
    let dir = TempDir::new().unwrap();
    let (repo, mosque_id) = seeded_repo(&dir);

    let summary = mosque_summary(&repo, mosque_id, "2026-08-30", at(8, 0)).unwrap();
    assert_eq!(summary.member_count, 3);
    assert_eq!(summary.upcoming_event_count, 1);
    assert_eq!(summary.next_prayer.unwrap().name, PrayerName::Dhuhr);
}

#[test]
fn summary_wraps_after_isha() {
    let dir = TempDir::new().unwrap();
    let (repo, mosque_id) = seeded_repo(&dir);

    let summary = mosque_summary(&repo, mosque_id, "2026-08-30", at(21, 0)).unwrap();
    assert_eq!(summary.next_prayer.unwrap().name, PrayerName::Fajr);
}

#[test]
fn twelve_hour_slot_survives_the_round_trip() {
    let dir = TempDir::new().unwrap();
    let (repo, mosque_id) = seeded_repo(&dir);

    let entries = repo.list_prayer_times(mosque_id).unwrap();
    let asr = entries.iter().find(|e| e.name == PrayerName::Asr).unwrap();
    // Stored verbatim, parsed as 16:00 by the resolver.
    assert_eq!(asr.time, "04:00 PM");

    let next = resolve_next(&entries, at(15, 0)).unwrap();
    assert_eq!(next.name, PrayerName::Asr);
}

#[test]
fn summary_json_matches_the_wire_shape() {
    let dir = TempDir::new().unwrap();
    let (repo, mosque_id) = seeded_repo(&dir);

    let summary = mosque_summary(&repo, mosque_id, "2026-08-30", at(8, 0)).unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["memberCount"], 3);
    assert_eq!(json["upcomingEventCount"], 1);
    assert_eq!(json["nextPrayer"]["name"], "dhuhr");
}

#[test]
fn empty_mosque_summarizes_to_null_next_prayer() {
    let dir = TempDir::new().unwrap();
    let mut repo = SqliteRepository::open(&dir.path().join("minaret.db")).unwrap();
    let mosque = repo.add_mosque("Empty", None).unwrap();

    let summary = mosque_summary(&repo, mosque.id, "2026-08-30", at(8, 0)).unwrap();
    assert!(summary.next_prayer.is_none());

    let json = serde_json::to_value(&summary).unwrap();
    assert!(json["nextPrayer"].is_null());
}

#[test]
fn reopening_the_database_keeps_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("minaret.db");
    let mosque_id = {
        let mut repo = SqliteRepository::open(&path).unwrap();
        let mosque = repo.add_mosque("Persistent", None).unwrap();
        repo.upsert_prayer_time(mosque.id, PrayerName::Isha, "20:00").unwrap();
        mosque.id
    };

    let repo = SqliteRepository::open(&path).unwrap();
    assert_eq!(repo.count(mosque_id, RecordKind::PrayerTimes).unwrap(), 1);
    assert_eq!(repo.get_mosque(mosque_id).unwrap().name, "Persistent");
}
