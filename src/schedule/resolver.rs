use chrono::{NaiveTime, Timelike};

use crate::models::PrayerEntry;
use crate::schedule::clock::parse_clock_minutes;

/// Pick the next prayer from a mosque's schedule relative to `reference`.
///
/// Entries are ordered by parsed minutes-since-midnight (stable sort, so
/// entries with equal times keep their input order) and the first one
/// strictly after the reference minute wins. An entry at exactly the
/// reference minute counts as already passed. When every entry is at or
/// before the reference, the earliest entry is returned — the schedule is a
/// daily cycle, so that is tomorrow's first prayer. An empty schedule yields
/// `None`.
///
/// Pure function of its inputs; the schedule is read-only here.
pub fn resolve_next<'a>(
    entries: &'a [PrayerEntry],
    reference: NaiveTime,
) -> Option<&'a PrayerEntry> {
    let ref_minutes = reference.hour() * 60 + reference.minute();

    let mut by_time: Vec<(u32, &PrayerEntry)> = entries
        .iter()
        .map(|e| (parse_clock_minutes(&e.time), e))
        .collect();
    by_time.sort_by_key(|(minutes, _)| *minutes);

    by_time
        .iter()
        .find(|(minutes, _)| *minutes > ref_minutes)
        .or_else(|| by_time.first())
        .map(|(_, entry)| *entry)
}

/// Minutes from `reference` until `entry`, wrapping past midnight when the
/// entry is at or before the reference minute.
pub fn minutes_until(entry: &PrayerEntry, reference: NaiveTime) -> u32 {
    let ref_minutes = reference.hour() * 60 + reference.minute();
    let entry_minutes = parse_clock_minutes(&entry.time);
    if entry_minutes > ref_minutes {
        entry_minutes - ref_minutes
    } else {
        entry_minutes + 24 * 60 - ref_minutes
    }
}
