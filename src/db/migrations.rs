use anyhow::Result;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS mosques (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL UNIQUE,
            address    TEXT,
            created_at TEXT DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS members (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            mosque_id  INTEGER NOT NULL REFERENCES mosques(id),
            name       TEXT NOT NULL,
            role       TEXT NOT NULL DEFAULT 'muazzin'
                       CHECK(role IN ('admin','imam','muazzin')),
            created_at TEXT DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS events (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            mosque_id  INTEGER NOT NULL REFERENCES mosques(id),
            title      TEXT NOT NULL,
            date       TEXT NOT NULL,
            created_at TEXT DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS prayer_times (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            mosque_id INTEGER NOT NULL REFERENCES mosques(id),
            slot      TEXT NOT NULL CHECK(slot IN ('fajr','dhuhr','asr','maghrib','isha')),
            time      TEXT NOT NULL,
            UNIQUE(mosque_id, slot)
        );
    ",
    )?;
    Ok(())
}
