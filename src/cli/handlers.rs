use anyhow::{anyhow, Result};
use chrono::Local;
use std::str::FromStr;

use crate::config::AppConfig;
use crate::db::repository::MosqueRepository;
use crate::models::{MemberRole, Mosque, PrayerName};
use crate::schedule::{minutes_until, parse_clock_minutes, resolve_next};
use crate::summary::mosque_summary;
use crate::utils::format::format_duration_minutes;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

// ─── Mosque resolution ───────────────────────────────────────────────────────

fn resolve_mosque(
    repo: &dyn MosqueRepository,
    config: &AppConfig,
    arg: Option<&str>,
) -> Result<Mosque> {
    let key = arg
        .map(str::to_string)
        .or_else(|| config.default_mosque.clone())
        .ok_or_else(|| anyhow!("No mosque given and no default configured. Use set-default."))?;
    Ok(repo.find_mosque(&key)?)
}

// ─── CRUD commands ───────────────────────────────────────────────────────────

pub fn handle_add_mosque(
    repo: &mut dyn MosqueRepository,
    name: &str,
    address: Option<&str>,
) -> Result<()> {
    let mosque = repo.add_mosque(name, address)?;
    println_colored!(GREEN, "  ✓ Registered mosque '{}' (id {})", mosque.name, mosque.id);
    Ok(())
}

pub fn handle_add_member(
    repo: &mut dyn MosqueRepository,
    config: &AppConfig,
    mosque_arg: &str,
    name: &str,
    role_str: &str,
) -> Result<()> {
    let role = MemberRole::from_str(role_str)
        .map_err(|_| anyhow!("Unknown role '{}'. Use: admin, imam, muazzin", role_str))?;
    let mosque = resolve_mosque(repo, config, Some(mosque_arg))?;
    let member = repo.add_member(mosque.id, name, role)?;
    println_colored!(
        GREEN,
        "  ✓ Added {} ({}) to {}",
        member.name,
        member.role,
        mosque.name
    );
    Ok(())
}

pub fn handle_add_event(
    repo: &mut dyn MosqueRepository,
    config: &AppConfig,
    mosque_arg: &str,
    title: &str,
    date: &str,
) -> Result<()> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| anyhow!("Bad date '{}'. Use YYYY-MM-DD", date))?;
    let mosque = resolve_mosque(repo, config, Some(mosque_arg))?;
    repo.add_event(mosque.id, title, date)?;
    println_colored!(GREEN, "  ✓ Added event '{}' on {} to {}", title, date, mosque.name);
    Ok(())
}

pub fn handle_set_time(
    repo: &mut dyn MosqueRepository,
    config: &AppConfig,
    mosque_arg: &str,
    prayer_str: &str,
    time: &str,
) -> Result<()> {
    let prayer = PrayerName::from_str(prayer_str).map_err(|_| {
        anyhow!(
            "Unknown prayer '{}'. Use: fajr, dhuhr, asr, maghrib, isha",
            prayer_str
        )
    })?;
    let mosque = resolve_mosque(repo, config, Some(mosque_arg))?;
    repo.upsert_prayer_time(mosque.id, prayer, time)?;
    println_colored!(GREEN, "  ✓ {} at {} — {}", prayer, time, mosque.name);
    Ok(())
}

// ─── Schedule views ──────────────────────────────────────────────────────────

pub fn handle_times(
    repo: &dyn MosqueRepository,
    config: &AppConfig,
    mosque_arg: Option<&str>,
) -> Result<()> {
    let mosque = resolve_mosque(repo, config, mosque_arg)?;
    let now = Local::now().time();
    let entries = repo.list_prayer_times(mosque.id)?;

    println!();
    println_colored!(GOLD, "  Prayer Times — {}", mosque.name);
    println!();

    if entries.is_empty() {
        println_colored!(DIM, "  No prayer times set");
        println!();
        return Ok(());
    }

    let next = resolve_next(&entries, now).cloned();
    let mut display: Vec<_> = entries
        .iter()
        .map(|e| (parse_clock_minutes(&e.time), e))
        .collect();
    display.sort_by_key(|(minutes, _)| *minutes);

    let ref_minutes = {
        use chrono::Timelike;
        now.hour() * 60 + now.minute()
    };
    for (minutes, entry) in &display {
        if *minutes > ref_minutes {
            println_colored!(BOLD, "  {:<10}  {}", entry.name.display_name(), entry.time);
        } else {
            println_colored!(DIM, "  {:<10}  {}", entry.name.display_name(), entry.time);
        }
    }

    if let Some(entry) = next {
        println!();
        println_colored!(
            AMBER,
            "  Next: {} in {}",
            entry.name.display_name(),
            format_duration_minutes(minutes_until(&entry, now))
        );
    }
    println!();
    Ok(())
}

pub fn handle_next(
    repo: &dyn MosqueRepository,
    config: &AppConfig,
    mosque_arg: Option<&str>,
) -> Result<()> {
    let mosque = resolve_mosque(repo, config, mosque_arg)?;
    let now = Local::now().time();
    let entries = repo.list_prayer_times(mosque.id)?;

    match resolve_next(&entries, now) {
        None => println_colored!(DIM, "  No prayer times set"),
        Some(entry) => println_colored!(
            AMBER,
            "  Next: {} at {} (in {})",
            entry.name.display_name(),
            entry.time,
            format_duration_minutes(minutes_until(entry, now))
        ),
    }
    Ok(())
}

// ─── Summary ─────────────────────────────────────────────────────────────────

pub fn handle_summary(
    repo: &dyn MosqueRepository,
    config: &AppConfig,
    mosque_arg: Option<&str>,
    json: bool,
) -> Result<()> {
    let mosque = resolve_mosque(repo, config, mosque_arg)?;
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let now = Local::now().time();

    let summary = mosque_summary(repo, mosque.id, &today, now)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println_colored!(GOLD, "  {} — Dashboard", mosque.name);
    println!();
    println_colored!(BOLD, "  Members:          {}", summary.member_count);
    println_colored!(BOLD, "  Upcoming events:  {}", summary.upcoming_event_count);
    match &summary.next_prayer {
        Some(entry) => println_colored!(
            AMBER,
            "  Next prayer:      {} at {}",
            entry.name.display_name(),
            entry.time
        ),
        None => println_colored!(DIM, "  Next prayer:      no prayer times set"),
    }
    println!();
    Ok(())
}

// ─── Tenants ─────────────────────────────────────────────────────────────────

pub fn handle_mosques(repo: &dyn MosqueRepository) -> Result<()> {
    let mosques = repo.list_mosques()?;
    println!();
    if mosques.is_empty() {
        println_colored!(DIM, "  No mosques registered");
    } else {
        for mosque in &mosques {
            match &mosque.address {
                Some(addr) => println!("  {:>3}  {} — {}", mosque.id, mosque.name, addr),
                None => println!("  {:>3}  {}", mosque.id, mosque.name),
            }
        }
    }
    println!();
    Ok(())
}

pub fn handle_set_default(
    repo: &dyn MosqueRepository,
    config: &mut AppConfig,
    mosque_arg: &str,
) -> Result<()> {
    let mosque = repo.find_mosque(mosque_arg)?;
    config.default_mosque = Some(mosque.id.to_string());
    config.save()?;
    println_colored!(GREEN, "  ✓ Default mosque set to {}", mosque.name);
    Ok(())
}
