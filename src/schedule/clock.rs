use log::warn;

/// Parse a clock string to minutes since midnight, leniently.
///
/// Digit runs are scanned left to right: the first run is the hour, the
/// second the minute, missing runs default to 0. A case-insensitive "pm"
/// anywhere bumps a non-12 hour by 12; "am" maps hour 12 to 0; with neither
/// marker the hour is taken as already 24-hour. Out-of-range values are kept
/// as-is rather than clamped.
///
/// This never fails: garbage degrades to 00:00. The defaulted path logs a
/// warning so bad schedule data stays discoverable.
pub fn parse_clock_minutes(s: &str) -> u32 {
    let runs = digit_runs(s);
    if runs.len() < 2 {
        warn!(
            "clock string '{}' has {} numeric part(s); missing parts default to 0",
            s,
            runs.len()
        );
    }

    let mut hour = runs.first().copied().unwrap_or(0);
    let minute = runs.get(1).copied().unwrap_or(0);

    let lower = s.to_ascii_lowercase();
    if lower.contains("pm") && hour != 12 {
        hour = hour.saturating_add(12);
    }
    if lower.contains("am") && hour == 12 {
        hour = 0;
    }

    hour.saturating_mul(60).saturating_add(minute)
}

fn digit_runs(s: &str) -> Vec<u32> {
    let mut runs = Vec::new();
    let mut current: Option<u32> = None;
    for ch in s.chars() {
        if let Some(d) = ch.to_digit(10) {
            let v = current.unwrap_or(0);
            current = Some(v.saturating_mul(10).saturating_add(d));
        } else if let Some(v) = current.take() {
            runs.push(v);
        }
    }
    if let Some(v) = current {
        runs.push(v);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_24_hour() {
        assert_eq!(parse_clock_minutes("05:00"), 300);
        assert_eq!(parse_clock_minutes("13:00"), 780);
        assert_eq!(parse_clock_minutes("00:00"), 0);
        assert_eq!(parse_clock_minutes("23:59"), 1439);
    }

    #[test]
    fn test_12_hour_pm() {
        assert_eq!(parse_clock_minutes("01:00 PM"), 780);
        assert_eq!(parse_clock_minutes("04:00 pm"), 960);
        assert_eq!(parse_clock_minutes("12:30 PM"), 750);
    }

    #[test]
    fn test_12_hour_am() {
        assert_eq!(parse_clock_minutes("12:05 AM"), 5);
        assert_eq!(parse_clock_minutes("05:00 am"), 300);
    }

    #[test]
    fn test_format_equivalence() {
        assert_eq!(parse_clock_minutes("13:00"), parse_clock_minutes("01:00 PM"));
    }

    #[test]
    fn test_garbage_degrades_to_midnight() {
        assert_eq!(parse_clock_minutes("garbage"), 0);
        assert_eq!(parse_clock_minutes(""), 0);
    }

    #[test]
    fn test_single_run_means_minute_zero() {
        assert_eq!(parse_clock_minutes("7"), 420);
        assert_eq!(parse_clock_minutes("7 pm"), 1140);
    }

    #[test]
    fn test_out_of_range_propagates() {
        // No clamping: 25:61 parses to 25*60+61.
        assert_eq!(parse_clock_minutes("25:61"), 1561);
    }

    #[test]
    fn test_marker_anywhere_in_string() {
        assert_eq!(parse_clock_minutes("pm 4:30"), 990);
    }
}
