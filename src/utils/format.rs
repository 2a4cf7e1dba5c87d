/// Format a minute count to "Xh Ym" or "Ym" string
pub fn format_duration_minutes(minutes: u32) -> String {
    if minutes == 0 {
        return "now".to_string();
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Format minutes-since-midnight as "HH:MM", wrapping past a day boundary.
pub fn format_clock_minutes(minutes: u32) -> String {
    let wrapped = minutes % (24 * 60);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        assert_eq!(format_duration_minutes(0), "now");
        assert_eq!(format_duration_minutes(45), "45m");
        assert_eq!(format_duration_minutes(150), "2h 30m");
    }

    #[test]
    fn test_clock() {
        assert_eq!(format_clock_minutes(0), "00:00");
        assert_eq!(format_clock_minutes(780), "13:00");
        assert_eq!(format_clock_minutes(25 * 60 + 61), "02:01");
    }
}
