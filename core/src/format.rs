use chrono::{DateTime, Utc};

/// Total seconds of an ISO-8601 duration such as `PT1H2M10S` or `P1DT3M`.
/// Weeks and days are accepted; years and months are not, since video
/// lengths never use them.
pub fn parse_iso8601_duration(duration: &str) -> Option<u64> {
    let rest = duration.strip_prefix('P')?;
    let mut total = 0u64;
    let mut number = String::new();
    let mut in_time = false;

    for ch in rest.chars() {
        match ch {
            '0'..='9' => number.push(ch),
            'T' if !in_time && number.is_empty() => in_time = true,
            unit => {
                let value: u64 = number.parse().ok()?;
                number.clear();
                let scale = match (in_time, unit) {
                    (false, 'W') => 604_800,
                    (false, 'D') => 86_400,
                    (true, 'H') => 3_600,
                    (true, 'M') => 60,
                    (true, 'S') => 1,
                    _ => return None,
                };
                total = total.checked_add(value.checked_mul(scale)?)?;
            }
        }
    }

    number.is_empty().then_some(total)
}

/// `H:MM:SS`, or `M:SS` when there are no whole hours.
pub fn format_seconds(total: u64) -> String {
    let hours = total / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Display form of a video's ISO-8601 duration. `N/A` when the video has
/// none, `0:00` when it cannot be read.
pub fn format_duration(duration: Option<&str>) -> String {
    match duration {
        None => "N/A".to_string(),
        Some(iso) => format_seconds(parse_iso8601_duration(iso).unwrap_or(0)),
    }
}

pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn durations() {
        assert_eq!(format_duration(Some("PT1H2M10S")), "1:02:10");
        assert_eq!(format_duration(Some("PT5M")), "5:00");
        assert_eq!(format_duration(Some("PT45S")), "0:45");
        assert_eq!(format_duration(Some("PT10H")), "10:00:00");
        assert_eq!(format_duration(Some("PT1H5S")), "1:00:05");
    }

    #[test]
    fn days_fold_into_hours() {
        assert_eq!(format_duration(Some("P1DT2H3M4S")), "26:03:04");
        assert_eq!(format_duration(Some("P0D")), "0:00");
    }

    #[test]
    fn absent_and_garbage() {
        assert_eq!(format_duration(None), "N/A");
        assert_eq!(format_duration(Some("")), "0:00");
        assert_eq!(format_duration(Some("PT")), "0:00");
        assert_eq!(format_duration(Some("1:02")), "0:00");
        assert_eq!(format_duration(Some("PT5X")), "0:00");
        assert_eq!(parse_iso8601_duration("PT12"), None);
        assert_eq!(parse_iso8601_duration("PT4M13S"), Some(253));
    }

    #[test]
    fn overflowing_duration_is_unreadable() {
        assert_eq!(parse_iso8601_duration("P99999999999999W"), None);
        assert_eq!(parse_iso8601_duration("PT18446744073709551615H"), None);
        assert_eq!(format_duration(Some("P99999999999999W")), "0:00");
    }

    #[test]
    fn date_only() {
        let ts = Utc.with_ymd_and_hms(2023, 9, 7, 23, 59, 59).unwrap();
        assert_eq!(format_date(&ts), "2023-09-07");
    }
}
