use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Canonical calendar-day key for the local day an instant falls in.
///
/// Keys are date-only; all arithmetic on them counts whole calendar days,
/// so a DST-shortened or -lengthened day can never skew an offset.
pub fn day_key(instant: NaiveDateTime) -> NaiveDate {
    instant.date()
}

/// The key `n` days after `key` (negative `n` for earlier days).
pub fn add_days(key: NaiveDate, n: i64) -> NaiveDate {
    key + Duration::days(n)
}

/// Today's day key from the local clock.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` day key.
pub fn parse_day_key(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn format_day_key(key: NaiveDate) -> String {
    key.format("%Y-%m-%d").to_string()
}

/// Short weekday label ("Mon") for 7-day series rows.
pub fn weekday_label(key: NaiveDate) -> String {
    key.format("%a").to_string()
}

/// Day-of-month label ("17") for 30-day series rows.
pub fn day_of_month_label(key: NaiveDate) -> String {
    key.day().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_key_truncates_time() {
        let late = NaiveDate::from_ymd_opt(2026, 3, 8)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(day_key(late), NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());
    }

    #[test]
    fn add_days_crosses_month_and_year() {
        let d = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
        assert_eq!(add_days(d, 3), NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
        assert_eq!(add_days(d, -30), NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());
    }

    #[test]
    fn add_days_roundtrips() {
        let d = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        assert_eq!(add_days(add_days(d, 40), -40), d);
    }

    #[test]
    fn parse_and_format_are_inverse() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(parse_day_key("2026-08-05"), Some(d));
        assert_eq!(format_day_key(d), "2026-08-05");
        assert_eq!(parse_day_key("not a date"), None);
    }

    #[test]
    fn labels() {
        // 2026-08-05 is a Wednesday
        let d = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(weekday_label(d), "Wed");
        assert_eq!(day_of_month_label(d), "5");
    }
}
