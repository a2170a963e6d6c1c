use chrono::NaiveDate;

use super::date;
use super::entry::EntryLedger;

pub const WEEK_WINDOW: u32 = 7;
pub const MONTH_WINDOW: u32 = 30;

/// One day of a windowed series; unlogged days carry a zero value.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub day: NaiveDate,
    pub value: f64,
}

/// Trailing window of exactly `window_days` points ending at
/// `reference_day`, oldest first. Days without an entry are gap-filled
/// with zero, never omitted, so charts always get a contiguous,
/// fixed-length domain.
pub fn series(entries: &EntryLedger, window_days: u32, reference_day: NaiveDate) -> Vec<SeriesPoint> {
    (0..window_days)
        .rev()
        .map(|offset| {
            let day = date::add_days(reference_day, -(offset as i64));
            let value = entries.entry_on(day).map(|e| e.value).unwrap_or(0.0);
            SeriesPoint { day, value }
        })
        .collect()
}

/// Weekday-labelled rendering for the 7-day window.
pub fn weekday_labels(series: &[SeriesPoint]) -> Vec<(String, f64)> {
    series
        .iter()
        .map(|p| (date::weekday_label(p.day), p.value))
        .collect()
}

/// Day-of-month-labelled rendering for the 30-day window.
pub fn day_of_month_labels(series: &[SeriesPoint]) -> Vec<(String, f64)> {
    series
        .iter()
        .map(|p| (date::day_of_month_label(p.day), p.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::HabitEntry;
    use uuid::Uuid;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    fn ledger_with(offset: i64, value: f64) -> EntryLedger {
        let mut ledger = EntryLedger::new();
        ledger.add(HabitEntry::new(
            Uuid::new_v4(),
            date::add_days(reference(), -offset),
            value,
            None,
        ));
        ledger
    }

    #[test]
    fn window_is_exact_length_and_ends_at_reference() {
        for window in [WEEK_WINDOW, MONTH_WINDOW, 1, 90] {
            let points = series(&EntryLedger::new(), window, reference());
            assert_eq!(points.len(), window as usize);
            assert_eq!(points.last().unwrap().day, reference());
        }
    }

    #[test]
    fn gaps_fill_with_zero() {
        let points = series(&ledger_with(3, 10.0), WEEK_WINDOW, reference());
        for (i, point) in points.iter().enumerate() {
            let expected = if i == 3 { 10.0 } else { 0.0 };
            assert_eq!(point.value, expected, "index {i}");
        }
    }

    #[test]
    fn days_are_contiguous_oldest_first() {
        let points = series(&EntryLedger::new(), MONTH_WINDOW, reference());
        for pair in points.windows(2) {
            assert_eq!(date::add_days(pair[0].day, 1), pair[1].day);
        }
    }

    #[test]
    fn entries_outside_window_are_ignored() {
        let points = series(&ledger_with(7, 50.0), WEEK_WINDOW, reference());
        assert!(points.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn weekday_labels_follow_days() {
        // 2026-08-05 is a Wednesday, so a 7-day window starts on Thursday.
        let points = series(&EntryLedger::new(), WEEK_WINDOW, reference());
        let labels: Vec<String> = weekday_labels(&points).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"]);
    }

    #[test]
    fn day_of_month_labels_cross_month_boundary() {
        let points = series(&EntryLedger::new(), WEEK_WINDOW, reference());
        let labels: Vec<String> = day_of_month_labels(&points)
            .into_iter()
            .map(|(l, _)| l)
            .collect();
        assert_eq!(labels, ["30", "31", "1", "2", "3", "4", "5"]);
    }
}
