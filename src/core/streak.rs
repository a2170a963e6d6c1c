use chrono::NaiveDate;

use super::date;
use super::entry::EntryLedger;

/// How far back the streak scan walks before giving up. Bounds the cost of
/// every mutation; streaks longer than this are not representable.
pub const SCAN_WINDOW_DAYS: u32 = 365;

/// What a consumed freeze means to the streak scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FreezePolicy {
    /// Freezes spend budget but never affect the scan.
    #[default]
    BudgetOnly,
    /// A day a freeze was consumed on counts as qualifying.
    ProtectsStreak,
}

/// Count of consecutive qualifying days ending at or before `today`.
///
/// Scans backward one day at a time from `today`. A day qualifies when its
/// entry meets the target (or, under [`FreezePolicy::ProtectsStreak`], when
/// a freeze was spent on it). Today itself is exempt: an unmet today does
/// not break the chain, since the user may still log later. Any earlier
/// unmet day ends the scan.
pub fn current_streak(
    entries: &EntryLedger,
    target: f64,
    today: NaiveDate,
    policy: FreezePolicy,
    frozen_days: &[NaiveDate],
) -> u32 {
    let mut streak = 0;
    for offset in 0..SCAN_WINDOW_DAYS {
        let day = date::add_days(today, -(offset as i64));
        let qualifies = entries.entry_on(day).is_some_and(|e| e.meets(target))
            || (policy == FreezePolicy::ProtectsStreak && frozen_days.contains(&day));
        if qualifies {
            streak += 1;
        } else if offset == 0 {
            // Nothing logged yet today; the day isn't over.
            continue;
        } else {
            break;
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::HabitEntry;
    use uuid::Uuid;

    const TODAY: &str = "2026-08-05";

    fn today() -> NaiveDate {
        date::parse_day_key(TODAY).unwrap()
    }

    fn ledger(values_by_offset: &[(i64, f64)]) -> EntryLedger {
        let habit_id = Uuid::new_v4();
        let mut ledger = EntryLedger::new();
        for &(offset, value) in values_by_offset {
            ledger.add(HabitEntry::new(
                habit_id,
                date::add_days(today(), -offset),
                value,
                None,
            ));
        }
        ledger
    }

    fn streak(entries: &EntryLedger, target: f64) -> u32 {
        current_streak(entries, target, today(), FreezePolicy::BudgetOnly, &[])
    }

    #[test]
    fn empty_ledger_is_zero() {
        assert_eq!(streak(&EntryLedger::new(), 10.0), 0);
    }

    #[test]
    fn unmet_past_day_breaks_chain() {
        // target 30: today 45, yesterday 30, day-2 0, day-3 35
        let entries = ledger(&[(0, 45.0), (1, 30.0), (2, 0.0), (3, 35.0)]);
        assert_eq!(streak(&entries, 30.0), 2);
    }

    #[test]
    fn unmet_today_is_exempt() {
        // target 8: nothing today, 8 yesterday and the day before
        let entries = ledger(&[(1, 8.0), (2, 8.0)]);
        assert_eq!(streak(&entries, 8.0), 2);
    }

    #[test]
    fn target_comparison_is_inclusive() {
        let entries = ledger(&[(0, 30.0)]);
        assert_eq!(streak(&entries, 30.0), 1);
        assert_eq!(streak(&entries, 30.5), 0);
    }

    #[test]
    fn future_entries_are_ignored() {
        let entries = ledger(&[(-1, 100.0), (-7, 100.0)]);
        assert_eq!(streak(&entries, 10.0), 0);
    }

    #[test]
    fn gap_after_today_only_counts_today() {
        let entries = ledger(&[(0, 10.0), (2, 10.0)]);
        assert_eq!(streak(&entries, 10.0), 1);
    }

    #[test]
    fn scan_stops_at_window() {
        let days: Vec<(i64, f64)> = (0..SCAN_WINDOW_DAYS as i64 + 30)
            .map(|offset| (offset, 5.0))
            .collect();
        let entries = ledger(&days);
        assert_eq!(streak(&entries, 5.0), SCAN_WINDOW_DAYS);
    }

    #[test]
    fn budget_only_policy_ignores_frozen_days() {
        let entries = ledger(&[(0, 10.0), (2, 10.0)]);
        let frozen = [date::add_days(today(), -1)];
        let got = current_streak(&entries, 10.0, today(), FreezePolicy::BudgetOnly, &frozen);
        assert_eq!(got, 1);
    }

    #[test]
    fn protecting_policy_bridges_frozen_day() {
        let entries = ledger(&[(0, 10.0), (2, 10.0)]);
        let frozen = [date::add_days(today(), -1)];
        let got = current_streak(
            &entries,
            10.0,
            today(),
            FreezePolicy::ProtectsStreak,
            &frozen,
        );
        assert_eq!(got, 3);
    }
}
