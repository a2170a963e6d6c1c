use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::HabitCategory;
use super::entry::EntryLedger;
use super::streak::{self, FreezePolicy};

/// Freezes granted to every new habit.
pub const DEFAULT_FREEZES: u32 = 3;

/// A tracked behavior with a daily numeric target.
///
/// `streak` and `longest_streak` are caches over the ledger, refreshed by
/// [`Habit::recalculate_streak`] inside every mutation; they are never
/// authored independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    pub category: HabitCategory,
    pub icon: String,
    pub unit: String,
    /// Met means `entry.value >= target`.
    pub target: f64,
    pub color: String,
    pub streak: u32,
    pub longest_streak: u32,
    pub freezes_used: u32,
    pub freezes_available: u32,
    /// Days a freeze was spent on; only the protecting policy reads these.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frozen_days: Vec<NaiveDate>,
    pub entries: EntryLedger,
    pub created_at: NaiveDateTime,
}

/// Caller-supplied fields for a new habit; blanks fall back to the
/// category's defaults.
#[derive(Debug, Clone)]
pub struct HabitDraft {
    pub name: String,
    pub category: HabitCategory,
    pub target: f64,
    pub unit: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl Habit {
    pub fn new(draft: HabitDraft, created_at: NaiveDateTime) -> Self {
        let category = draft.category;
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            category,
            icon: draft.icon.unwrap_or_else(|| category.icon().to_string()),
            unit: draft
                .unit
                .unwrap_or_else(|| category.default_unit().to_string()),
            target: draft.target,
            color: draft.color.unwrap_or_else(|| category.color().to_string()),
            streak: 0,
            longest_streak: 0,
            freezes_used: 0,
            freezes_available: DEFAULT_FREEZES,
            frozen_days: Vec::new(),
            entries: EntryLedger::new(),
            created_at,
        }
    }

    /// Recompute the cached streak from the ledger and ratchet the best.
    pub fn recalculate_streak(&mut self, today: NaiveDate, policy: FreezePolicy) {
        self.streak = streak::current_streak(
            &self.entries,
            self.target,
            today,
            policy,
            &self.frozen_days,
        );
        self.longest_streak = self.longest_streak.max(self.streak);
    }

    /// Whether the day's entry meets the target.
    pub fn met_on(&self, day: NaiveDate) -> bool {
        self.entries.entry_on(day).is_some_and(|e| e.meets(self.target))
    }

    /// Due when today has no qualifying entry yet.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        !self.met_on(today)
    }

    pub fn freezes_left(&self) -> u32 {
        self.freezes_available.saturating_sub(self.freezes_used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::date;
    use crate::core::entry::HabitEntry;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    fn draft() -> HabitDraft {
        HabitDraft {
            name: "Meditation".into(),
            category: HabitCategory::Meditation,
            target: 15.0,
            unit: None,
            icon: None,
            color: None,
        }
    }

    fn habit() -> Habit {
        Habit::new(draft(), today().and_hms_opt(8, 0, 0).unwrap())
    }

    #[test]
    fn new_habit_starts_clean_with_category_defaults() {
        let h = habit();
        assert_eq!(h.unit, "minutes");
        assert_eq!(h.icon, "Brain");
        assert_eq!(h.streak, 0);
        assert_eq!(h.longest_streak, 0);
        assert_eq!(h.freezes_used, 0);
        assert_eq!(h.freezes_left(), DEFAULT_FREEZES);
        assert!(h.entries.is_empty());
    }

    #[test]
    fn draft_unit_overrides_category_default() {
        let mut d = draft();
        d.unit = Some("breaths".into());
        let h = Habit::new(d, today().and_hms_opt(8, 0, 0).unwrap());
        assert_eq!(h.unit, "breaths");
    }

    #[test]
    fn recalculate_ratchets_longest() {
        let mut h = habit();
        for offset in 0..3 {
            h.entries.add(HabitEntry::new(
                h.id,
                date::add_days(today(), -offset),
                20.0,
                None,
            ));
            h.recalculate_streak(today(), FreezePolicy::BudgetOnly);
        }
        assert_eq!(h.streak, 3);
        assert_eq!(h.longest_streak, 3);

        // Losing the middle day shrinks the streak but not the best.
        let middle = h.entries.entry_on(date::add_days(today(), -1)).unwrap().id;
        h.entries.remove(middle);
        h.recalculate_streak(today(), FreezePolicy::BudgetOnly);
        assert_eq!(h.streak, 1);
        assert_eq!(h.longest_streak, 3);
    }

    #[test]
    fn due_until_target_met() {
        let mut h = habit();
        assert!(h.is_due(today()));
        h.entries.add(HabitEntry::new(h.id, today(), 10.0, None));
        assert!(h.is_due(today()));
        let id = h.entries.entry_on(today()).unwrap().id;
        h.entries.update(
            id,
            crate::core::entry::EntryPatch {
                value: Some(15.0),
                ..Default::default()
            },
        );
        assert!(!h.is_due(today()));
    }
}
