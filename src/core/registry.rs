use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::HabitCategory;
use super::entry::{EntryPatch, HabitEntry};
use super::habit::{Habit, HabitDraft};
use super::series::{self, MONTH_WINDOW, SeriesPoint, WEEK_WINDOW};
use super::streak::FreezePolicy;

/// Caller-supplied fields for a new ledger entry.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub value: f64,
    pub note: Option<String>,
}

/// Owns the habit collection and serializes every mutation: an entry
/// write lands in the ledger and the owning habit's streak cache is
/// refreshed before the call returns, so reads never observe a stale
/// streak. One instance per consumer; there is no process-wide store.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HabitRegistry {
    habits: Vec<Habit>,
    #[serde(skip)]
    freeze_policy: FreezePolicy,
}

impl HabitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(freeze_policy: FreezePolicy) -> Self {
        Self {
            habits: Vec::new(),
            freeze_policy,
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn habit(&self, id: Uuid) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    fn habit_mut(&mut self, id: Uuid) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }

    pub fn add_habit(&mut self, draft: HabitDraft, now: NaiveDateTime) -> Uuid {
        let habit = Habit::new(draft, now);
        let id = habit.id;
        log::info!("added habit '{}' ({id})", habit.name);
        self.habits.push(habit);
        id
    }

    /// Removes the habit and its entire ledger; no-op when absent.
    pub fn remove_habit(&mut self, id: Uuid) {
        self.habits.retain(|h| h.id != id);
    }

    /// Logs an entry and refreshes the habit's streak. Returns the new
    /// entry's id, or `None` when the habit is unknown.
    pub fn add_entry(&mut self, habit_id: Uuid, draft: EntryDraft, today: NaiveDate) -> Option<Uuid> {
        let policy = self.freeze_policy;
        let habit = self.habit_mut(habit_id)?;
        let entry = HabitEntry::new(habit_id, draft.date, draft.value, draft.note);
        let entry_id = entry.id;
        log::debug!("log {} on {} for habit {habit_id}", entry.value, entry.date);
        habit.entries.add(entry);
        habit.recalculate_streak(today, policy);
        Some(entry_id)
    }

    /// No-op when either the habit or the entry is unknown.
    pub fn remove_entry(&mut self, habit_id: Uuid, entry_id: Uuid, today: NaiveDate) {
        let policy = self.freeze_policy;
        if let Some(habit) = self.habit_mut(habit_id) {
            habit.entries.remove(entry_id);
            habit.recalculate_streak(today, policy);
        }
    }

    /// No-op when either the habit or the entry is unknown.
    pub fn update_entry(
        &mut self,
        habit_id: Uuid,
        entry_id: Uuid,
        patch: EntryPatch,
        today: NaiveDate,
    ) {
        let policy = self.freeze_policy;
        if let Some(habit) = self.habit_mut(habit_id) {
            habit.entries.update(entry_id, patch);
            habit.recalculate_streak(today, policy);
        }
    }

    /// Spend a freeze on `today`. Returns `false` and mutates nothing when
    /// the habit is unknown or its budget is exhausted.
    pub fn use_freeze(&mut self, habit_id: Uuid, today: NaiveDate) -> bool {
        let policy = self.freeze_policy;
        let Some(habit) = self.habit_mut(habit_id) else {
            return false;
        };
        if habit.freezes_used >= habit.freezes_available {
            return false;
        }
        habit.freezes_used += 1;
        if !habit.frozen_days.contains(&today) {
            habit.frozen_days.push(today);
        }
        habit.recalculate_streak(today, policy);
        true
    }

    /// One pairing per habit: the habit and its entry for today, if any.
    pub fn today_status(&self, today: NaiveDate) -> Vec<(&Habit, Option<&HabitEntry>)> {
        self.habits
            .iter()
            .map(|h| (h, h.entries.entry_on(today)))
            .collect()
    }

    /// Last 7 days, gap-filled; empty when the habit is unknown.
    pub fn weekly_series(&self, habit_id: Uuid, today: NaiveDate) -> Vec<SeriesPoint> {
        self.habit(habit_id)
            .map(|h| series::series(&h.entries, WEEK_WINDOW, today))
            .unwrap_or_default()
    }

    /// Last 30 days, gap-filled; empty when the habit is unknown.
    pub fn monthly_series(&self, habit_id: Uuid, today: NaiveDate) -> Vec<SeriesPoint> {
        self.habit(habit_id)
            .map(|h| series::series(&h.entries, MONTH_WINDOW, today))
            .unwrap_or_default()
    }

    pub fn habits_by_category(&self, category: HabitCategory) -> Vec<&Habit> {
        self.habits.iter().filter(|h| h.category == category).collect()
    }
}
