use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged value for one habit on one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitEntry {
    pub id: Uuid,
    pub habit_id: Uuid,
    pub date: NaiveDate,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Audit timestamp only; streak math never reads it.
    pub created_at: NaiveDateTime,
}

impl HabitEntry {
    pub fn new(habit_id: Uuid, date: NaiveDate, value: f64, note: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            habit_id,
            date,
            value,
            note,
            created_at: chrono::Local::now().naive_local(),
        }
    }

    pub fn meets(&self, target: f64) -> bool {
        self.value >= target
    }
}

/// Fields `update` may change; `None` leaves the field alone.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub date: Option<NaiveDate>,
    pub value: Option<f64>,
    pub note: Option<String>,
}

/// The dated entries owned by one habit.
///
/// Logically keyed by date: `add` replaces any existing entry on the same
/// day, and `update` evicts any other entry its date change collides with,
/// so `entry_on` is always unambiguous.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryLedger(Vec<HabitEntry>);

impl EntryLedger {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn add(&mut self, entry: HabitEntry) {
        self.0.retain(|e| e.date != entry.date);
        self.0.push(entry);
    }

    /// No-op when the id is absent.
    pub fn remove(&mut self, entry_id: Uuid) {
        self.0.retain(|e| e.id != entry_id);
    }

    /// Merge `patch` into the entry with `entry_id`; no-op when absent.
    pub fn update(&mut self, entry_id: Uuid, patch: EntryPatch) {
        let Some(entry) = self.0.iter_mut().find(|e| e.id == entry_id) else {
            return;
        };
        if let Some(date) = patch.date {
            entry.date = date;
        }
        if let Some(value) = patch.value {
            entry.value = value;
        }
        if let Some(note) = patch.note {
            entry.note = Some(note);
        }
        if let Some(date) = patch.date {
            self.0.retain(|e| e.id == entry_id || e.date != date);
        }
    }

    pub fn entry_on(&self, day: NaiveDate) -> Option<&HabitEntry> {
        self.0.iter().find(|e| e.date == day)
    }

    pub fn entries_on_or_after(&self, day: NaiveDate) -> impl Iterator<Item = &HabitEntry> {
        self.0.iter().filter(move |e| e.date >= day)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HabitEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
