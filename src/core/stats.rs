use chrono::NaiveDate;
use uuid::Uuid;

use super::category::HabitCategory;
use super::date;
use super::habit::Habit;
use super::registry::HabitRegistry;
use super::series::{self, MONTH_WINDOW, SeriesPoint};

/// Cross-habit dashboard numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub habits_tracked: usize,
    /// Mean of current streaks, rounded to whole days.
    pub avg_streak: u32,
    /// Best longest-streak across all habits.
    pub best_streak: u32,
    /// Percent of habits with a qualifying entry today, rounded.
    pub today_completion_pct: u32,
}

pub fn overview(registry: &HabitRegistry, today: NaiveDate) -> Overview {
    let habits = registry.habits();
    let count = habits.len();
    let avg_streak = if count == 0 {
        0
    } else {
        let total: u32 = habits.iter().map(|h| h.streak).sum();
        (f64::from(total) / count as f64).round() as u32
    };
    let best_streak = habits.iter().map(|h| h.longest_streak).max().unwrap_or(0);
    let done_today = habits.iter().filter(|h| h.met_on(today)).count();
    let today_completion_pct = if count == 0 {
        0
    } else {
        (done_today as f64 / count as f64 * 100.0).round() as u32
    };
    Overview {
        habits_tracked: count,
        avg_streak,
        best_streak,
        today_completion_pct,
    }
}

/// One category's share of the ledger. Only categories with at least one
/// habit are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStats {
    pub category: HabitCategory,
    pub habit_count: usize,
    pub entry_count: usize,
    /// Mean of per-habit all-time completion rates, rounded.
    pub avg_completion_pct: u32,
}

/// Share of a habit's logged days that met the target.
fn completion_rate(habit: &Habit) -> f64 {
    if habit.entries.is_empty() {
        return 0.0;
    }
    let met = habit.entries.iter().filter(|e| e.meets(habit.target)).count();
    met as f64 / habit.entries.len() as f64 * 100.0
}

pub fn category_breakdown(registry: &HabitRegistry) -> Vec<CategoryStats> {
    HabitCategory::ALL
        .iter()
        .filter_map(|&category| {
            let habits = registry.habits_by_category(category);
            if habits.is_empty() {
                return None;
            }
            let entry_count = habits.iter().map(|h| h.entries.len()).sum();
            let avg = habits.iter().map(|h| completion_rate(h)).sum::<f64>() / habits.len() as f64;
            Some(CategoryStats {
                category,
                habit_count: habits.len(),
                entry_count,
                avg_completion_pct: avg.round() as u32,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Compares the series' first and last seven days of values. Windows of
/// seven days or fewer have nothing to compare against.
pub fn trend(series: &[SeriesPoint]) -> Trend {
    if series.len() <= 7 {
        return Trend::Stable;
    }
    let week_mean = |points: &[SeriesPoint]| -> f64 {
        points.iter().map(|p| p.value).sum::<f64>() / 7.0
    };
    let first = week_mean(&series[..7]);
    let last = week_mean(&series[series.len() - 7..]);
    if last > first {
        Trend::Up
    } else if last < first {
        Trend::Down
    } else {
        Trend::Stable
    }
}

/// Trailing-window performance for one habit.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitReport {
    pub habit_id: Uuid,
    pub name: String,
    pub window_days: u32,
    /// Sum of values logged inside the window.
    pub total_value: f64,
    /// Mean over logged days only (zero when nothing was logged).
    pub avg_value: f64,
    /// Days inside the window whose entry met the target.
    pub completed_days: usize,
    /// `completed_days` against the window length, rounded.
    pub completion_pct: u32,
    /// Direction of the trailing 30-day series.
    pub trend: Trend,
}

pub fn habit_report(habit: &Habit, window_days: u32, today: NaiveDate) -> HabitReport {
    let start = date::add_days(today, -(i64::from(window_days) - 1));
    let in_window: Vec<_> = habit
        .entries
        .entries_on_or_after(start)
        .filter(|e| e.date <= today)
        .collect();

    let total_value: f64 = in_window.iter().map(|e| e.value).sum();
    let avg_value = if in_window.is_empty() {
        0.0
    } else {
        total_value / in_window.len() as f64
    };
    let completed_days = in_window.iter().filter(|e| e.meets(habit.target)).count();
    let completion_pct = if window_days == 0 {
        0
    } else {
        (completed_days as f64 / f64::from(window_days) * 100.0).round() as u32
    };

    HabitReport {
        habit_id: habit.id,
        name: habit.name.clone(),
        window_days,
        total_value,
        avg_value,
        completed_days,
        completion_pct,
        trend: trend(&series::series(&habit.entries, MONTH_WINDOW, today)),
    }
}

/// Deterministic observations over current streaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insight {
    /// The strongest active streak.
    BestStreak { name: String, streak: u32 },
    /// Habits sitting at streak zero.
    NeedsAttention { count: usize },
}

pub fn insights(registry: &HabitRegistry) -> Vec<Insight> {
    let mut out = Vec::new();
    if let Some(best) = registry.habits().iter().max_by_key(|h| h.streak) {
        if best.streak > 0 {
            out.push(Insight::BestStreak {
                name: best.name.clone(),
                streak: best.streak,
            });
        }
    }
    let stalled = registry.habits().iter().filter(|h| h.streak == 0).count();
    if stalled > 0 {
        out.push(Insight::NeedsAttention { count: stalled });
    }
    out
}
