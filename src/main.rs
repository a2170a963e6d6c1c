use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use clap::Parser;
use uuid::Uuid;

mod cli;

use cli::{Cli, Commands};
use habitflow::config::HabitflowConfig;
use habitflow::core::category::HabitCategory;
use habitflow::core::date;
use habitflow::core::entry::EntryPatch;
use habitflow::core::habit::{Habit, HabitDraft};
use habitflow::core::registry::{EntryDraft, HabitRegistry};
use habitflow::core::series;
use habitflow::core::stats::{self, Insight, Trend};
use habitflow::store;

fn main() -> Result<()> {
    let args = Cli::parse();

    // Stderr logger: habitflow at info (debug with --verbose), everything
    // else at warn.
    {
        struct StderrLogger;

        impl log::Log for StderrLogger {
            fn enabled(&self, metadata: &log::Metadata) -> bool {
                if metadata.target().starts_with("habitflow") {
                    let max = if habitflow::debug_logging() {
                        log::LevelFilter::Debug
                    } else {
                        log::LevelFilter::Info
                    };
                    metadata.level() <= max
                } else {
                    metadata.level() <= log::LevelFilter::Warn
                }
            }
            fn log(&self, record: &log::Record) {
                if self.enabled(record.metadata()) {
                    eprintln!("[{}] {}", record.level(), record.args());
                }
            }
            fn flush(&self) {}
        }

        habitflow::set_debug_logging(args.verbose);
        static LOGGER: StderrLogger = StderrLogger;
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Debug);
    }

    let config = HabitflowConfig::default();
    config
        .ensure_files()
        .context("failed to create data directory")?;
    let path = config.habits_path();
    let mut registry = store::load(&path).context("failed to load habit store")?;

    let now = chrono::Local::now().naive_local();
    let today = date::day_key(now);

    match args.command {
        Commands::Add {
            name,
            category,
            target,
            unit,
        } => {
            let category = HabitCategory::from_keyword(&category)
                .ok_or_else(|| anyhow!("unknown category '{category}'"))?;
            if target <= 0.0 {
                bail!("target must be positive");
            }
            let id = registry.add_habit(
                HabitDraft {
                    name,
                    category,
                    target,
                    unit,
                    icon: None,
                    color: None,
                },
                now,
            );
            store::save(&path, &registry)?;
            println!("{id}");
        }
        Commands::Rm { habit } => {
            let id = resolve_habit(&registry, &habit)?;
            let name = registry.habit(id).map(|h| h.name.clone()).unwrap_or_default();
            registry.remove_habit(id);
            store::save(&path, &registry)?;
            println!("removed {name}");
        }
        Commands::Log {
            habit,
            value,
            date: day,
            note,
        } => {
            if value < 0.0 {
                bail!("value must be non-negative");
            }
            let id = resolve_habit(&registry, &habit)?;
            let day = match day {
                Some(s) => parse_date(&s)?,
                None => today,
            };
            registry.add_entry(
                id,
                EntryDraft {
                    date: day,
                    value,
                    note,
                },
                today,
            );
            store::save(&path, &registry)?;
            let habit = registry.habit(id).ok_or_else(|| anyhow!("habit not found: {id}"))?;
            println!(
                "logged {value} {} for {} on {} (streak {})",
                habit.unit,
                habit.name,
                date::format_day_key(day),
                habit.streak
            );
        }
        Commands::Edit {
            habit,
            date: day,
            value,
            note,
        } => {
            if let Some(value) = value {
                if value < 0.0 {
                    bail!("value must be non-negative");
                }
            }
            let id = resolve_habit(&registry, &habit)?;
            let day = parse_date(&day)?;
            let entry_id = entry_on_day(&registry, id, day)?;
            registry.update_entry(
                id,
                entry_id,
                EntryPatch {
                    date: None,
                    value,
                    note,
                },
                today,
            );
            store::save(&path, &registry)?;
            println!("updated entry on {}", date::format_day_key(day));
        }
        Commands::Unlog { habit, date: day } => {
            let id = resolve_habit(&registry, &habit)?;
            let day = parse_date(&day)?;
            let entry_id = entry_on_day(&registry, id, day)?;
            registry.remove_entry(id, entry_id, today);
            store::save(&path, &registry)?;
            println!("removed entry on {}", date::format_day_key(day));
        }
        Commands::List { category } => {
            let habits: Vec<&Habit> = match category {
                Some(keyword) => {
                    let category = HabitCategory::from_keyword(&keyword)
                        .ok_or_else(|| anyhow!("unknown category '{keyword}'"))?;
                    registry.habits_by_category(category)
                }
                None => registry.habits().iter().collect(),
            };
            for habit in habits {
                println!(
                    "{}  {} [{}] target {} {}, streak {} (best {}), freezes {}/{}",
                    habit.id,
                    habit.name,
                    habit.category.as_keyword(),
                    habit.target,
                    habit.unit,
                    habit.streak,
                    habit.longest_streak,
                    habit.freezes_left(),
                    habit.freezes_available
                );
            }
        }
        Commands::Today => {
            for (habit, entry) in registry.today_status(today) {
                match entry {
                    Some(entry) => println!(
                        "{} {}: {} {} (target {})",
                        if habit.met_on(today) { "\u{25CF}" } else { "\u{25CB}" },
                        habit.name,
                        entry.value,
                        habit.unit,
                        habit.target
                    ),
                    None => println!(
                        "\u{25CB} {}: not logged (target {} {})",
                        habit.name, habit.target, habit.unit
                    ),
                }
            }
        }
        Commands::Streak { habit } => {
            let id = resolve_habit(&registry, &habit)?;
            let habit = registry.habit(id).ok_or_else(|| anyhow!("habit not found: {id}"))?;
            println!(
                "{}: {} day streak (best {})",
                habit.name, habit.streak, habit.longest_streak
            );
            // 14-day completion grid, oldest first
            let mut grid = String::new();
            for days_ago in (0..14).rev() {
                let day = date::add_days(today, -days_ago);
                grid.push(if habit.met_on(day) { '\u{25CF}' } else { '\u{25CB}' });
            }
            println!("{grid} (last 14 days)");
        }
        Commands::Weekly { habit } => {
            let id = resolve_habit(&registry, &habit)?;
            let points = registry.weekly_series(id, today);
            for (label, value) in series::weekday_labels(&points) {
                println!("{label:<4}{value}");
            }
        }
        Commands::Monthly { habit } => {
            let id = resolve_habit(&registry, &habit)?;
            let points = registry.monthly_series(id, today);
            for (label, value) in series::day_of_month_labels(&points) {
                println!("{label:<4}{value}");
            }
        }
        Commands::Freeze { habit } => {
            let id = resolve_habit(&registry, &habit)?;
            if !registry.use_freeze(id, today) {
                let name = registry.habit(id).map(|h| h.name.clone()).unwrap_or_default();
                bail!("no freezes left for {name}");
            }
            store::save(&path, &registry)?;
            let habit = registry.habit(id).ok_or_else(|| anyhow!("habit not found: {id}"))?;
            println!("freeze used for {} ({} left)", habit.name, habit.freezes_left());
        }
        Commands::Stats => {
            let overview = stats::overview(&registry, today);
            println!("habits tracked: {}", overview.habits_tracked);
            println!("average streak: {} days", overview.avg_streak);
            println!("best streak: {} days", overview.best_streak);
            println!("today: {}% complete", overview.today_completion_pct);
            let breakdown = stats::category_breakdown(&registry);
            if !breakdown.is_empty() {
                println!();
            }
            for cat in breakdown {
                println!(
                    "{}: {} habits, {} entries, {}% completion",
                    cat.category.as_keyword(),
                    cat.habit_count,
                    cat.entry_count,
                    cat.avg_completion_pct
                );
            }
        }
        Commands::Report { days } => {
            if days == 0 {
                bail!("window must be at least one day");
            }
            println!("last {days} days");
            for habit in registry.habits() {
                let report = stats::habit_report(habit, days, today);
                println!(
                    "{}: total {} {}, avg {:.1}, {}/{} days met ({}%), {}",
                    report.name,
                    report.total_value,
                    habit.unit,
                    report.avg_value,
                    report.completed_days,
                    report.window_days,
                    report.completion_pct,
                    trend_label(report.trend)
                );
            }
            let insights = stats::insights(&registry);
            if !insights.is_empty() {
                println!();
                println!("insights:");
            }
            for insight in insights {
                match insight {
                    Insight::BestStreak { name, streak } => {
                        println!("- {name} is on a {streak} day streak");
                    }
                    Insight::NeedsAttention { count } => {
                        let plural = if count == 1 { "habit needs" } else { "habits need" };
                        println!("- {count} {plural} attention");
                    }
                }
            }
        }
    }

    Ok(())
}

fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "\u{2191} improving",
        Trend::Down => "\u{2193} declining",
        Trend::Stable => "\u{2192} stable",
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    date::parse_day_key(s).ok_or_else(|| anyhow!("invalid date '{s}', expected YYYY-MM-DD"))
}

/// Resolve a habit selector: a full id, or a unique case-insensitive name
/// prefix.
fn resolve_habit(registry: &HabitRegistry, selector: &str) -> Result<Uuid> {
    if let Ok(id) = Uuid::parse_str(selector) {
        if registry.habit(id).is_some() {
            return Ok(id);
        }
        bail!("habit not found: {selector}");
    }
    let needle = selector.to_lowercase();
    let matches: Vec<&Habit> = registry
        .habits()
        .iter()
        .filter(|h| h.name.to_lowercase().starts_with(&needle))
        .collect();
    match matches.len() {
        0 => bail!("habit not found: {selector}"),
        1 => Ok(matches[0].id),
        _ => {
            let names: Vec<&str> = matches.iter().map(|h| h.name.as_str()).collect();
            bail!("ambiguous habit '{selector}': {}", names.join(", "));
        }
    }
}

fn entry_on_day(registry: &HabitRegistry, habit_id: Uuid, day: NaiveDate) -> Result<Uuid> {
    registry
        .habit(habit_id)
        .and_then(|h| h.entries.entry_on(day))
        .map(|e| e.id)
        .ok_or_else(|| anyhow!("no entry on {}", date::format_day_key(day)))
}
