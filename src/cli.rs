use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "habitflow", about = "Local-first habit tracker", version)]
pub struct Cli {
    /// Enable debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new habit and print its id
    Add {
        name: String,
        /// Category keyword (exercise, steps, skills, savings, sleep,
        /// prayer, meditation, stress, custom)
        #[arg(short, long)]
        category: String,
        /// Daily target in the habit's unit
        #[arg(short, long)]
        target: f64,
        /// Unit label (defaults to the category's)
        #[arg(short, long)]
        unit: Option<String>,
    },
    /// Remove a habit and all its entries
    Rm { habit: String },
    /// Log a value for a habit (replaces any entry on the same day)
    Log {
        habit: String,
        value: f64,
        /// Day to log for (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Edit the entry logged on a day
    Edit {
        habit: String,
        /// Day the entry was logged on (YYYY-MM-DD)
        date: String,
        #[arg(long)]
        value: Option<f64>,
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Remove the entry logged on a day
    Unlog {
        habit: String,
        /// Day the entry was logged on (YYYY-MM-DD)
        date: String,
    },
    /// List habits
    List {
        /// Only habits in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show each habit's entry for today
    Today,
    /// Show a habit's streak and recent completion grid
    Streak { habit: String },
    /// Show the last 7 days of values
    Weekly { habit: String },
    /// Show the last 30 days of values
    Monthly { habit: String },
    /// Spend a streak freeze on today
    Freeze { habit: String },
    /// Overview and per-category statistics
    Stats,
    /// Trailing-window report for every habit
    Report {
        /// Window length in days
        #[arg(short, long, default_value_t = 7)]
        days: u32,
    },
}
