use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_data_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HABITFLOW_HOME") {
        return PathBuf::from(home);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("habitflow")
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HabitflowConfig {
    pub data_directory: PathBuf,
}

impl Default for HabitflowConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_dir(),
        }
    }
}

impl HabitflowConfig {
    pub fn habits_path(&self) -> PathBuf {
        self.data_directory.join("habits.json")
    }

    /// Ensure the data directory exists.
    pub fn ensure_files(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_directory)
    }
}
