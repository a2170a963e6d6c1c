use std::path::Path;

use thiserror::Error;

use crate::core::registry::HabitRegistry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access habit store: {0}")]
    Io(#[from] std::io::Error),
    #[error("habit store is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Load the registry from `path`, or an empty one when no store exists yet.
pub fn load(path: &Path) -> Result<HabitRegistry, StoreError> {
    if !path.exists() {
        log::debug!("no habit store at {}, starting empty", path.display());
        return Ok(HabitRegistry::new());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Write the registry back after a mutating call.
pub fn save(path: &Path, registry: &HabitRegistry) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(registry)?;
    std::fs::write(path, raw)?;
    log::debug!(
        "saved {} habits to {}",
        registry.habits().len(),
        path.display()
    );
    Ok(())
}
