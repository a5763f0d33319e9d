//! Global werkstatt configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ScheduleError, ScheduleResult};
use crate::scheduler::DEFAULT_LOOK_AHEAD_DAYS;
use crate::slots::SlotGrid;

static DEFAULT_DATA_FILE: &str = "appointments.json";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_look_ahead_days() -> u32 {
    DEFAULT_LOOK_AHEAD_DAYS
}

/// One configured slot as a `(start, end)` pair of `HH:MM` strings.
#[derive(Deserialize, Clone)]
pub struct SlotSpec {
    pub start: String,
    pub end: String,
}

/// Global configuration at ~/.config/werkstatt/config.toml
///
/// Everything is optional: a missing file (or any missing key) falls back
/// to the built-in defaults, so the planner works out of the box.
#[derive(Deserialize, Clone)]
pub struct WorkshopConfig {
    /// Where the appointment book lives.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Bookable slots of the working day. Whatever the slots leave
    /// uncovered (the lunch break) is not bookable. Empty means the
    /// built-in four-slot day.
    #[serde(default)]
    pub slots: Vec<SlotSpec>,

    /// How many days ahead an emergency shift may search for a free slot.
    #[serde(default = "default_look_ahead_days")]
    pub look_ahead_days: u32,
}

impl Default for WorkshopConfig {
    fn default() -> Self {
        WorkshopConfig {
            data_file: default_data_file(),
            slots: Vec::new(),
            look_ahead_days: DEFAULT_LOOK_AHEAD_DAYS,
        }
    }
}

impl WorkshopConfig {
    pub fn config_path() -> ScheduleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".to_string()))?
            .join("werkstatt");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults if it does not exist.
    pub fn load() -> ScheduleResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        if !path.exists() {
            return Ok(WorkshopConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ScheduleError::Config(e.to_string()))
    }

    /// The slot grid this config describes.
    pub fn grid(&self) -> ScheduleResult<SlotGrid> {
        if self.slots.is_empty() {
            return Ok(SlotGrid::default());
        }

        let pairs: Vec<(&str, &str)> = self
            .slots
            .iter()
            .map(|slot| (slot.start.as_str(), slot.end.as_str()))
            .collect();

        SlotGrid::from_pairs(&pairs)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ScheduleResult<()> {
        let contents = format!(
            "\
# werkstatt configuration

# Where the appointment book lives:
# data_file = \"{DEFAULT_DATA_FILE}\"

# How many days ahead an emergency shift may search for a free slot:
# look_ahead_days = {DEFAULT_LOOK_AHEAD_DAYS}

# Bookable slots of the working day. Whatever the slots leave uncovered
# (the lunch break) is not bookable. Defaults to four 2-hour slots:
# [[slots]]
# start = \"08:00\"
# end = \"10:00\"
#
# [[slots]]
# start = \"10:00\"
# end = \"12:00\"
#
# [[slots]]
# start = \"13:00\"
# end = \"15:00\"
#
# [[slots]]
# start = \"15:00\"
# end = \"17:00\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScheduleError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ScheduleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = WorkshopConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.data_file, PathBuf::from("appointments.json"));
        assert_eq!(config.look_ahead_days, DEFAULT_LOOK_AHEAD_DAYS);
        assert_eq!(config.grid().unwrap().slots().len(), 4);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_file = \"/var/lib/werkstatt/book.json\"\n").unwrap();

        let config = WorkshopConfig::load_from(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/var/lib/werkstatt/book.json"));
        assert_eq!(config.look_ahead_days, DEFAULT_LOOK_AHEAD_DAYS);
    }

    #[test]
    fn configured_slots_build_the_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[[slots]]\nstart = \"09:00\"\nend = \"11:00\"\n\n[[slots]]\nstart = \"14:00\"\nend = \"16:00\"\n",
        )
        .unwrap();

        let grid = WorkshopConfig::load_from(&path).unwrap().grid().unwrap();
        let labels: Vec<String> = grid.slots().iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["09:00 - 11:00", "14:00 - 16:00"]);
    }

    #[test]
    fn bad_slot_times_are_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[[slots]]\nstart = \"11:00\"\nend = \"09:00\"\n").unwrap();

        let result = WorkshopConfig::load_from(&path).unwrap().grid();
        assert!(matches!(result, Err(ScheduleError::Config(_))));
    }

    #[test]
    fn default_config_file_parses_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        WorkshopConfig::create_default_config(&path).unwrap();

        // Everything is commented out, so the file is all defaults.
        let config = WorkshopConfig::load_from(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from("appointments.json"));
        assert!(config.slots.is_empty());
    }
}
