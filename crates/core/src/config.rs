//! Dashboard configuration
//!
//! Loaded from `staff.toml`. Every field is optional; a missing file means
//! all defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::dashboard::Tab;
use crate::error::{Error, Result};
use crate::filters::{NotificationFilter, RoomFilter, TaskFilter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Tab selected at startup
    pub default_tab: String,
    pub task_filter: String,
    pub room_filter: String,
    pub notification_filter: String,
    /// Header clock refresh period
    pub clock_tick_ms: u64,
    /// JSON snapshot to load instead of the built-in shift data
    pub seed_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_tab: "tasks".to_string(),
            task_filter: "all".to_string(),
            room_filter: "all".to_string(),
            notification_filter: "unread".to_string(),
            clock_tick_ms: 1000,
            seed_path: None,
        }
    }
}

impl DashboardConfig {
    /// Default config file location (`<config dir>/staff.toml`)
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "onyx", "pms-staff").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        Ok(dirs.config_dir().join("staff.toml"))
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::parse(&content)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check tab and filter names with the same parsers the stores use
    pub fn validate(&self) -> Result<()> {
        let wrap = |e: Error| Error::Config(e.to_string());
        self.default_tab.parse::<Tab>().map_err(wrap)?;
        TaskFilter::parse(&self.task_filter).map_err(wrap)?;
        RoomFilter::parse(&self.room_filter).map_err(wrap)?;
        NotificationFilter::parse(&self.notification_filter).map_err(wrap)?;
        if self.clock_tick_ms == 0 {
            return Err(Error::Config("clock_tick_ms must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = DashboardConfig::load(&temp.path().join("staff.toml")).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.notification_filter, "unread");
    }

    #[test]
    fn test_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("staff.toml");
        std::fs::write(&path, "default_tab = \"rooms\"\nroom_filter = \"3\"\n").unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.default_tab, "rooms");
        assert_eq!(config.room_filter, "3");
        assert_eq!(config.clock_tick_ms, 1000);
    }

    #[test]
    fn test_invalid_names_rejected() {
        assert!(matches!(
            DashboardConfig::parse("default_tab = \"reports\""),
            Err(Error::Config(_))
        ));
        assert!(DashboardConfig::parse("task_filter = \"overdue\"").is_err());
        assert!(DashboardConfig::parse("clock_tick_ms = 0").is_err());
        assert!(DashboardConfig::parse("clock_tick_ms = \"fast\"").is_err());
    }

    #[test]
    fn test_seed_path() {
        let config = DashboardConfig::parse("seed_path = \"/tmp/shift.json\"").unwrap();
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/shift.json")));
    }
}
