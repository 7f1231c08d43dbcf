use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the journal directory
pub const JOURNAL_DIR_ENV: &str = "EDJOURNAL_DIR";

/// File names the game gives its journals, e.g. `Journal.170101123456.01.log`
pub const DEFAULT_FILE_PATTERN: &str = r"^Journal\.[0-9\.]+\.log$";

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Resolve the journal directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. EDJOURNAL_DIR environment variable (with tilde expansion)
/// 3. The game's folder under the user's Saved Games
pub fn resolve_journal_dir(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Some(env_path) = std::env::var_os(JOURNAL_DIR_ENV) {
        return Ok(expand_tilde(Path::new(&env_path)));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home
            .join("Saved Games")
            .join("Frontier Developments")
            .join("Elite Dangerous"));
    }

    Err(Error::Config(
        "Could not determine journal directory: no home directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Directory holding the journals; resolved by `resolve_journal_dir` when unset
    pub journal_dir: Option<PathBuf>,
    pub file_pattern: String,
    pub poll_interval_ms: u64,
    /// Skip what the newest journal already holds when monitoring starts
    pub start_at_end: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            journal_dir: None,
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            start_at_end: true,
        }
    }
}

impl MonitorConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: MonitorConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("edjournal").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    pub fn journal_dir(&self) -> Result<PathBuf> {
        resolve_journal_dir(self.journal_dir.as_deref())
    }

    pub fn file_regex(&self) -> Result<Regex> {
        Ok(Regex::new(&self.file_pattern)?)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = MonitorConfig::default();
        assert_eq!(config.journal_dir, None);
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
        assert!(config.start_at_end);

        let pattern = config.file_regex().unwrap();
        assert!(pattern.is_match("Journal.170101123456.01.log"));
        assert!(!pattern.is_match("JournalAlpha.170101123456.01.log"));
        assert!(!pattern.is_match("Journal.170101123456.01.log.bak"));
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = MonitorConfig {
            journal_dir: Some(PathBuf::from("/games/journals")),
            poll_interval_ms: 250,
            start_at_end: false,
            ..MonitorConfig::default()
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = MonitorConfig::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "poll_interval_ms = 1000\n")?;

        let loaded = MonitorConfig::load_from(&config_path)?;
        assert_eq!(loaded.poll_interval_ms, 1000);
        assert_eq!(loaded.file_pattern, DEFAULT_FILE_PATTERN);
        assert!(loaded.start_at_end);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = MonitorConfig::load_from(&config_path)?;
        assert_eq!(config, MonitorConfig::default());

        Ok(())
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let config = MonitorConfig {
            file_pattern: "(".to_string(),
            ..MonitorConfig::default()
        };
        assert!(matches!(config.file_regex(), Err(Error::Config(_))));
    }

    #[test]
    fn test_explicit_dir_wins() -> Result<()> {
        let dir = resolve_journal_dir(Some(Path::new("/tmp/journals")))?;
        assert_eq!(dir, PathBuf::from("/tmp/journals"));
        Ok(())
    }
}
