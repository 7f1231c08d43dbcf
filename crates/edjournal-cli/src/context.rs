use anyhow::{Result, bail};
use edjournal_runtime::MonitorConfig;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

pub struct ExecutionContext {
    config_path: Option<PathBuf>,
    config: OnceCell<MonitorConfig>,
}

impl ExecutionContext {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            config: OnceCell::new(),
        }
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => Ok(MonitorConfig::default_path()?),
        }
    }

    /// Monitor config; a missing default file means defaults, a missing explicit one is an error
    pub fn config(&self) -> Result<&MonitorConfig> {
        self.config.get_or_try_init(|| {
            let path = self.config_path()?;
            if self.config_path.is_some() && !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Ok(MonitorConfig::load_from(&path)?)
        })
    }
}
