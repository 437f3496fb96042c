use crate::error::{JobdeckError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_SOURCE: &str = "manual";
const DEFAULT_PAGE_SIZE: usize = 20;

pub const CONFIG_KEYS: [&str; 4] = ["log-level", "default-source", "page-size", "export-dir"];

/// Configuration for jobdeck, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobdeckConfig {
    /// Default tracing filter level when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Provenance tag for jobs added from the command line
    #[serde(default = "default_source")]
    pub default_source: String,

    /// Rows per page in `list`; 0 shows everything
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Where `doc export` writes when no directory is given
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for JobdeckConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_source: default_source(),
            page_size: DEFAULT_PAGE_SIZE,
            export_dir: None,
        }
    }
}

impl JobdeckConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JobdeckError::Io)?;
        let config: JobdeckConfig =
            serde_json::from_str(&content).map_err(JobdeckError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JobdeckError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JobdeckError::Serialization)?;
        fs::write(config_path, content).map_err(JobdeckError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "log-level" => Ok(self.log_level.clone()),
            "default-source" => Ok(self.default_source.clone()),
            "page-size" => Ok(self.page_size.to_string()),
            "export-dir" => Ok(self
                .export_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "log-level" => {
                let level = value.trim().to_lowercase();
                if !["error", "warn", "info", "debug", "trace", "off"].contains(&level.as_str()) {
                    return Err(JobdeckError::Api(format!("Invalid log level: {}", value)));
                }
                self.log_level = level;
            }
            "default-source" => {
                if value.trim().is_empty() {
                    return Err(JobdeckError::Api("default-source cannot be empty".into()));
                }
                self.default_source = value.trim().to_string();
            }
            "page-size" => {
                self.page_size = value
                    .trim()
                    .parse()
                    .map_err(|_| JobdeckError::Api(format!("Invalid page size: {}", value)))?;
            }
            "export-dir" => {
                self.export_dir = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value.trim()))
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> JobdeckError {
    JobdeckError::Api(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JobdeckConfig::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.default_source, "manual");
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = JobdeckConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, JobdeckConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = JobdeckConfig::default();
        config.set("page-size", "5").unwrap();
        config.set("default-source", "referral").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = JobdeckConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.page_size, 5);
        assert_eq!(loaded.default_source, "referral");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"page_size": 3}"#).unwrap();
        let loaded = JobdeckConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.page_size, 3);
        assert_eq!(loaded.log_level, "warn");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = JobdeckConfig::default();
        assert!(config.set("log-level", "loud").is_err());
        assert!(config.set("page-size", "many").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert!(config.get("colour").is_err());
    }

    #[test]
    fn test_export_dir_can_be_cleared() {
        let mut config = JobdeckConfig::default();
        config.set("export-dir", "/tmp/out").unwrap();
        assert_eq!(config.get("export-dir").unwrap(), "/tmp/out");
        config.set("export-dir", "").unwrap();
        assert_eq!(config.export_dir, None);
    }
}
