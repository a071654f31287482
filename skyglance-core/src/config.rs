use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// geocoding_url = "https://geocoding-api.open-meteo.com/v1/search"
/// forecast_url = "https://api.open-meteo.com/v1/forecast"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Geocoding search endpoint (name -> coordinates).
    pub geocoding_url: String,

    /// Forecast endpoint (coordinates -> current + daily weather).
    pub forecast_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, use the public endpoints.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Override endpoints that were given explicitly (e.g. on the command line).
    pub fn with_overrides(mut self, geocoding_url: Option<String>, forecast_url: Option<String>) -> Self {
        if let Some(url) = geocoding_url {
            self.geocoding_url = url;
        }
        if let Some(url) = forecast_url {
            self.forecast_url = url;
        }
        self
    }
}

pub(crate) fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "skyglance", "skyglance")
        .ok_or_else(|| anyhow!("Could not determine platform config directory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_open_meteo() {
        let cfg = Config::default();
        assert_eq!(cfg.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(cfg.forecast_url, DEFAULT_FORECAST_URL);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("nope.toml")).expect("load");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "forecast_url = \"http://localhost:8080/v1/forecast\"\n").expect("write");

        let cfg = Config::load_from(&path).expect("load");
        assert_eq!(cfg.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(cfg.forecast_url, "http://localhost:8080/v1/forecast");
    }

    #[test]
    fn save_then_load_in_nested_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("a").join("b").join("config.toml");

        let cfg = Config::default().with_overrides(Some("http://geo.local/search".into()), None);
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn invalid_toml_is_reported_with_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "geocoding_url = [").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn overrides_only_replace_given_values() {
        let cfg = Config::default().with_overrides(None, Some("http://f".into()));
        assert_eq!(cfg.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(cfg.forecast_url, "http://f");
    }
}
