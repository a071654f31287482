//! Persistence of the last successfully looked-up city.

use anyhow::{Context, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Debug,
    fs,
    path::PathBuf,
};

use crate::config::project_dirs;

/// A single-value store for the last searched city.
pub trait CityStore: Send + Sync + Debug {
    /// Overwrite the stored city.
    fn save(&self, city: &str) -> Result<()>;

    /// The stored city, if any.
    fn load(&self) -> Result<Option<String>>;

    /// Remove the stored city.
    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    last_city: Option<String>,
}

/// Keeps the city in a small TOML file (`last_city = "..."`).
#[derive(Debug, Clone)]
pub struct FileCityStore {
    path: PathBuf,
}

impl FileCityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform data directory.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(project_dirs()?.data_dir().join("state.toml"))
    }

    fn write(&self, state: &StateFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create state directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string(state).context("Failed to serialize state to TOML")?;

        fs::write(&self.path, toml)
            .with_context(|| format!("Failed to write state file: {}", self.path.display()))
    }
}

impl CityStore for FileCityStore {
    fn save(&self, city: &str) -> Result<()> {
        self.write(&StateFile { last_city: Some(city.to_string()) })
    }

    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read state file: {}", self.path.display()))?;

        let state: StateFile = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse state file: {}", self.path.display()))?;

        Ok(state.last_city)
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            self.write(&StateFile::default())?;
        }
        Ok(())
    }
}

/// In-process store; nothing outlives the process.
#[derive(Debug, Default)]
pub struct MemoryCityStore {
    city: Mutex<Option<String>>,
}

impl MemoryCityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(city: impl Into<String>) -> Self {
        Self { city: Mutex::new(Some(city.into())) }
    }
}

impl CityStore for MemoryCityStore {
    fn save(&self, city: &str) -> Result<()> {
        *self.city.lock() = Some(city.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>> {
        Ok(self.city.lock().clone())
    }

    fn clear(&self) -> Result<()> {
        *self.city.lock() = None;
        Ok(())
    }
}
