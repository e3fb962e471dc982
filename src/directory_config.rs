//! Overriding the bundled reference data with files from a directory.
//!
//! This module is only available when the `directory-loading` feature is
//! enabled (which is the default). Without any configuration, the bundled
//! datasets are used and the filesystem is never consulted.
//!
//! # Overview
//!
//! A data directory holds one JSON file per reference table, named after the
//! table (`STATE_CODE_TO_NAME.json`, `COUNTY_LAT_LONG.json`, ...). A directory
//! does not need to provide every table: tables it lacks fall back to the
//! next configured directory, and finally to the bundled copy. This is how a
//! complete nationwide county dataset is plugged in without touching the
//! state tables.
//!
//! Configuration must happen before the first lookup. The first table to be
//! materialized locks the configuration for the rest of the process.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use log::warn;
use thiserror::Error;

use crate::Resource;

/// Configuration for loading reference tables from directories.
///
/// Directories are searched in reverse order, so files in later directories
/// take precedence over files in earlier directories.
///
/// # Examples
///
/// ```rust,ignore
/// use geolookup::DataConfig;
///
/// // Bundled data only (the default)
/// let config = DataConfig::new();
///
/// // Use only the default directory (~/.geolookup/)
/// let config = DataConfig::default_only();
///
/// // Use custom paths with the default directory taking precedence
/// let config = DataConfig::with_paths_and_default(vec![
///     "/usr/share/geolookup".into(),
/// ]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataConfig {
    /// Search paths in priority order (later paths override earlier).
    paths: Vec<PathBuf>,
}

impl DataConfig {
    /// Creates a configuration with no search paths, which uses the bundled
    /// data for every table.
    pub fn new() -> Self { Self { paths: Vec::new() } }

    /// Creates configuration with only the default directory (`~/.geolookup/`).
    pub fn default_only() -> Self {
        Self {
            paths: vec![Self::default_directory()],
        }
    }

    /// Creates configuration with custom paths (later paths take precedence).
    pub fn with_paths(paths: Vec<PathBuf>) -> Self { Self { paths } }

    /// Creates configuration with custom paths followed by the default
    /// directory, which therefore takes precedence over all of them.
    pub fn with_paths_and_default(mut paths: Vec<PathBuf>) -> Self {
        paths.push(Self::default_directory());
        Self { paths }
    }

    /// Returns the default directory: `~/.geolookup/`
    ///
    /// Falls back to `./.geolookup/` if the home directory cannot be determined.
    pub fn default_directory() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".geolookup")
    }

    /// Returns the configured search paths.
    pub fn paths(&self) -> &[PathBuf] { &self.paths }

    /// Adds a path that takes precedence over every existing path.
    pub fn add_path(&mut self, path: PathBuf) { self.paths.push(path); }

    /// Returns the file that should back `resource`, if any configured
    /// directory provides one.
    ///
    /// ```
    /// use geolookup::{DataConfig, Resource};
    ///
    /// let config = DataConfig::new();
    /// assert_eq!(config.locate(Resource::StateLatLong), None);
    /// ```
    pub fn locate(&self, resource: Resource) -> Option<PathBuf> {
        let file_name = resource.file_name();
        self.paths.iter().rev().find_map(|directory| {
            if !directory.is_dir() {
                warn!("data directory {} does not exist", directory.display());
                return None;
            }
            let candidate = directory.join(&file_name);
            candidate.is_file().then_some(candidate)
        })
    }

    /// Returns `true` when no directory is configured.
    pub fn is_bundled_only(&self) -> bool { self.paths.is_empty() }

    /// Returns `true` when `path` is one of the configured directories.
    pub fn contains(&self, path: &Path) -> bool { self.paths.iter().any(|p| p == path) }
}

/// Error returned when configuration cannot be modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration was attempted after a reference table was loaded.
    #[error("Cannot modify data configuration after a reference table has been loaded")]
    AlreadyInitialized,
}

struct ConfigState {
    pending: Option<DataConfig>,
    locked: bool,
}

// Global configuration state
static CONFIG_STATE: Mutex<ConfigState> = Mutex::new(ConfigState { pending: None, locked: false });
static LOCKED_CONFIG: OnceLock<DataConfig> = OnceLock::new();

/// Sets the data directory configuration.
///
/// This function must be called **before** the first lookup on
/// [`STATES`](crate::STATES) or [`COUNTIES`](crate::COUNTIES). Once any
/// reference table has been loaded, the configuration is locked.
///
/// # Examples
///
/// ```rust,ignore
/// use geolookup::{set_data_config, DataConfig, COUNTIES};
///
/// set_data_config(DataConfig::with_paths(vec![
///     "/usr/share/geolookup".into(),
/// ])).expect("Configuration should succeed");
///
/// // County tables now come from /usr/share/geolookup when present there
/// let name = COUNTIES.code_to_name(6, 37);
/// ```
pub fn set_data_config(config: DataConfig) -> Result<(), ConfigError> {
    let mut state = CONFIG_STATE.lock().unwrap_or_else(PoisonError::into_inner);
    if state.locked {
        return Err(ConfigError::AlreadyInitialized);
    }
    state.pending = Some(config);
    Ok(())
}

/// Adds search paths to the data directory configuration.
///
/// Paths are added after any existing paths, so they take precedence. If no
/// configuration has been set, the paths are added to an empty (bundled only)
/// configuration.
///
/// Like [`set_data_config`], this fails once any reference table has been
/// loaded.
pub fn add_search_paths(paths: Vec<PathBuf>) -> Result<(), ConfigError> {
    let mut state = CONFIG_STATE.lock().unwrap_or_else(PoisonError::into_inner);
    if state.locked {
        return Err(ConfigError::AlreadyInitialized);
    }
    let config = state.pending.get_or_insert_with(DataConfig::new);
    for path in paths {
        config.add_path(path);
    }
    Ok(())
}

/// Returns `true` once the configuration can no longer change.
pub fn is_config_locked() -> bool {
    CONFIG_STATE.lock().unwrap_or_else(PoisonError::into_inner).locked
}

/// Gets the current configuration, locking it for future modifications.
///
/// This is called internally whenever a reference table is materialized.
pub(crate) fn get_and_lock_config() -> &'static DataConfig {
    LOCKED_CONFIG.get_or_init(|| {
        let mut state = CONFIG_STATE.lock().unwrap_or_else(PoisonError::into_inner);
        state.locked = true;
        state.pending.take().unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_new_is_bundled_only() {
        let config = DataConfig::new();
        assert!(config.is_bundled_only());
        assert_eq!(config.locate(Resource::StateCodeToName), None);
    }

    #[test]
    fn test_directory_config_default() {
        let config = DataConfig::default_only();
        assert_eq!(config.paths().len(), 1);
        assert!(config.paths()[0].ends_with(".geolookup"));
    }

    #[test]
    fn test_directory_config_custom_paths() {
        let config = DataConfig::with_paths(vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        assert_eq!(config.paths(), &[PathBuf::from("/a"), PathBuf::from("/b")]);
        assert!(config.contains(Path::new("/b")));
    }

    #[test]
    fn test_directory_config_with_default() {
        let config = DataConfig::with_paths_and_default(vec![PathBuf::from("/custom")]);
        assert_eq!(config.paths().len(), 2);
        assert_eq!(config.paths()[0], PathBuf::from("/custom"));
        assert!(config.paths()[1].ends_with(".geolookup"));
    }

    #[test]
    fn test_later_directory_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("STATE_LAT_LONG.json"), "{}").unwrap();
        fs::write(second.path().join("STATE_LAT_LONG.json"), "{}").unwrap();

        let config =
            DataConfig::with_paths(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(
            config.locate(Resource::StateLatLong),
            Some(second.path().join("STATE_LAT_LONG.json"))
        );
    }

    #[test]
    fn test_missing_table_falls_through() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("COUNTY_LAT_LONG.json"), "{}").unwrap();

        let mut config = DataConfig::with_paths(vec![first.path().to_path_buf()]);
        config.add_path(second.path().to_path_buf());
        config.add_path(PathBuf::from("/nonexistent/path/12345"));

        assert_eq!(
            config.locate(Resource::CountyLatLong),
            Some(first.path().join("COUNTY_LAT_LONG.json"))
        );
        assert_eq!(config.locate(Resource::CountyCodeToName), None);
    }
}
