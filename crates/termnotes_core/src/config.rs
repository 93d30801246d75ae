//! Startup configuration.
//!
//! # Responsibility
//! - Resolve the database location and logging settings once at startup.
//! - Hand them to callers as an explicit value instead of global constants.
//!
//! # Invariants
//! - Resolved paths are absolute whenever the installation directory is.
//! - Environment overrides, when set, must not be blank.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV: &str = "TERMNOTES_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "TERMNOTES_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "TERMNOTES_LOG_DIR";

const DEFAULT_DB_FILE: &str = "notes.db";
const DEFAULT_LOG_SUBDIR: &str = "logs";

#[derive(Debug)]
pub enum ConfigError {
    /// The directory of the running executable could not be determined.
    InstallDir(io::Error),
    /// An override variable is set but contains only whitespace.
    BlankOverride(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InstallDir(err) => write!(f, "cannot locate installation directory: {err}"),
            Self::BlankOverride(name) => write!(f, "`{name}` is set but empty"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InstallDir(err) => Some(err),
            Self::BlankOverride(_) => None,
        }
    }
}

/// Application settings passed to the storage and logging layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file holding the `notes` table.
    pub storage_path: PathBuf,
    /// Log level name understood by [`crate::init_logging`].
    pub log_level: String,
    /// Directory for rotated log files.
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Builds a config for `storage_path` with default logging settings.
    ///
    /// Logs go to a `logs` directory next to the database file.
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let log_dir = storage_path
            .parent()
            .map(|parent| parent.join(DEFAULT_LOG_SUBDIR))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_SUBDIR));
        Self {
            storage_path,
            log_level: default_log_level().to_string(),
            log_dir,
        }
    }

    /// Resolves config from the executable location and process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let exe = std::env::current_exe().map_err(ConfigError::InstallDir)?;
        let install_dir = exe.parent().ok_or_else(|| {
            ConfigError::InstallDir(io::Error::new(
                io::ErrorKind::NotFound,
                "executable has no parent directory",
            ))
        })?;
        Self::from_lookup(install_dir, |name| std::env::var(name).ok())
    }

    /// Resolves config relative to `install_dir`, reading overrides through
    /// `lookup`.
    ///
    /// Relative override paths are resolved against `install_dir`.
    pub fn from_lookup(
        install_dir: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let storage_path = match override_value(&lookup, DB_PATH_ENV)? {
            Some(value) => install_dir.join(value),
            None => install_dir.join(DEFAULT_DB_FILE),
        };

        let mut config = Self::new(storage_path);
        if let Some(level) = override_value(&lookup, LOG_LEVEL_ENV)? {
            config.log_level = level;
        }
        if let Some(dir) = override_value(&lookup, LOG_DIR_ENV)? {
            config.log_dir = install_dir.join(dir);
        }
        Ok(config)
    }
}

fn override_value(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<String>, ConfigError> {
    match lookup(name) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::BlankOverride(name)),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::{override_value, ConfigError, DB_PATH_ENV};

    #[test]
    fn override_value_trims_and_rejects_blank() {
        let present = |_: &str| Some("  notes.db ".to_string());
        assert_eq!(
            override_value(&present, DB_PATH_ENV).unwrap().as_deref(),
            Some("notes.db")
        );

        let blank = |_: &str| Some("   ".to_string());
        let err = override_value(&blank, DB_PATH_ENV).unwrap_err();
        assert!(matches!(err, ConfigError::BlankOverride(DB_PATH_ENV)));
    }
}
