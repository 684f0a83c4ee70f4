//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into the session. The intent is to avoid reading
//! process-wide environment variables during command handling, which can
//! lead to inconsistent behaviour in test harnesses.

use crate::constants::{DEFAULT_EXPORT_DIR, EXPORT_FILE_NAME};
use crate::error::{ProfileError, ProfileResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    export_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The export directory must already exist; a missing directory is a
    /// startup error rather than a surprise at export time.
    pub fn new(export_dir: PathBuf) -> ProfileResult<Self> {
        if !export_dir.is_dir() {
            return Err(ProfileError::InvalidInput(format!(
                "export directory does not exist: {}",
                export_dir.display()
            )));
        }
        Ok(Self { export_dir })
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Full path the next export will be written to.
    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(EXPORT_FILE_NAME)
    }
}

/// Resolve the export directory from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, the default export directory
/// (the current directory) is used.
pub fn export_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_accepts_an_existing_directory() {
        let temp = TempDir::new().unwrap();
        let config = CoreConfig::new(temp.path().to_path_buf()).unwrap();
        assert_eq!(config.export_dir(), temp.path());
        assert!(config.export_path().ends_with(EXPORT_FILE_NAME));
    }

    #[test]
    fn test_config_rejects_a_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nowhere");
        assert!(matches!(
            CoreConfig::new(missing),
            Err(ProfileError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_export_dir_env_value_resolution() {
        assert_eq!(
            export_dir_from_env_value(None),
            PathBuf::from(DEFAULT_EXPORT_DIR)
        );
        assert_eq!(
            export_dir_from_env_value(Some("  ".into())),
            PathBuf::from(DEFAULT_EXPORT_DIR)
        );
        assert_eq!(
            export_dir_from_env_value(Some("/tmp/exports".into())),
            PathBuf::from("/tmp/exports")
        );
    }
}
