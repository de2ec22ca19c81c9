//! Configuration for deploykit
//!
//! Settings load from environment variables with sensible defaults:
//!
//! - `DEPLOYKIT_LOG_LEVEL`: logging level - default: "info"
//! - `DEPLOYKIT_SCRATCH_DIR`: parent directory for request-scoped scratch
//!   directories - default: the system temp directory
//! - `DEPLOYKIT_MAX_ARCHIVE_SIZE`: upload size limit in bytes - default:
//!   268435456 (256 MB)

use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_MAX_ARCHIVE_SIZE: u64 = 256 * 1024 * 1024;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid DEPLOYKIT_MAX_ARCHIVE_SIZE: {0} (expected a positive byte count)")]
    InvalidMaxArchiveSize(String),

    #[error("scratch directory {0} does not exist")]
    MissingScratchDir(PathBuf),
}

#[derive(Debug, Clone)]
pub struct DeploykitConfig {
    /// Logging level name (trace|debug|info|warn|error)
    pub log_level: String,
    /// Parent directory for scratch directories
    pub scratch_dir: PathBuf,
    /// Upload size limit in bytes
    pub max_archive_size: u64,
}

impl Default for DeploykitConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            scratch_dir: env::temp_dir(),
            max_archive_size: DEFAULT_MAX_ARCHIVE_SIZE,
        }
    }
}

impl DeploykitConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_level =
            env::var("DEPLOYKIT_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let scratch_dir = env::var("DEPLOYKIT_SCRATCH_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir());

        let max_archive_size = match env::var("DEPLOYKIT_MAX_ARCHIVE_SIZE") {
            Ok(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidMaxArchiveSize(raw))?,
            Err(_) => DEFAULT_MAX_ARCHIVE_SIZE,
        };

        let config = Self {
            log_level,
            scratch_dir,
            max_archive_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scratch_dir.is_dir() {
            return Err(ConfigError::MissingScratchDir(self.scratch_dir.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("DEPLOYKIT_LOG_LEVEL");
        env::remove_var("DEPLOYKIT_SCRATCH_DIR");
        env::remove_var("DEPLOYKIT_MAX_ARCHIVE_SIZE");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = DeploykitConfig::from_env().unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.scratch_dir, env::temp_dir());
        assert_eq!(config.max_archive_size, 256 * 1024 * 1024);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("DEPLOYKIT_LOG_LEVEL", "debug");
        env::set_var("DEPLOYKIT_MAX_ARCHIVE_SIZE", "1024");

        let config = DeploykitConfig::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.max_archive_size, 1024);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_max_archive_size_rejected() {
        clear_env();
        env::set_var("DEPLOYKIT_MAX_ARCHIVE_SIZE", "lots");

        let err = DeploykitConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxArchiveSize(_)));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_zero_max_archive_size_rejected() {
        clear_env();
        env::set_var("DEPLOYKIT_MAX_ARCHIVE_SIZE", "0");

        let err = DeploykitConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxArchiveSize(_)));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_scratch_dir_fails_validation() {
        clear_env();
        env::set_var("DEPLOYKIT_SCRATCH_DIR", "/nonexistent/deploykit-scratch");

        let err = DeploykitConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingScratchDir(_)));
        clear_env();
    }
}
