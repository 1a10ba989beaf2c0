//! Application configuration.
//!
//! Loaded from a TOML file; every field has a default so an empty or
//! missing file yields a usable configuration.
//!
//! ```toml
//! database_path = "/var/lib/tenderdesk/tenders.sqlite3"
//! upload_dir = "/var/lib/tenderdesk/uploads"
//! max_upload_bytes = 16777216
//!
//! [logging]
//! level = "info"
//! dir = "/var/log/tenderdesk"
//! ```

use crate::logging::default_log_level;
use crate::service::document_service::{UploadPolicy, DEFAULT_MAX_UPLOAD_BYTES};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Directory receiving uploaded tender documents.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_level")]
    pub level: String,

    /// Absolute log directory. File logging stays off when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("tenderdesk.sqlite3")
}
fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}
fn default_max_upload_bytes() -> u64 {
    DEFAULT_MAX_UPLOAD_BYTES
}
fn default_level() -> String {
    default_log_level().to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            upload_dir: default_upload_dir(),
            max_upload_bytes: default_max_upload_bytes(),
            logging: LoggingSettings::default(),
        }
    }
}

impl AppConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` when given, otherwise returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy {
            upload_dir: self.upload_dir.clone(),
            max_bytes: self.max_upload_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError};
    use std::path::{Path, PathBuf};

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            upload_dir = "/srv/uploads"

            [logging]
            level = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.upload_dir, PathBuf::from("/srv/uploads"));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.dir, None);
        assert_eq!(config.database_path, PathBuf::from("tenderdesk.sqlite3"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AppConfig::load(Path::new("/nonexistent/tenderdesk.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/tenderdesk.toml"));
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        assert!(AppConfig::from_toml_str("max_upload_bytes = \"big\"").is_err());
    }
}
