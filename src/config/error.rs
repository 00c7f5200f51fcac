//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors raised while locating, reading or writing `config.yml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No home directory to place the configuration in")]
    HomeDirectoryNotFound,

    /// `save` was called before `load` picked a file
    #[error("No configuration file has been chosen yet")]
    PathNotSet,

    #[error("Could not create {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML that does not match the expected layout, in either direction
    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_name_the_path() {
        let error = ConfigError::Read {
            path: PathBuf::from("/tmp/contact/config.yml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.starts_with("Could not read /tmp/contact/config.yml"));
        assert!(message.ends_with("denied"));
    }

    #[test]
    fn test_yaml_errors_convert() {
        let yaml_error = serde_yaml::from_str::<u64>("[").unwrap_err();
        let error: ConfigError = yaml_error.into();
        assert!(matches!(error, ConfigError::Malformed(_)));
    }
}
