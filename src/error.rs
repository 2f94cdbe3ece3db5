use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabError {
    #[error("Cannot read directory {}: {source}", .path.display())]
    DirectoryUnreadable { path: PathBuf, source: io::Error },

    #[error("Cannot read config file {}: {source}", .path.display())]
    ConfigUnreadable { path: PathBuf, source: io::Error },

    #[error("Invalid config file {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },
}

impl LabError {
    pub fn directory_unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryUnreadable {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_directory_unreadable_display() {
        let err = LabError::directory_unreadable(
            "/missing/lessons",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let message = err.to_string();
        assert!(message.contains("/missing/lessons"));
        assert!(message.contains("not found"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_config_display() {
        let err = LabError::invalid_config("lab.toml", "example_suffix must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid config file lab.toml: example_suffix must not be empty"
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LabError>();
    }
}
