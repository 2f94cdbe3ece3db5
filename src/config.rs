use crate::error::LabError;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the lab looks for its examples and recipes.
///
/// Read from an optional `lab.toml` at the crate root. Every key is optional;
/// relative directories are resolved against the root the config was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabConfig {
    pub examples_dir: PathBuf,
    pub recipes_dir: PathBuf,
    pub example_suffix: String,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            examples_dir: PathBuf::from("lessons"),
            recipes_dir: PathBuf::from("recipes"),
            example_suffix: ".rs".to_string(),
        }
    }
}

impl LabConfig {
    pub const FILE_NAME: &'static str = "lab.toml";

    /// Loads `<root>/lab.toml`, falling back to defaults when the file is absent.
    pub fn load(root: &Path) -> Result<Self, LabError> {
        let path = root.join(Self::FILE_NAME);
        let config = match fs::read_to_string(&path) {
            Ok(content) => Self::from_toml(&content)
                .map_err(|message| LabError::invalid_config(&path, message))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(source) => return Err(LabError::ConfigUnreadable { path, source }),
        };
        Ok(config.resolve(root))
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|err| err.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.example_suffix.is_empty() {
            return Err("example_suffix must not be empty".to_string());
        }
        Ok(())
    }

    /// Anchors relative directories at `root`. `Path::join` keeps absolute paths as they are.
    pub fn resolve(self, root: &Path) -> Self {
        Self {
            examples_dir: root.join(self.examples_dir),
            recipes_dir: root.join(self.recipes_dir),
            example_suffix: self.example_suffix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_file_missing() {
        let root = TempDir::new().unwrap();
        let config = LabConfig::load(root.path()).unwrap();
        assert_eq!(config.examples_dir, root.path().join("lessons"));
        assert_eq!(config.recipes_dir, root.path().join("recipes"));
        assert_eq!(config.example_suffix, ".rs");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = LabConfig::from_toml("examples_dir = \"demos\"\n").unwrap();
        assert_eq!(config.examples_dir, PathBuf::from("demos"));
        assert_eq!(config.recipes_dir, PathBuf::from("recipes"));
        assert_eq!(config.example_suffix, ".rs");
    }

    #[test]
    fn test_load_resolves_relative_dirs() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join(LabConfig::FILE_NAME),
            "examples_dir = \"demos\"\nrecipes_dir = \"cookbook\"\nexample_suffix = \".txt\"\n",
        )
        .unwrap();

        let config = LabConfig::load(root.path()).unwrap();
        assert_eq!(config.examples_dir, root.path().join("demos"));
        assert_eq!(config.recipes_dir, root.path().join("cookbook"));
        assert_eq!(config.example_suffix, ".txt");
    }

    #[test]
    fn test_absolute_dirs_are_kept() {
        let elsewhere = TempDir::new().unwrap();
        let config = LabConfig {
            examples_dir: elsewhere.path().to_path_buf(),
            ..LabConfig::default()
        }
        .resolve(Path::new("/some/root"));
        assert_eq!(config.examples_dir, elsewhere.path());
        assert_eq!(config.recipes_dir, Path::new("/some/root/recipes"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(LabConfig::from_toml("exmaples_dir = \"demos\"\n").is_err());
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let err = LabConfig::from_toml("example_suffix = \"\"\n").unwrap_err();
        assert!(err.contains("example_suffix"));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(LabConfig::FILE_NAME), "examples_dir = [\n").unwrap();

        let result = LabConfig::load(root.path());
        assert!(matches!(result, Err(LabError::InvalidConfig { ref path, .. }) if path.ends_with("lab.toml")));
    }
}
