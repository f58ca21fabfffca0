//! Application Configuration
//!
//! Startup settings loaded once from a JSON file. Every field is optional;
//! an empty file (`{}`) runs with the built-in catalog and no log file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::{Catalog, DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log file base name
    pub app_name: String,
    /// Directory for rolling log files (None = no file logging)
    pub log_dir: Option<PathBuf>,
    /// Catalog JSON file (None = built-in catalog)
    pub catalog_path: Option<PathBuf>,
    /// Store selected at startup (None = first store in the catalog)
    pub default_store: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "ShoppingList".to_string(),
            log_dir: None,
            catalog_path: None,
            default_store: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> DomainResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| DomainError::config(format!("{}: {}", path.display(), e)))?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn load_catalog(&self) -> DomainResult<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.load_catalog().unwrap().store_names().len(), 3);
    }

    #[test]
    fn test_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "default_store": "Sklep B", "log_dir": "/tmp/logs" }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.default_store.as_deref(), Some("Sklep B"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert_eq!(config.app_name, "ShoppingList");
    }

    #[test]
    fn test_bad_files_are_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(DomainError::Config(_))));
        assert!(matches!(
            AppConfig::load(&dir.path().join("absent.json")),
            Err(DomainError::Config(_))
        ));

        let config = AppConfig {
            catalog_path: Some(dir.path().join("absent-catalog.json")),
            ..Default::default()
        };
        assert!(matches!(config.load_catalog(), Err(DomainError::Config(_))));
    }
}
