//! # Counter Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`COFFEE_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::path::PathBuf;

use coffee_core::{Catalog, CoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default banner name.
pub const DEFAULT_SHOP_NAME: &str = "Charlene's Coffee Corner";

/// Default tracing filter; info logs stay off the terminal unless asked for.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Counter configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CounterConfig {
    /// Shown in the welcome banner.
    pub shop_name: String,

    /// JSON catalog to sell from; the house menu when unset.
    pub catalog_path: Option<PathBuf>,

    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        CounterConfig {
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            catalog_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CounterConfig {
    /// Creates the configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `COFFEE_SHOP_NAME`: banner name
    /// - `COFFEE_CATALOG_PATH`: JSON catalog file
    /// - `COFFEE_LOG`: tracing filter (e.g. `coffee_core=debug`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CounterConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CounterConfig::default();
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(shop_name) = non_blank("COFFEE_SHOP_NAME") {
            config.shop_name = shop_name;
        }

        if let Some(path) = non_blank("COFFEE_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(filter) = non_blank("COFFEE_LOG") {
            config.log_filter = filter;
        }

        config
    }

    /// Loads the configured catalog, or the house menu when none is set.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::reference());
        };

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.clone(),
            source,
        })?;
        Ok(Catalog::from_json(&json)?)
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read catalog file {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog rejected: {0}")]
    Catalog(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CounterConfig::from_lookup(|_| None);
        assert_eq!(config, CounterConfig::default());
        assert_eq!(config.shop_name, "Charlene's Coffee Corner");
        assert!(config.catalog_path.is_none());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_env_overrides() {
        let config = CounterConfig::from_lookup(lookup(&[
            ("COFFEE_SHOP_NAME", "Bean There"),
            ("COFFEE_CATALOG_PATH", "/etc/coffee/menu.json"),
            ("COFFEE_LOG", "coffee_core=debug"),
        ]));
        assert_eq!(config.shop_name, "Bean There");
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/coffee/menu.json"))
        );
        assert_eq!(config.log_filter, "coffee_core=debug");
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = CounterConfig::from_lookup(lookup(&[("COFFEE_SHOP_NAME", "  ")]));
        assert_eq!(config.shop_name, DEFAULT_SHOP_NAME);
    }

    #[test]
    fn test_default_catalog_is_reference_menu() {
        let catalog = CounterConfig::default().load_catalog().unwrap();
        assert_eq!(catalog, Catalog::reference());
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = CounterConfig {
            catalog_path: Some(PathBuf::from("/definitely/not/here/menu.json")),
            ..CounterConfig::default()
        };
        assert!(matches!(
            config.load_catalog(),
            Err(ConfigError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_catalog_file_is_loaded() {
        let path = std::env::temp_dir().join(format!(
            "coffee-counter-catalog-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"[{ "name": "flat white", "price_cents": 420 }]"#).unwrap();

        let config = CounterConfig {
            catalog_path: Some(path.clone()),
            ..CounterConfig::default()
        };
        let catalog = config.load_catalog();
        std::fs::remove_file(&path).unwrap();

        let catalog = catalog.unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("Flat White").is_some());
    }
}
