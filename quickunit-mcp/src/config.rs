//! Server configuration from the environment

use std::env;
use quickunit_units::{ConversionTable, QUICK, table_by_name};

/// Runtime settings, read once at startup
pub struct Config {
    /// tracing filter directive (QUICKUNIT_LOG, then RUST_LOG)
    pub log_filter: String,
    /// Table used by list_conversions when none is named
    pub default_table: &'static ConversionTable,
    /// Problems found while reading the environment, logged after startup
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: "info".to_string(),
            default_table: &*QUICK,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(filter) = get("QUICKUNIT_LOG").or_else(|| get("RUST_LOG")) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        if let Some(name) = get("QUICKUNIT_DEFAULT_TABLE") {
            match table_by_name(name.trim()) {
                Some(table) => config.default_table = table,
                None => config.warnings.push(format!(
                    "QUICKUNIT_DEFAULT_TABLE={:?} is not a table (quick, mini); using quick",
                    name
                )),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.default_table.name(), "quick");
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_log_filter_precedence() {
        let config = config_from(&[("RUST_LOG", "warn")]);
        assert_eq!(config.log_filter, "warn");

        let config = config_from(&[("RUST_LOG", "warn"), ("QUICKUNIT_LOG", "debug")]);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_default_table() {
        let config = config_from(&[("QUICKUNIT_DEFAULT_TABLE", "mini")]);
        assert_eq!(config.default_table.name(), "mini");

        let config = config_from(&[("QUICKUNIT_DEFAULT_TABLE", "full")]);
        assert_eq!(config.default_table.name(), "quick");
        assert_eq!(config.warnings.len(), 1);
    }
}
