//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present; stdout is never written to, since the MCP
//! transport owns it.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "contacts.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// File used by save/load when no path is given
    pub data_file: PathBuf,

    /// Load `data_file` at startup (default: true)
    pub autoload: bool,

    /// Write indented JSON (default: false)
    pub pretty_json: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: Data file path (default: "contacts.json")
    /// - `CONTACT_BOOK_AUTOLOAD`: Load the data file at startup (default: true)
    /// - `CONTACT_BOOK_PRETTY_JSON`: Indent saved JSON (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let data_file = match env::var("CONTACT_BOOK_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let autoload = Self::parse_env_bool("CONTACT_BOOK_AUTOLOAD", true)?;
        let pretty_json = Self::parse_env_bool("CONTACT_BOOK_PRETTY_JSON", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file,
            autoload,
            pretty_json,
            log_level,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    ///
    /// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, ignoring case.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            autoload: true,
            pretty_json: false,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 4] = [
        "CONTACT_BOOK_FILE",
        "CONTACT_BOOK_AUTOLOAD",
        "CONTACT_BOOK_PRETTY_JSON",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("contacts.json"));
        assert!(config.autoload);
        assert!(!config.pretty_json);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_FILE", "/tmp/book.json");
        guard.set("CONTACT_BOOK_AUTOLOAD", "no");
        guard.set("CONTACT_BOOK_PRETTY_JSON", "TRUE");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/book.json"));
        assert!(!config.autoload);
        assert!(config.pretty_json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_file() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_FILE", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_BOOK_FILE");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_bool() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_AUTOLOAD", "maybe");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, reason }) => {
                assert_eq!(var, "CONTACT_BOOK_AUTOLOAD");
                assert!(reason.contains("maybe"));
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL", "1");

        assert!(Config::parse_env_bool("TEST_BOOL", false).unwrap());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", true).unwrap());
        assert!(!Config::parse_env_bool("NONEXISTENT_BOOL", false).unwrap());
    }
}
