//! Configuration module for the gradebook CLI

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Gradebook record file (JSON). Relative paths resolve against the
    /// working directory.
    #[serde(default)]
    pub gradebook_file: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
///
/// Applied on top of the loaded configuration for the current run only;
/// the persistent config file is not modified.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override gradebook record file
    pub gradebook_file: Option<String>,
}

impl Config {
    /// Get the `$GRADEBOOK` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gradebook`
    /// - macOS: `~/Library/Application Support/gradebook`
    /// - Windows: `%APPDATA%\gradebook`
    #[must_use]
    pub fn get_gradebook_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradebook")
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside the directory returned by [`get_gradebook_dir`].
    ///
    /// [`get_gradebook_dir`]: Self::get_gradebook_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gradebook_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading so that fields added in newer versions are
    /// populated with their default values. Only fields that are empty in
    /// the current config and non-empty in defaults are updated.
    ///
    /// # Returns
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }
        if self.paths.gradebook_file.is_empty() && !defaults.paths.gradebook_file.is_empty() {
            self.paths
                .gradebook_file
                .clone_from(&defaults.paths.gradebook_file);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values in the overrides struct replace config
    /// values; the config file on disk is untouched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(gradebook_file) = &overrides.gradebook_file {
            self.paths.gradebook_file.clone_from(gradebook_file);
        }
    }

    /// Expand `$GRADEBOOK` in a string to the gradebook config directory
    /// path, allowing config values to reference it dynamically.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$GRADEBOOK") {
            let gradebook_dir = Self::get_gradebook_dir();
            value.replace("$GRADEBOOK", gradebook_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$GRADEBOOK`
    /// variables in the values. Missing fields use their serde defaults.
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.gradebook_file = Self::expand_variables(&config.paths.gradebook_file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen in practice since the defaults are compiled
    /// into the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - Config file exists: load it, merge missing fields from defaults,
    ///   save back when the merge changed anything.
    /// - First run: create the config directory and save the defaults.
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the platform config file, creating the
    /// directory when needed.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `gradebook_file`.
    ///
    /// # Returns
    /// `Some(String)` with the value, or `None` for an unknown key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "gradebook_file" | "gradebook-file" => Some(self.paths.gradebook_file.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to
    /// persist the change.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot
    /// be parsed (e.g., a non-boolean for `verbose`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "gradebook_file" | "gradebook-file" => {
                self.paths.gradebook_file = value.to_string();
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its default)
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to
    /// persist the change.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "gradebook_file" | "gradebook-file" => self
                .paths
                .gradebook_file
                .clone_from(&defaults.paths.gradebook_file),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file;
    /// the next [`load()`](Config::load) recreates it from defaults.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  gradebook_file = \"{}\"", self.paths.gradebook_file)?;

        Ok(())
    }
}
