//! Configuration for the todo front-end
//!
//! Loaded from environment variables with defaults for everything.
//!
//! | Variable          | Default | Meaning                          |
//! |-------------------|---------|----------------------------------|
//! | `TODO_LIST_TITLE` | `Today` | Title of the session's list      |
//! | `TODO_OUTPUT`     | `text`  | Format of `show`: `text`, `json` |
//!
//! # Example
//!
//! ```no_run
//! use todo::config::DemoConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DemoConfig::from_env()?;
//! println!("List: {}", config.title);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable holding the list title
pub const TITLE_VAR: &str = "TODO_LIST_TITLE";

/// Environment variable holding the output format
pub const OUTPUT_VAR: &str = "TODO_OUTPUT";

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Invalid output format
    #[error("Invalid output format: {0} (expected \"text\" or \"json\")")]
    InvalidOutput(String),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// How `show` prints the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Header plus one `[X] title` line per item
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidOutput(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Front-end configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Title of the list created for the session
    pub title: String,
    /// Format used by `show`
    pub output: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Today".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if a variable holds an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    ///
    /// # Errors
    ///
    /// Returns error if a variable holds an invalid value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(title) = lookup(TITLE_VAR) {
            config.title = title;
        }
        if let Some(output) = lookup(OUTPUT_VAR) {
            config.output = output.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns error if the title is blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            let reason = format!("{TITLE_VAR} cannot be blank");
            return Err(ConfigError::ValidationError(reason));
        }
        Ok(())
    }
}
