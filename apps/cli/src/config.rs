//! Environment-driven configuration.

use std::path::PathBuf;

use quiz_core::SearchMode;
use thiserror::Error;

pub const DEFAULT_INPUT: &str = "q.txt";
pub const DEFAULT_OUTPUT: &str = "q.csv";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid boolean for {name}: {value}")]
    InvalidBool { name: &'static str, value: String },
}

/// Paths and options shared by the binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Quiz text file read by the converter.
    pub input: PathBuf,
    /// Table written by the converter.
    pub output: PathBuf,
    /// Table used by the question bank tool.
    pub bank: PathBuf,
    pub search_mode: SearchMode,
    /// Colour the question bank session when stdout is a terminal.
    pub color: bool,
}

impl Config {
    /// Load from the process environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = lookup("QUIZ_INPUT").unwrap_or_else(|| DEFAULT_INPUT.to_string());
        let output = lookup("QUIZ_OUTPUT").unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
        let bank = lookup("QUIZ_BANK")
            .map(PathBuf::from)
            .unwrap_or_else(default_bank_path);

        let ignore_case = match lookup("QUIZ_SEARCH_IGNORE_CASE") {
            Some(value) => parse_bool("QUIZ_SEARCH_IGNORE_CASE", &value)?,
            None => false,
        };

        let color = match lookup("QUIZ_COLOR") {
            Some(value) => parse_bool("QUIZ_COLOR", &value)?,
            None => true,
        };

        Ok(Self {
            input: input.into(),
            output: output.into(),
            bank,
            search_mode: if ignore_case {
                SearchMode::CaseInsensitive
            } else {
                SearchMode::Exact
            },
            color,
        })
    }
}

fn default_bank_path() -> PathBuf {
    // Use ~/app/q.csv, fallback to current dir
    dirs::home_dir()
        .map(|home| home.join("app").join(DEFAULT_OUTPUT))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}
