//! Environment-driven configuration.
//!
//! Values come from the process environment; a `.env` file, when present,
//! is merged in by the entry point before anything here runs (existing
//! variables win over file entries). Only the API base URL is mandatory.

use std::env;
use std::fmt;
use std::path::PathBuf;

/// Base URL of the remote joke API. Required.
pub const API_URL_VAR: &str = "JOKES_API_URL";
/// Destination sheet path. Optional.
pub const OUTPUT_FILE_VAR: &str = "JOKES_OUTPUT_FILE";

const DEFAULT_OUTPUT_FILE: &str = "data/jokes.csv";

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => {
                write!(f, "required environment variable {var} is not set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub output_file: PathBuf,
}

/// Read the configuration from the environment.
pub fn load() -> Result<Config, ConfigError> {
    let api_url = env::var(API_URL_VAR).map_err(|_| ConfigError::Missing(API_URL_VAR))?;
    let output_file = env::var(OUTPUT_FILE_VAR)
        .unwrap_or_else(|_| DEFAULT_OUTPUT_FILE.to_string())
        .into();
    Ok(Config { api_url, output_file })
}
