//! Configuration module
//!
//! Handles environment variables for the CLI launcher. The core engine
//! itself has no configuration surface; this is purely ambient plumbing
//! for `main.rs`/`bin/replay.rs`.

use eyre::Result;
use std::env;

/// CLI-launcher configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to a newline-delimited file of `"BASE-QUOTE"` symbols.
    pub symbols_file: String,

    /// Path to a JSON-lines tick replay file.
    pub ticks_file: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// sample files shipped alongside the binary.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            symbols_file: env::var("SYMBOLS_FILE")
                .unwrap_or_else(|_| "demos/symbols.txt".to_string()),

            ticks_file: env::var("TICKS_FILE")
                .unwrap_or_else(|_| "demos/ticks.jsonl".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbols_file: "demos/symbols.txt".to_string(),
            ticks_file: "demos/ticks.jsonl".to_string(),
        }
    }
}
