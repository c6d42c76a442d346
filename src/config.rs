//! Runtime configuration for the scaffold.
//!
//! The entire configuration surface is one environment variable: `PORT`
//! overrides the listening port, defaulting to 3000 when unset or
//! unparseable.

use std::env;

const DEFAULT_PORT: u16 = 3000;

/// Configuration read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listening port.
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}
