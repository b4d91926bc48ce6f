use std::{env, fmt::Display, str::FromStr};

use anyhow::{Context, Result};
use tracing::{info, warn};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CORS_MAX_AGE_SECS: u64 = 60 * 60;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cors_max_age_secs: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            host: try_load("RUST_HOST", DEFAULT_HOST.to_string())?,
            port: try_load("RUST_PORT", DEFAULT_PORT)?,
            cors_max_age_secs: try_load("CORS_MAX_AGE", DEFAULT_CORS_MAX_AGE_SECS)?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_max_age_secs: DEFAULT_CORS_MAX_AGE_SECS,
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .map_err(|_| {
            warn!("Environment variable {key} not found, using default");
        })
        .ok()
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> Result<T>
where
    T::Err: Display,
{
    let Some(value) = var(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };

    value
        .parse()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value: {value}"))
}
