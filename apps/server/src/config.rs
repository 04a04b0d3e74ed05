use std::{net::SocketAddr, time::Duration};

use anyhow::{bail, Context};
use axum::http::HeaderValue;
use moneymapp_core::constants::DEFAULT_MAX_SIMULATION_MONTHS;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub max_simulation_months: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30_000),
            max_simulation_months: DEFAULT_MAX_SIMULATION_MONTHS,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Unset variables
    /// fall back to defaults; malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr = match lookup("MM_LISTEN_ADDR") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid MM_LISTEN_ADDR '{}'", raw))?,
            None => defaults.listen_addr,
        };

        let cors_allow: Vec<String> = match lookup("MM_CORS_ALLOW_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_allow,
        };
        for origin in cors_allow.iter().filter(|o| o.as_str() != "*") {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid origin '{}' in MM_CORS_ALLOW_ORIGINS", origin))?;
        }

        let request_timeout = match lookup("MM_REQUEST_TIMEOUT_MS") {
            Some(raw) => {
                let ms: u64 = raw
                    .parse()
                    .with_context(|| format!("Invalid MM_REQUEST_TIMEOUT_MS '{}'", raw))?;
                Duration::from_millis(ms)
            }
            None => defaults.request_timeout,
        };

        let max_simulation_months = match lookup("MM_MAX_SIMULATION_MONTHS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid MM_MAX_SIMULATION_MONTHS '{}'", raw))?,
            None => defaults.max_simulation_months,
        };
        if max_simulation_months == 0 {
            bail!("MM_MAX_SIMULATION_MONTHS must be greater than zero");
        }

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout,
            max_simulation_months,
        })
    }
}
