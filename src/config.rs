//! Run configuration.
//!
//! Paths come from the CLI; the remote site settings come from the environment
//! (a `.env` file is honored), since they rarely change between runs.

use std::path::PathBuf;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://tradingeconomics.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "TE_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "TE_TIMEOUT_SECS";

/// Where and how to reach the indicators site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RemoteConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BASE_URL)
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(v) if v > 0 => v,
                _ => {
                    return Err(AppError::input(format!(
                        "Invalid {ENV_TIMEOUT_SECS} '{raw}': expected a positive number of seconds."
                    )));
                }
            },
        };

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }
}

/// Everything a run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub countries_path: PathBuf,
    pub out_compact: PathBuf,
    pub out_full: PathBuf,
    pub remote: RemoteConfig,
}
