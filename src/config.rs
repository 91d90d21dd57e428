use std::{env, fmt::Display, str::FromStr};

use tracing::warn;

/// Runtime configuration, read from the environment with logged
/// defaults. Nothing here is secret.
pub struct Config {
    /// Full URL of the property listing endpoint
    pub api_base: String,
    /// Page size used when the query string does not pick one
    pub default_limit: u32,
    /// HTTP client timeout
    pub timeout_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_base: load_or("ARRIENDA_API_BASE", "http://localhost:3000/api/properties"),
            default_limit: load_or("ARRIENDA_PAGE_SIZE", "12"),
            timeout_secs: load_or("ARRIENDA_TIMEOUT_SECS", "30"),
        }
    }
}

fn load_or<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, falling back to {default}");
        default.parse().ok().expect("default config value must parse")
    })
}
