use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Client configuration loaded from environment variables.
/// Every variable is optional; CLI flags override what is read here.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    /// `None` means requests never time out.
    pub request_timeout: Option<Duration>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("ATS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout = lookup("ATS_REQUEST_TIMEOUT_SECS")
            .map(|raw| {
                raw.parse::<u64>()
                    .context("ATS_REQUEST_TIMEOUT_SECS must be a whole number of seconds")
            })
            .transpose()?
            .map(Duration::from_secs);

        Ok(Config {
            api_url: normalize_base_url(&api_url)?,
            request_timeout,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Applies CLI overrides on top of the environment.
    pub fn with_overrides(mut self, api_url: Option<&str>, timeout_secs: Option<u64>) -> Result<Self> {
        if let Some(url) = api_url {
            self.api_url = normalize_base_url(url)?;
        }
        if let Some(secs) = timeout_secs {
            self.request_timeout = Some(Duration::from_secs(secs));
        }
        Ok(self)
    }
}

/// Trims trailing slashes so endpoint paths can be appended verbatim.
fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        anyhow::bail!("API URL '{raw}' must start with http:// or https://");
    }
    Ok(trimmed.to_string())
}
