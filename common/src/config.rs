use std::env;

use thiserror::Error;

/// Environment variable consulted when `--url` is not given.
pub const URL_VAR: &str = "RSPACE_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no server URL given; pass --url or set {URL_VAR}")]
    MissingUrl,
    #[error("server URL '{0}' is not an http(s) URL")]
    InvalidUrl(String),
}

/// Resolved run configuration, shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ELN server, without a trailing slash.
    pub base_url: String,
    /// Output reduction level. 1 drops headers, 2 drops per-item detail.
    pub quiet: u8,
    /// Suppresses the startup banner.
    pub no_banner: bool,
}

impl Config {
    /// Resolves the configuration from CLI flags and the environment.
    ///
    /// The server URL comes from `--url` when given, otherwise from the
    /// `RSPACE_URL` environment variable.
    pub fn resolve(url_flag: Option<String>, quiet: u8, no_banner: bool) -> Result<Self, ConfigError> {
        let raw = match url_flag {
            Some(url) => url,
            None => env::var(URL_VAR).ok().filter(|v| !v.trim().is_empty()).ok_or(ConfigError::MissingUrl)?,
        };

        Ok(Self {
            base_url: normalize_url(&raw)?,
            quiet,
            no_banner,
        })
    }
}

/// Strips trailing slashes so endpoint paths can be appended uniformly.
fn normalize_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(ConfigError::InvalidUrl(trimmed.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
