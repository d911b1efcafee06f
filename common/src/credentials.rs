//! # API Key Resolution
//!
//! The ELN authenticates every request with a per-user API key. The key is
//! equivalent to a password, so it is normally kept out of command lines and
//! source text and read from the `RSPACE_API_KEY` environment variable
//! instead.
//!
//! [`ApiKey`] wraps the secret so it cannot leak through `Debug` or
//! `Display` formatting. The raw value is only reachable through
//! [`ApiKey::as_str`], which the HTTP client uses to build the auth header.

use std::env;
use std::fmt;

use thiserror::Error;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "RSPACE_API_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("no API key given; set {API_KEY_VAR} in your environment")]
    Missing,
    #[error("{0} is set but blank")]
    Blank(String),
}

/// A bearer credential for the ELN server.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps an explicitly supplied key, rejecting blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, CredentialError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(CredentialError::Missing);
        }
        Ok(Self(raw.trim().to_string()))
    }

    /// Reads the key from `RSPACE_API_KEY`.
    ///
    /// Returns `Ok(None)` when the variable is not set at all; a variable
    /// that is set but blank is a configuration error rather than absence.
    pub fn from_env() -> Result<Option<Self>, CredentialError> {
        Self::from_env_var(API_KEY_VAR)
    }

    fn from_env_var(name: &str) -> Result<Option<Self>, CredentialError> {
        match env::var(name) {
            Ok(value) if value.trim().is_empty() => Err(CredentialError::Blank(name.to_string())),
            Ok(value) => Ok(Some(Self(value.trim().to_string()))),
            Err(_) => Ok(None),
        }
    }

    /// Resolves the key from an optional CLI flag, falling back to the
    /// environment. The flag wins when both are present.
    pub fn resolve(flag: Option<String>) -> Result<Self, CredentialError> {
        match flag {
            Some(value) => Self::new(value),
            None => Self::from_env()?.ok_or(CredentialError::Missing),
        }
    }

    /// The raw secret. Only the HTTP client should call this.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("apiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("apiKey(***)")
    }
}
