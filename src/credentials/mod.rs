//! Access-token lookup.
//!
//! The loader asks for the token once per load, synchronously, and never
//! re-reads it while a request is in flight.

use crate::app::{FeedError, Result};
use crate::config::AuthConfig;

/// Environment variable consulted before the config file.
pub const TOKEN_ENV_VAR: &str = "INSTAFEED_ACCESS_TOKEN";

pub trait CredentialStore: Send + Sync {
    fn stored_access_token(&self) -> Result<String>;
}

/// A token fixed at construction, e.g. from `--token`.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    token: String,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl CredentialStore for StaticCredentials {
    fn stored_access_token(&self) -> Result<String> {
        non_empty(Some(&self.token)).ok_or(FeedError::MissingToken)
    }
}

/// Token from the environment, falling back to `[auth] access_token`.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredCredentials {
    env_token: Option<String>,
    config_token: Option<String>,
}

impl ConfiguredCredentials {
    pub fn new(env_token: Option<String>, config_token: Option<String>) -> Self {
        Self {
            env_token,
            config_token,
        }
    }

    pub fn from_env(auth: &AuthConfig) -> Self {
        Self::new(std::env::var(TOKEN_ENV_VAR).ok(), auth.access_token.clone())
    }
}

impl CredentialStore for ConfiguredCredentials {
    fn stored_access_token(&self) -> Result<String> {
        non_empty(self.env_token.as_ref())
            .or_else(|| non_empty(self.config_token.as_ref()))
            .ok_or(FeedError::MissingToken)
    }
}

fn non_empty(token: Option<&String>) -> Option<String> {
    token
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(String::from)
}
