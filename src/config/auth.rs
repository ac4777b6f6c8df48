//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::auth::StaticTokenValidator;

/// Authentication configuration
///
/// Bearer tokens are configured as `token=user_id` pairs separated by commas.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    pub api_tokens: Option<Secret<String>>,
}

impl AuthConfig {
    /// Builds the token validator; an unset list yields one that rejects everything.
    pub fn token_validator(&self) -> Result<StaticTokenValidator, ValidationError> {
        let spec = self
            .api_tokens
            .as_ref()
            .map(|s| s.expose_secret().as_str())
            .unwrap_or("");
        StaticTokenValidator::parse(spec)
            .map_err(|e| ValidationError::InvalidApiTokens(e.to_string()))
    }

    /// Validate authentication configuration
    ///
    /// Production requires at least one token.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let validator = self.token_validator()?;
        if *environment == Environment::Production && validator.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__API_TOKENS"));
        }
        Ok(())
    }
}
