//! AI gateway configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::ai::DEFAULT_MODEL;

/// AI gateway configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Key sent to the completion gateway. The relay answers every request
    /// with an error while this is unset.
    pub gateway_api_key: Option<Secret<String>>,

    /// Base URL of the OpenAI-compatible gateway
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model requested for planner completions
    #[serde(default = "default_model")]
    pub model: String,

    /// Connect timeout in seconds; streamed bodies are not time-limited
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl AiConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Check if a non-empty gateway key is configured
    pub fn has_gateway_key(&self) -> bool {
        self.gateway_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Validate AI configuration
    ///
    /// A missing key is allowed; the relay reports it per request.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let url = self.base_url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidGatewayUrl);
        }
        if *environment == Environment::Production && !url.starts_with("https://") {
            return Err(ValidationError::GatewayMustBeHttps);
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AI__MODEL"));
        }
        if self.connect_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gateway_api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://ai.gateway.lovable.dev/v1".to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_connect_timeout() -> u64 {
    10
}
