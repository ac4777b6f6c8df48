//! Session validator backed by statically configured API tokens.
//!
//! Tokens are configured as comma-separated `token=user_id` pairs. Every
//! configured token is compared in constant time, so lookup time does not
//! depend on which token (if any) matched.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId, ValidationError};
use crate::ports::SessionValidator;

pub struct StaticTokenValidator {
    entries: Vec<(Secret<String>, UserId)>,
}

impl StaticTokenValidator {
    pub fn new(entries: Vec<(Secret<String>, UserId)>) -> Self {
        Self { entries }
    }

    /// Parses `token=user_id[,token=user_id...]`. Blank input yields no tokens.
    pub fn parse(spec: &str) -> Result<Self, ValidationError> {
        let mut entries = Vec::new();
        for pair in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (token, user_id) = pair.split_once('=').ok_or_else(|| {
                ValidationError::invalid_format("api_tokens", "expected token=user_id")
            })?;
            let token = token.trim();
            if token.is_empty() {
                return Err(ValidationError::empty_field("api_tokens"));
            }
            entries.push((Secret::new(token.to_string()), UserId::new(user_id.trim())?));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl SessionValidator for StaticTokenValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let presented = token.as_bytes();
        let mut matched: Option<&UserId> = None;

        for (candidate, user_id) in &self.entries {
            let equal: bool = candidate
                .expose_secret()
                .as_bytes()
                .ct_eq(presented)
                .into();
            if equal && matched.is_none() {
                matched = Some(user_id);
            }
        }

        matched
            .map(|id| AuthenticatedUser::new(id.clone(), None))
            .ok_or(AuthError::InvalidToken)
    }
}
