//! Access token supply
//!
//! Obtaining and refreshing tokens is the caller's concern; the client only
//! asks a [`TokenProvider`] for the current bearer token before each call.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{ApiError, Result};

/// Source of bearer tokens for Web API calls
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return a currently valid access token
    async fn access_token(&self) -> Result<String>;
}

/// A fixed access token
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Convenience constructor returning a shareable provider
    pub fn shared(token: impl Into<String>) -> Arc<dyn TokenProvider> {
        Arc::new(Self::new(token))
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String> {
        if self.0.is_empty() {
            return Err(ApiError::TokenError("no access token configured".to_string()));
        }
        Ok(self.0.clone())
    }
}
