use crate::client::ApiClient;
use crate::config::{Target, get_target};
use crate::error::{VolumesError, VolumesResult};
use std::sync::Arc;

/// Central context for CLI operations, managing the target and client instances
pub struct CliContext {
    target: Target,
    client: Option<Arc<ApiClient>>,
}

impl CliContext {
    /// Load context from saved configuration and the environment
    pub fn load() -> VolumesResult<Self> {
        Ok(Self::with_target(get_target()?))
    }

    pub fn with_target(target: Target) -> Self {
        Self { target, client: None }
    }

    /// The team queried when no team is named explicitly
    pub fn team(&self) -> &str {
        &self.target.team
    }

    /// Get or create a client for a validated target (requires an API URL and token)
    pub fn verified_client(&mut self) -> VolumesResult<Arc<ApiClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let api_url = self.target.validate()?;
        if !self.has_token() {
            return Err(VolumesError::TokenNotFound);
        }
        let client = Arc::new(ApiClient::new(api_url, self.target.token.as_deref())?);
        self.client = Some(client.clone());
        Ok(client)
    }

    pub fn has_token(&self) -> bool {
        self.target.token.as_deref().is_some_and(|token| !token.is_empty())
    }
}
