use crate::{
    apis::{
        capabilities::{Capability, CapabilityId},
        MoovClientInner,
    },
    error::ValidationError,
    request::MoovRequest,
    resource::{AccountCollection, AccountResource, DisableResource},
    validation::check,
    Error,
};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

const CAPABILITIES: AccountCollection = AccountCollection {
    name: "capabilities",
    missing_id: ValidationError::MissingCapability,
};

/// Moov capabilities APIs client.
///
/// Capabilities are identified by their name, see [`CapabilityId::as_str`].
#[derive(Clone, Debug)]
pub struct CapabilitiesApi {
    inner: Arc<MoovClientInner>,
}

impl CapabilitiesApi {
    pub(crate) fn new(inner: Arc<MoovClientInner>) -> Self {
        Self { inner }
    }

    /// Requests new capabilities for an account.
    #[tracing::instrument(name = "Request Capabilities", skip(self))]
    pub async fn request(
        &self,
        account_id: &str,
        capabilities: &[CapabilityId],
    ) -> Result<Vec<Capability>, Error> {
        let path = CAPABILITIES.collection_path(account_id)?;
        check(capabilities).or(ValidationError::MissingCapabilities)?;

        self.inner
            .fetch(MoovRequest::post(path).json(&json!({ "capabilities": capabilities }))?)
            .await
    }
}

#[async_trait]
impl AccountResource for CapabilitiesApi {
    type Item = Capability;

    #[tracing::instrument(name = "List Capabilities", skip(self))]
    async fn list(&self, account_id: &str) -> Result<Vec<Capability>, Error> {
        CAPABILITIES.list(&self.inner, account_id).await
    }

    #[tracing::instrument(name = "Get Capability", skip(self))]
    async fn get(&self, account_id: &str, capability: &str) -> Result<Capability, Error> {
        CAPABILITIES.get(&self.inner, account_id, capability).await
    }
}

#[async_trait]
impl DisableResource for CapabilitiesApi {
    #[tracing::instrument(name = "Disable Capability", skip(self))]
    async fn disable(&self, account_id: &str, capability: &str) -> Result<(), Error> {
        CAPABILITIES.disable(&self.inner, account_id, capability).await
    }
}
