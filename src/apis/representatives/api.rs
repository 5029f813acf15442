use crate::{
    apis::{
        representatives::{Representative, RepresentativeCreateUpdate},
        MoovClientInner,
    },
    error::ValidationError,
    request::MoovRequest,
    resource::{AccountCollection, AccountResource},
    validation::check,
    Error,
};
use async_trait::async_trait;
use std::sync::Arc;

const REPRESENTATIVES: AccountCollection = AccountCollection {
    name: "representatives",
    missing_id: ValidationError::MissingRepresentativeId,
};

/// Moov business representatives APIs client.
#[derive(Clone, Debug)]
pub struct RepresentativesApi {
    inner: Arc<MoovClientInner>,
}

impl RepresentativesApi {
    pub(crate) fn new(inner: Arc<MoovClientInner>) -> Self {
        Self { inner }
    }

    /// Adds a representative to a business account.
    #[tracing::instrument(name = "Create Representative", skip(self, representative))]
    pub async fn create(
        &self,
        account_id: &str,
        representative: &RepresentativeCreateUpdate,
    ) -> Result<Representative, Error> {
        let path = REPRESENTATIVES.collection_path(account_id)?;
        check(&representative.name).or(ValidationError::MissingRepresentativeName)?;

        self.inner
            .fetch(MoovRequest::post(path).json(representative)?)
            .await
    }

    /// Updates some fields of a representative.
    #[tracing::instrument(name = "Update Representative", skip(self, representative))]
    pub async fn update(
        &self,
        account_id: &str,
        representative_id: &str,
        representative: &RepresentativeCreateUpdate,
    ) -> Result<Representative, Error> {
        let path = REPRESENTATIVES.item_path(account_id, representative_id)?;

        self.inner
            .fetch(MoovRequest::patch(path).json(representative)?)
            .await
    }

    /// Removes a representative from a business account.
    #[tracing::instrument(name = "Delete Representative", skip(self))]
    pub async fn delete(&self, account_id: &str, representative_id: &str) -> Result<(), Error> {
        REPRESENTATIVES
            .disable(&self.inner, account_id, representative_id)
            .await
    }
}

#[async_trait]
impl AccountResource for RepresentativesApi {
    type Item = Representative;

    #[tracing::instrument(name = "List Representatives", skip(self))]
    async fn list(&self, account_id: &str) -> Result<Vec<Representative>, Error> {
        REPRESENTATIVES.list(&self.inner, account_id).await
    }

    #[tracing::instrument(name = "Get Representative", skip(self))]
    async fn get(&self, account_id: &str, representative_id: &str) -> Result<Representative, Error> {
        REPRESENTATIVES
            .get(&self.inner, account_id, representative_id)
            .await
    }
}
