use crate::{
    apis::{
        enrichments::{AddressSearchCriteria, AddressSuggestions, EnrichedProfile},
        MoovClientInner,
    },
    common,
    error::ValidationError,
    query::with_query,
    request::MoovRequest,
    validation::{check_id, check_string},
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Moov enrichment APIs client.
#[derive(Clone, Debug)]
pub struct EnrichmentsApi {
    inner: Arc<MoovClientInner>,
}

impl EnrichmentsApi {
    pub(crate) fn new(inner: Arc<MoovClientInner>) -> Self {
        Self { inner }
    }

    /// Downloads the avatar image of an account, card or other Moov object.
    ///
    /// The raw image bytes are returned.
    #[tracing::instrument(name = "Get Avatar", skip(self))]
    pub async fn get_avatar(&self, id: &str) -> Result<Vec<u8>, Error> {
        check_id(id).or(ValidationError::MissingAvatarId)?;

        self.inner
            .fetch_bytes(MoovRequest::get(common::path(&["avatars", id])))
            .await
    }

    /// Suggests complete addresses matching a partial one.
    #[tracing::instrument(name = "Get Address Suggestions", skip(self))]
    pub async fn get_address(
        &self,
        criteria: &AddressSearchCriteria,
    ) -> Result<AddressSuggestions, Error> {
        check_string(criteria.search.as_str()).or(ValidationError::MissingEnrichAddressSearch)?;

        self.inner
            .fetch(MoovRequest::get(with_query(
                "enrichment/address".into(),
                criteria,
            )))
            .await
    }

    /// Looks up public profile details from an email address.
    #[tracing::instrument(name = "Get Enriched Profile", skip(self, email))]
    pub async fn get_profile(&self, email: &str) -> Result<EnrichedProfile, Error> {
        check_string(email).or(ValidationError::MissingEmail)?;

        self.inner
            .fetch(MoovRequest::get(format!(
                "enrichment/profile?email={}",
                encode(email)
            )))
            .await
    }
}
