use crate::{
    apis::{
        institutions::{InstitutionSearchCriteria, InstitutionSearchResult, Rail},
        MoovClientInner,
    },
    error::ValidationError,
    query::with_query,
    request::MoovRequest,
    validation::check_string,
    Error,
};
use std::sync::Arc;

/// Moov financial institutions APIs client.
#[derive(Clone, Debug)]
pub struct InstitutionsApi {
    inner: Arc<MoovClientInner>,
}

impl InstitutionsApi {
    pub(crate) fn new(inner: Arc<MoovClientInner>) -> Self {
        Self { inner }
    }

    /// Searches the financial institutions participating in the given rail,
    /// by name or routing number.
    #[tracing::instrument(name = "Search Institutions", skip(self), fields(rail = rail.as_str()))]
    pub async fn search(
        &self,
        rail: Rail,
        criteria: &InstitutionSearchCriteria,
    ) -> Result<InstitutionSearchResult, Error> {
        if !check_string(criteria.name.as_deref()).passed()
            && !check_string(criteria.routing_number.as_deref()).passed()
        {
            return Err(ValidationError::MissingInstitutionNameOrRouting.into());
        }

        let path = format!("institutions/{}/search", rail.as_str());

        self.inner
            .fetch(MoovRequest::get(with_query(path, criteria)))
            .await
    }

    /// Searches the financial institutions reachable over ACH.
    pub async fn search_ach(
        &self,
        criteria: &InstitutionSearchCriteria,
    ) -> Result<InstitutionSearchResult, Error> {
        self.search(Rail::Ach, criteria).await
    }

    /// Searches the financial institutions reachable over Fedwire.
    pub async fn search_wire(
        &self,
        criteria: &InstitutionSearchCriteria,
    ) -> Result<InstitutionSearchResult, Error> {
        self.search(Rail::Wire, criteria).await
    }
}
