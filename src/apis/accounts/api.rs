use crate::{
    apis::{
        accounts::{Account, AccountCreate, AccountListCriteria, AccountUpdate, Countries},
        MoovClientInner,
    },
    common,
    error::ValidationError,
    query::with_query,
    request::MoovRequest,
    validation::check_id,
    Error,
};
use std::sync::Arc;

/// Moov accounts APIs client.
#[derive(Clone, Debug)]
pub struct AccountsApi {
    inner: Arc<MoovClientInner>,
}

impl AccountsApi {
    pub(crate) fn new(inner: Arc<MoovClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new connected account.
    #[tracing::instrument(
        name = "Create Account",
        skip(self, account),
        fields(account_type = account.account_type.as_str())
    )]
    pub async fn create(&self, account: &AccountCreate) -> Result<Account, Error> {
        self.inner
            .fetch(MoovRequest::post("accounts").json(account)?)
            .await
    }

    /// Lists the accounts connected to the facilitator account, filtered by `criteria`.
    #[tracing::instrument(name = "List Accounts", skip(self))]
    pub async fn list(&self, criteria: &AccountListCriteria) -> Result<Vec<Account>, Error> {
        self.inner
            .fetch(MoovRequest::get(with_query("accounts".into(), criteria)))
            .await
    }

    /// Gets the details of an existing account.
    #[tracing::instrument(name = "Get Account", skip(self))]
    pub async fn get(&self, account_id: &str) -> Result<Account, Error> {
        let path = account_path(account_id)?;

        self.inner.fetch(MoovRequest::get(path)).await
    }

    /// Updates an existing account. Only the fields set in `update` are changed.
    #[tracing::instrument(name = "Update Account", skip(self, update))]
    pub async fn update(&self, account_id: &str, update: &AccountUpdate) -> Result<Account, Error> {
        let path = account_path(account_id)?;

        self.inner
            .fetch(MoovRequest::patch(path).json(update)?)
            .await
    }

    /// Gets the countries of operation of an account.
    #[tracing::instrument(name = "Get Account Countries", skip(self))]
    pub async fn get_countries(&self, account_id: &str) -> Result<Countries, Error> {
        let path = format!("{}/countries", account_path(account_id)?);

        self.inner.fetch(MoovRequest::get(path)).await
    }

    /// Assigns the countries of operation of an account.
    ///
    /// Previously assigned countries are always overwritten.
    #[tracing::instrument(name = "Assign Account Countries", skip(self))]
    pub async fn assign_countries(
        &self,
        account_id: &str,
        countries: &[String],
    ) -> Result<Countries, Error> {
        let path = format!("{}/countries", account_path(account_id)?);

        self.inner
            .fetch(MoovRequest::put(path).json(countries)?)
            .await
    }
}

fn account_path(account_id: &str) -> Result<String, Error> {
    check_id(account_id).or(ValidationError::MissingAccountId)?;

    Ok(common::path(&["accounts", account_id]))
}
