//! Operations shared by the resource groups nested under a Moov account.
//!
//! Cards, bank accounts, capabilities, wallets, representatives and payment methods are all
//! addressed as `accounts/{account_id}/{collection}/{id}`. These traits give them one contract,
//! so the same code can list or fetch any of them.
//!
//! ```rust,no_run
//! # use moov_rust::{MoovClient, Error, AccountResource};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let moov: MoovClient = unreachable!();
//! let cards = moov.cards.list("some-account-id").await?;
//! let wallets = moov.wallets.list("some-account-id").await?;
//! # Ok(())
//! # }
//! ```

use crate::{
    apis::MoovClientInner,
    common,
    error::ValidationError,
    request::MoovRequest,
    validation::check_id,
    Error,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// A collection of items owned by a Moov account.
#[async_trait]
pub trait AccountResource {
    type Item: Send;

    /// Lists all the items associated with the given account.
    async fn list(&self, account_id: &str) -> Result<Vec<Self::Item>, Error>;

    /// Retrieves a single item of the given account.
    async fn get(&self, account_id: &str, id: &str) -> Result<Self::Item, Error>;
}

/// A collection of items which can be disabled (or removed) from an account.
#[async_trait]
pub trait DisableResource: AccountResource {
    /// Disables the item with the given ID.
    async fn disable(&self, account_id: &str, id: &str) -> Result<(), Error>;
}

/// Path and validation rules of an [`AccountResource`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct AccountCollection {
    /// Path segment under `accounts/{account_id}/`.
    pub(crate) name: &'static str,
    /// Error reported when the item ID is missing.
    pub(crate) missing_id: ValidationError,
}

impl AccountCollection {
    pub(crate) fn collection_path(&self, account_id: &str) -> Result<String, Error> {
        check_id(account_id).or(ValidationError::MissingAccountId)?;

        Ok(format!(
            "{}/{}",
            common::path(&["accounts", account_id]),
            self.name
        ))
    }

    pub(crate) fn item_path(&self, account_id: &str, id: &str) -> Result<String, Error> {
        let collection = self.collection_path(account_id)?;
        check_id(id).or(self.missing_id)?;

        Ok(format!("{}/{}", collection, common::path(&[id])))
    }

    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        inner: &MoovClientInner,
        account_id: &str,
    ) -> Result<Vec<T>, Error> {
        let path = self.collection_path(account_id)?;

        inner.fetch(MoovRequest::get(path)).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        inner: &MoovClientInner,
        account_id: &str,
        id: &str,
    ) -> Result<T, Error> {
        let path = self.item_path(account_id, id)?;

        inner.fetch(MoovRequest::get(path)).await
    }

    pub(crate) async fn disable(
        &self,
        inner: &MoovClientInner,
        account_id: &str,
        id: &str,
    ) -> Result<(), Error> {
        let path = self.item_path(account_id, id)?;

        inner.fetch_empty(MoovRequest::delete(path)).await
    }
}
