use crate::{
    apis::{
        wallets::{Wallet, WalletTransaction, WalletTransactionListCriteria},
        MoovClientInner,
    },
    common,
    error::ValidationError,
    query::with_query,
    request::MoovRequest,
    resource::{AccountCollection, AccountResource},
    validation::check_id,
    Error,
};
use async_trait::async_trait;
use std::sync::Arc;

const WALLETS: AccountCollection = AccountCollection {
    name: "wallets",
    missing_id: ValidationError::MissingWalletId,
};

/// Moov wallets APIs client.
#[derive(Clone, Debug)]
pub struct WalletsApi {
    inner: Arc<MoovClientInner>,
}

impl WalletsApi {
    pub(crate) fn new(inner: Arc<MoovClientInner>) -> Self {
        Self { inner }
    }

    /// Gets the details of a wallet transaction.
    #[tracing::instrument(name = "Get Wallet Transaction", skip(self))]
    pub async fn get_transaction(
        &self,
        account_id: &str,
        wallet_id: &str,
        transaction_id: &str,
    ) -> Result<WalletTransaction, Error> {
        let transactions = transactions_path(account_id, wallet_id)?;
        check_id(transaction_id).or(ValidationError::MissingWalletTransactionId)?;

        self.inner
            .fetch(MoovRequest::get(format!(
                "{}/{}",
                transactions,
                common::path(&[transaction_id])
            )))
            .await
    }

    /// Lists the transactions of a wallet, filtered by `criteria`.
    #[tracing::instrument(name = "List Wallet Transactions", skip(self))]
    pub async fn list_transactions(
        &self,
        account_id: &str,
        wallet_id: &str,
        criteria: &WalletTransactionListCriteria,
    ) -> Result<Vec<WalletTransaction>, Error> {
        let path = transactions_path(account_id, wallet_id)?;

        self.inner
            .fetch(MoovRequest::get(with_query(path, criteria)))
            .await
    }
}

#[async_trait]
impl AccountResource for WalletsApi {
    type Item = Wallet;

    #[tracing::instrument(name = "List Wallets", skip(self))]
    async fn list(&self, account_id: &str) -> Result<Vec<Wallet>, Error> {
        WALLETS.list(&self.inner, account_id).await
    }

    #[tracing::instrument(name = "Get Wallet", skip(self))]
    async fn get(&self, account_id: &str, wallet_id: &str) -> Result<Wallet, Error> {
        WALLETS.get(&self.inner, account_id, wallet_id).await
    }
}

fn transactions_path(account_id: &str, wallet_id: &str) -> Result<String, Error> {
    Ok(format!(
        "{}/transactions",
        WALLETS.item_path(account_id, wallet_id)?
    ))
}
