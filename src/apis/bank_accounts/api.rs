use crate::{
    apis::{
        bank_accounts::{BankAccount, LinkBankAccount},
        MoovClientInner,
    },
    error::ValidationError,
    request::MoovRequest,
    resource::{AccountCollection, AccountResource, DisableResource},
    validation::{check, check_string},
    Error,
};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

const BANK_ACCOUNTS: AccountCollection = AccountCollection {
    name: "bank-accounts",
    missing_id: ValidationError::MissingBankAccountId,
};

/// Moov bank accounts APIs client.
#[derive(Clone, Debug)]
pub struct BankAccountsApi {
    inner: Arc<MoovClientInner>,
}

impl BankAccountsApi {
    pub(crate) fn new(inner: Arc<MoovClientInner>) -> Self {
        Self { inner }
    }

    /// Links a bank account to a Moov account.
    ///
    /// Manually entered details must include an account number, a 9 characters
    /// routing number and the holder name.
    #[tracing::instrument(name = "Link Bank Account", skip(self, bank_account))]
    pub async fn link(
        &self,
        account_id: &str,
        bank_account: &LinkBankAccount,
    ) -> Result<BankAccount, Error> {
        let path = BANK_ACCOUNTS.collection_path(account_id)?;
        validate_link(bank_account)?;

        self.inner
            .fetch(MoovRequest::post(path).json(bank_account)?)
            .await
    }

    /// Sends two small credits to the bank account, to be confirmed with
    /// [`complete_micro_deposits`](Self::complete_micro_deposits).
    #[tracing::instrument(name = "Init Micro Deposits", skip(self))]
    pub async fn init_micro_deposits(
        &self,
        account_id: &str,
        bank_account_id: &str,
    ) -> Result<(), Error> {
        let path = format!(
            "{}/micro-deposits",
            BANK_ACCOUNTS.item_path(account_id, bank_account_id)?
        );

        self.inner.fetch_empty(MoovRequest::post(path)).await
    }

    /// Verifies the bank account with the amounts of the two micro-deposits, in cents.
    #[tracing::instrument(name = "Complete Micro Deposits", skip(self, amounts))]
    pub async fn complete_micro_deposits(
        &self,
        account_id: &str,
        bank_account_id: &str,
        amounts: &[u64],
    ) -> Result<(), Error> {
        let path = format!(
            "{}/micro-deposits",
            BANK_ACCOUNTS.item_path(account_id, bank_account_id)?
        );
        check(amounts).or(ValidationError::MissingAmounts)?;

        self.inner
            .fetch_empty(MoovRequest::put(path).json(&json!({ "amounts": amounts }))?)
            .await
    }
}

#[async_trait]
impl AccountResource for BankAccountsApi {
    type Item = BankAccount;

    #[tracing::instrument(name = "List Bank Accounts", skip(self))]
    async fn list(&self, account_id: &str) -> Result<Vec<BankAccount>, Error> {
        BANK_ACCOUNTS.list(&self.inner, account_id).await
    }

    #[tracing::instrument(name = "Get Bank Account", skip(self))]
    async fn get(&self, account_id: &str, bank_account_id: &str) -> Result<BankAccount, Error> {
        BANK_ACCOUNTS
            .get(&self.inner, account_id, bank_account_id)
            .await
    }
}

#[async_trait]
impl DisableResource for BankAccountsApi {
    #[tracing::instrument(name = "Disable Bank Account", skip(self))]
    async fn disable(&self, account_id: &str, bank_account_id: &str) -> Result<(), Error> {
        BANK_ACCOUNTS
            .disable(&self.inner, account_id, bank_account_id)
            .await
    }
}

fn validate_link(bank_account: &LinkBankAccount) -> Result<(), ValidationError> {
    match bank_account {
        LinkBankAccount::Account(account) => {
            check_string(account.account_number.as_str())
                .or(ValidationError::MissingBankAccountNumber)?;
            check_string(account.routing_number.as_str())
                .or(ValidationError::MissingBankAccountRoutingNumber)?;
            if account.routing_number.chars().count() != 9 {
                return Err(ValidationError::InvalidBankAccountRoutingNumberLength);
            }
            check_string(account.holder_name.as_str())
                .or(ValidationError::MissingBankAccountHolderName)
        }
        LinkBankAccount::Plaid { token } => {
            check_string(token.as_str()).or(ValidationError::MissingBankPayload)
        }
        LinkBankAccount::Mx { authorization_code } => {
            check_string(authorization_code.as_str()).or(ValidationError::MissingBankPayload)
        }
    }
}
