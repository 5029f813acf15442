use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HolderType {
    Individual,
    Business,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BankAccountType {
    Checking,
    Savings,
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum BankAccountStatus {
    New,
    Verified,
    VerificationFailed,
    Pending,
    Errored,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    #[serde(rename = "bankAccountID")]
    pub bank_account_id: String,
    pub fingerprint: String,
    pub status: BankAccountStatus,
    pub holder_name: String,
    pub holder_type: HolderType,
    #[serde(default)]
    pub bank_name: Option<String>,
    pub bank_account_type: BankAccountType,
    pub routing_number: String,
    pub last_four_account_number: String,
}

/// Bank account details entered manually.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountAdd {
    pub holder_name: String,
    pub holder_type: HolderType,
    /// Nine digits ABA routing number.
    pub routing_number: String,
    pub account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub bank_account_type: Option<BankAccountType>,
}

/// The ways a bank account can be linked to a Moov account.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LinkBankAccount {
    /// Account and routing numbers entered manually.
    Account(BankAccountAdd),
    /// Processor token obtained through Plaid Link.
    Plaid { token: String },
    /// Authorization code obtained through MX.
    Mx {
        #[serde(rename = "authorizationCode")]
        authorization_code: String,
    },
}

