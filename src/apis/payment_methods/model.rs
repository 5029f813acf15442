use crate::apis::{bank_accounts::BankAccount, cards::Card, wallets::Wallet};
use serde::{Deserialize, Serialize};

/// Allowed payment method types.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethodType {
    MoovWallet,
    AchDebitFund,
    AchDebitCollect,
    AchCreditStandard,
    AchCreditSameDay,
    RtpCredit,
    CardPayment,
    ApplePay,
}

/// Account owning a payment method.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodAccount {
    #[serde(rename = "accountID")]
    pub account_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AchStatus {
    Initiated,
    Originated,
    Corrected,
    Returned,
    Completed,
}

/// Nacha return or correction code, for example `R01`.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AchCode {
    pub code: String,
    pub reason: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchDetails {
    pub status: AchStatus,
    pub trace_number: String,
    #[serde(rename = "return", default)]
    pub return_code: Option<AchCode>,
    #[serde(default)]
    pub correction: Option<AchCode>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum MerchantInitiatedType {
    Recurring,
    Unscheduled,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    /// Override of the default card statement descriptor for a single transfer.
    #[serde(default)]
    pub dynamic_descriptor: Option<String>,
    #[serde(default)]
    pub merchant_initiated_type: Option<MerchantInitiatedType>,
}

/// A way to move money, backed by a wallet, a bank account or a card.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: String,
    pub payment_method_type: PaymentMethodType,
    #[serde(default)]
    pub account: Option<PaymentMethodAccount>,
    /// Set when the type is `moov-wallet`.
    #[serde(default)]
    pub wallet: Option<Wallet>,
    /// Set for the ACH and RTP types.
    #[serde(default)]
    pub bank_account: Option<BankAccount>,
    /// Set for the card types.
    #[serde(default)]
    pub card: Option<Card>,
    #[serde(default)]
    pub ach_details: Option<AchDetails>,
    #[serde(default)]
    pub card_details: Option<CardDetails>,
}
