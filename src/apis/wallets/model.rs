use crate::{
    apis::transfers::Amount,
    query::{date, number, text, QueryParams},
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[serde(rename = "walletID")]
    pub wallet_id: String,
    /// Balance of all the completed transactions.
    #[serde(default)]
    pub available_balance: Option<Amount>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum WalletTransactionType {
    AchReversal,
    CardPayment,
    CashOut,
    Dispute,
    DisputeReversal,
    FacilitatorFee,
    IssuingRefund,
    IssuingTransaction,
    IssuingTransactionAdjustment,
    IssuingAuthRelease,
    Payment,
    Payout,
    Refund,
    RefundFailure,
    TopUp,
    WalletTransfer,
}

impl WalletTransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletTransactionType::AchReversal => "ach-reversal",
            WalletTransactionType::CardPayment => "card-payment",
            WalletTransactionType::CashOut => "cash-out",
            WalletTransactionType::Dispute => "dispute",
            WalletTransactionType::DisputeReversal => "dispute-reversal",
            WalletTransactionType::FacilitatorFee => "facilitator-fee",
            WalletTransactionType::IssuingRefund => "issuing-refund",
            WalletTransactionType::IssuingTransaction => "issuing-transaction",
            WalletTransactionType::IssuingTransactionAdjustment => {
                "issuing-transaction-adjustment"
            }
            WalletTransactionType::IssuingAuthRelease => "issuing-auth-release",
            WalletTransactionType::Payment => "payment",
            WalletTransactionType::Payout => "payout",
            WalletTransactionType::Refund => "refund",
            WalletTransactionType::RefundFailure => "refund-failure",
            WalletTransactionType::TopUp => "top-up",
            WalletTransactionType::WalletTransfer => "wallet-transfer",
        }
    }
}

/// Kind of Moov object a wallet transaction originated from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum WalletTransactionSourceType {
    Transfer,
    Dispute,
    IssuingTransaction,
}

impl WalletTransactionSourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletTransactionSourceType::Transfer => "transfer",
            WalletTransactionSourceType::Dispute => "dispute",
            WalletTransactionSourceType::IssuingTransaction => "issuing-transaction",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum WalletTransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl WalletTransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletTransactionStatus::Pending => "pending",
            WalletTransactionStatus::Completed => "completed",
            WalletTransactionStatus::Failed => "failed",
        }
    }
}

/// A movement of funds in or out of a wallet.
///
/// Amounts are in the smallest unit of `currency`.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    #[serde(rename = "walletID")]
    pub wallet_id: String,
    #[serde(rename = "transactionID")]
    pub transaction_id: String,
    pub transaction_type: WalletTransactionType,
    pub source_type: WalletTransactionSourceType,
    /// ID of the transfer, dispute or issuing transaction this transaction is part of.
    #[serde(rename = "sourceID")]
    pub source_id: String,
    pub status: WalletTransactionStatus,
    #[serde(default)]
    pub memo: Option<String>,
    pub created_on: DateTime<Utc>,
    #[serde(default)]
    pub completed_on: Option<DateTime<Utc>>,
    pub currency: String,
    pub gross_amount: i64,
    pub fee: i64,
    /// Gross amount less fees. This is what affects the wallet balance.
    pub net_amount: i64,
    /// Balance of the wallet once this transaction completed.
    #[serde(default)]
    pub available_balance: Option<i64>,
}

/// Filters for [`WalletsApi::list_transactions`](crate::apis::wallets::WalletsApi::list_transactions).
#[derive(Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct WalletTransactionListCriteria {
    pub transaction_type: Option<WalletTransactionType>,
    pub source_type: Option<WalletTransactionSourceType>,
    pub source_id: Option<String>,
    pub status: Option<WalletTransactionStatus>,
    pub created_start_date_time: Option<DateTime<Utc>>,
    pub created_end_date_time: Option<DateTime<Utc>>,
    pub completed_start_date_time: Option<DateTime<Utc>>,
    pub completed_end_date_time: Option<DateTime<Utc>>,
    pub count: Option<u32>,
    pub skip: Option<u32>,
}

impl QueryParams for WalletTransactionListCriteria {
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            (
                "transactionType",
                self.transaction_type.map(|t| t.as_str().to_string()),
            ),
            (
                "sourceType",
                self.source_type.map(|t| t.as_str().to_string()),
            ),
            ("sourceID", text(&self.source_id)),
            ("status", self.status.map(|s| s.as_str().to_string())),
            ("createdStartDateTime", date(self.created_start_date_time)),
            ("createdEndDateTime", date(self.created_end_date_time)),
            (
                "completedStartDateTime",
                date(self.completed_start_date_time),
            ),
            ("completedEndDateTime", date(self.completed_end_date_time)),
            ("count", number(self.count)),
            ("skip", number(self.skip)),
        ]
    }
}
