use crate::{
    apis::{
        bank_accounts::BankAccount,
        cards::Card,
        payment_methods::{PaymentMethod, PaymentMethodType},
        wallets::Wallet,
    },
    query::{date, list, number, QueryParams},
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Amount of money, in the smallest unit of the currency.
///
/// In USD this is cents, so $12.04 is 1204.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    pub value: i64,
    /// Three letters ISO 4217 currency code.
    pub currency: String,
    /// Precise value, with up to 9 decimals. Only set by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_decimal: Option<String>,
}

impl Amount {
    pub fn new(value: i64, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
            value_decimal: None,
        }
    }

    /// Amount in US cents.
    pub fn usd(value: i64) -> Self {
        Self::new(value, "USD")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Created,
    Pending,
    Completed,
    Failed,
    Reversed,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Created => "created",
            TransferStatus::Pending => "pending",
            TransferStatus::Completed => "completed",
            TransferStatus::Failed => "failed",
            TransferStatus::Reversed => "reversed",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RefundStatus {
    Created,
    Pending,
    Completed,
    Failed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    #[serde(rename = "refundID")]
    pub refund_id: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    pub status: RefundStatus,
    pub amount: Amount,
}

/// Optional body of a refund. Without an amount, the transfer is refunded in full.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct RefundCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

/// Fee charged by the facilitator, either as a total or as a markup.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FacilitatorFee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    #[serde(rename = "transferID")]
    pub transfer_id: String,
    pub created_on: DateTime<Utc>,
    pub status: TransferStatus,
    pub source: PaymentMethod,
    pub destination: PaymentMethod,
    pub amount: Amount,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default)]
    pub refunded_amount: Option<Amount>,
    #[serde(default)]
    pub refunds: Vec<Refund>,
    #[serde(default)]
    pub facilitator_fee: Option<FacilitatorFee>,
    /// Moov fee in US cents.
    #[serde(default)]
    pub moov_fee: Option<i64>,
    #[serde(default)]
    pub moov_fee_decimal: Option<String>,
}

/// Source of a new transfer: a payment method, or an earlier transfer to use its funds.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferCreateSource {
    #[serde(
        rename = "paymentMethodID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_method_id: Option<String>,
    #[serde(rename = "transferID", default, skip_serializing_if = "Option::is_none")]
    pub transfer_id: Option<String>,
}

impl TransferCreateSource {
    pub fn payment_method(payment_method_id: impl Into<String>) -> Self {
        Self {
            payment_method_id: Some(payment_method_id.into()),
            transfer_id: None,
        }
    }

    pub fn transfer(transfer_id: impl Into<String>) -> Self {
        Self {
            payment_method_id: None,
            transfer_id: Some(transfer_id.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TransferCreateDestination {
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: String,
}

impl TransferCreateDestination {
    pub fn payment_method(payment_method_id: impl Into<String>) -> Self {
        Self {
            payment_method_id: payment_method_id.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct TransferCreate {
    pub source: TransferCreateSource,
    pub destination: TransferCreateDestination,
    pub amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub facilitator_fee: Option<FacilitatorFee>,
    /// At most 128 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    #[builder(default)]
    pub metadata: HashMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    #[serde(rename = "transferID")]
    pub transfer_id: String,
}

/// Filters for [`TransfersApi::list`](crate::apis::transfers::TransfersApi::list).
#[derive(Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct TransferListCriteria {
    /// Accounts appearing as source or destination.
    pub account_ids: Vec<String>,
    pub status: Option<TransferStatus>,
    /// Inclusive lower bound of the creation date.
    pub start_date_time: Option<DateTime<Utc>>,
    /// Exclusive upper bound of the creation date.
    pub end_date_time: Option<DateTime<Utc>>,
    pub count: Option<u32>,
    pub skip: Option<u32>,
}

impl QueryParams for TransferListCriteria {
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("accountIDs", list(&self.account_ids)),
            ("status", self.status.map(|s| s.as_str().to_string())),
            ("startDateTime", date(self.start_date_time)),
            ("endDateTime", date(self.end_date_time)),
            ("count", number(self.count)),
            ("skip", number(self.skip)),
        ]
    }
}

/// Either side of a transfer options lookup.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferOptionsTarget {
    #[serde(rename = "accountID", default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(
        rename = "paymentMethodID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_method_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
pub struct TransferOptionsCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub source: Option<TransferOptionsTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub destination: Option<TransferOptionsTarget>,
    pub amount: Amount,
}

/// A payment method which can be used on one side of a transfer.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferOption {
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: String,
    pub payment_method_type: PaymentMethodType,
    #[serde(default)]
    pub wallet: Option<Wallet>,
    #[serde(default)]
    pub bank_account: Option<BankAccount>,
    #[serde(default)]
    pub card: Option<Card>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTransferOptions {
    #[serde(default)]
    pub source_options: Vec<TransferOption>,
    #[serde(default)]
    pub destination_options: Vec<TransferOption>,
}
