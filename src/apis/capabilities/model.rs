use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Features which can be enabled on a Moov account.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CapabilityId {
    #[serde(rename = "transfers")]
    Transfers,
    #[serde(rename = "send-funds")]
    SendFunds,
    #[serde(rename = "collect-funds")]
    CollectFunds,
    #[serde(rename = "wallet")]
    Wallet,
    #[serde(rename = "1099")]
    Form1099,
}

impl CapabilityId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityId::Transfers => "transfers",
            CapabilityId::SendFunds => "send-funds",
            CapabilityId::CollectFunds => "collect-funds",
            CapabilityId::Wallet => "wallet",
            CapabilityId::Form1099 => "1099",
        }
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityStatus {
    Enabled,
    Disabled,
    Pending,
    InReview,
}

/// Information still needed before the capability can be enabled.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityRequirements {
    #[serde(default)]
    pub currently_due: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    pub capability: CapabilityId,
    #[serde(rename = "accountID")]
    pub account_id: String,
    pub status: CapabilityStatus,
    #[serde(default)]
    pub requirements: Option<CapabilityRequirements>,
    #[serde(default)]
    pub disabled_reason: Option<String>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
}
