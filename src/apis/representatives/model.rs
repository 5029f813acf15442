use crate::apis::accounts::{Address, Name, Phone};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Role of a representative in the business.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(default)]
pub struct Responsibilities {
    pub is_controller: bool,
    pub is_owner: bool,
    /// Whole percentage, required when `is_owner` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_percentage: Option<u8>,
    pub job_title: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Representative {
    #[serde(rename = "representativeID")]
    pub representative_id: String,
    pub name: Name,
    #[serde(default)]
    pub phone: Option<Phone>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub birth_date_provided: bool,
    #[serde(rename = "governmentIDProvided", default)]
    pub government_id_provided: bool,
    #[serde(default)]
    pub responsibilities: Option<Responsibilities>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    #[serde(default)]
    pub disabled_on: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BirthDate {
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

/// Full number, or only its last four digits.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxIdNumber {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_four: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct GovernmentId {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssn: Option<TaxIdNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itin: Option<TaxIdNumber>,
}

/// Body used to create a representative, or to update some of its fields.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(default)]
pub struct RepresentativeCreateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<BirthDate>,
    #[serde(rename = "governmentID", skip_serializing_if = "Option::is_none")]
    pub government_id: Option<GovernmentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Responsibilities>,
}
