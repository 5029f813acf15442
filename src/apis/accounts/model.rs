use crate::query::{number, text, QueryParams};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Individual,
    Business,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Individual => "individual",
            AccountType::Business => "business",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(default)]
pub struct Address {
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub state_or_province: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(default)]
pub struct Name {
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndustryCodes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcc: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum BusinessType {
    SoleProprietorship,
    UnincorporatedAssociation,
    Trust,
    PublicCorporation,
    PrivateCorporation,
    Llc,
    Partnership,
    UnincorporatedNonProfit,
    IncorporatedNonProfit,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub legal_business_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doing_business_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<BusinessType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "taxIDProvided",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tax_id_provided: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owners_provided: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_codes: Option<IndustryCodes>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndividualProfile {
    pub name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date_provided: Option<bool>,
    #[serde(
        rename = "governmentIDProvided",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub government_id_provided: Option<bool>,
}

/// Details of an individual or a business. Only one of the two is set.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual: Option<IndividualProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business: Option<BusinessProfile>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Unverified,
    Pending,
    Resubmit,
    Review,
    Verified,
    Failed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountVerification {
    pub verification_status: VerificationStatus,
}

/// Displayed on credit card transactions (business accounts only).
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSupport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardPaymentSettings {
    pub statement_descriptor: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_payment: Option<CardPaymentSettings>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TermsOfService {
    pub accepted_date: DateTime<Utc>,
    #[serde(rename = "acceptedIP")]
    pub accepted_ip: String,
}

/// Encrypted token recording the acceptance of Moov's terms of service.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TermsOfServiceToken {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "accountID")]
    pub account_id: String,
    pub account_type: AccountType,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(rename = "foreignID", default)]
    pub foreign_id: Option<String>,
    #[serde(default)]
    pub verification: Option<AccountVerification>,
    #[serde(default)]
    pub customer_support: Option<CustomerSupport>,
    #[serde(default)]
    pub settings: Option<AccountSettings>,
    #[serde(default)]
    pub terms_of_service: Option<TermsOfService>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreate {
    pub account_type: AccountType,
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    #[builder(default)]
    pub metadata: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub terms_of_service: Option<TermsOfServiceToken>,
    #[serde(rename = "foreignID", skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub foreign_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub customer_support: Option<CustomerSupport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub settings: Option<AccountSettings>,
}

/// Partial update of an account. Fields left to `None` are not changed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(default)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<TermsOfServiceToken>,
    #[serde(rename = "foreignID", skip_serializing_if = "Option::is_none")]
    pub foreign_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_support: Option<CustomerSupport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<AccountSettings>,
}

/// Filters for [`AccountsApi::list`](crate::apis::accounts::AccountsApi::list).
#[derive(Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct AccountListCriteria {
    /// Partial match against the display name and the profile names.
    pub name: Option<String>,
    /// Partial match against the account email.
    pub email: Option<String>,
    pub account_type: Option<AccountType>,
    pub foreign_id: Option<String>,
    /// Maximum number of results.
    pub count: Option<u32>,
    /// Number of results to skip.
    pub skip: Option<u32>,
}

impl QueryParams for AccountListCriteria {
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("name", text(&self.name)),
            ("email", text(&self.email)),
            ("type", self.account_type.map(|t| t.as_str().to_string())),
            ("foreignID", text(&self.foreign_id)),
            ("count", number(self.count)),
            ("skip", number(self.skip)),
        ]
    }
}

/// Countries of operation of an account.
pub type Countries = Vec<String>;
