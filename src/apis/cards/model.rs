use crate::apis::accounts::Address;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub enum CardBrand {
    #[serde(rename = "American Express")]
    AmericanExpress,
    Discover,
    MasterCard,
    Visa,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Credit,
    Debit,
    Prepaid,
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum CardVerificationStatus {
    NoMatch,
    Match,
    NotChecked,
    Unavailable,
}

/// Two digits month and year.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CardExpiration {
    pub month: String,
    pub year: String,
}

/// Results of submitting the cardholder data to the card network.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardVerification {
    pub cvv: CardVerificationStatus,
    pub address_line1: CardVerificationStatus,
    pub postal_code: CardVerificationStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "cardID")]
    pub card_id: String,
    pub fingerprint: String,
    pub brand: CardBrand,
    pub card_type: CardType,
    pub last_four_card_number: String,
    pub bin: String,
    pub expiration: CardExpiration,
    pub holder_name: String,
    pub billing_address: Address,
    #[serde(default)]
    pub card_verification: Option<CardVerification>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub issuer_country: Option<String>,
}

/// Card details to link to an account.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct LinkCard {
    pub card_number: String,
    pub expiration: CardExpiration,
    pub card_cvv: String,
    pub holder_name: String,
    pub billing_address: Address,
}
