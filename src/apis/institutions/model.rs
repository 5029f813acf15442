use crate::query::{text, QueryParams};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment rail on which financial institutions are searched.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Rail {
    Ach,
    Wire,
}

impl Rail {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rail::Ach => "ach",
            Rail::Wire => "wire",
        }
    }
}

impl fmt::Display for Rail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for [`InstitutionsApi::search`](crate::apis::institutions::InstitutionsApi::search).
///
/// At least one of `name` and `routing_number` must be set.
#[derive(Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct InstitutionSearchCriteria {
    pub name: Option<String>,
    pub routing_number: Option<String>,
}

impl QueryParams for InstitutionSearchCriteria {
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("name", text(&self.name)),
            ("routingNumber", text(&self.routing_number)),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionLocation {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub postal_code_extension: Option<String>,
}

/// A financial institution reachable over ACH.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchParticipant {
    pub routing_number: String,
    pub customer_name: String,
    #[serde(default)]
    pub office_code: Option<String>,
    #[serde(rename = "servicingFRBNumber", default)]
    pub servicing_frb_number: Option<String>,
    #[serde(default)]
    pub record_type_code: Option<String>,
    #[serde(default)]
    pub new_routing_number: Option<String>,
    #[serde(default)]
    pub location: Option<InstitutionLocation>,
    #[serde(default)]
    pub status_code: Option<String>,
}

/// A financial institution reachable over Fedwire.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireParticipant {
    pub routing_number: String,
    pub customer_name: String,
    #[serde(default)]
    pub telegraphic_name: Option<String>,
    #[serde(default)]
    pub location: Option<InstitutionLocation>,
    #[serde(default)]
    pub funds_transfer_status: Option<String>,
    #[serde(default)]
    pub book_entry_securities_transfer_status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionSearchResult {
    #[serde(default)]
    pub ach_participants: Vec<AchParticipant>,
    #[serde(default)]
    pub wire_participants: Vec<WireParticipant>,
}
