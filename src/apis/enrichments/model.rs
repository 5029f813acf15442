use crate::{
    apis::accounts::{IndustryCodes, Name, Phone},
    query::{number, text, QueryParams},
};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Filters for [`EnrichmentsApi::get_address`](crate::apis::enrichments::EnrichmentsApi::get_address).
///
/// `search` is required. The `include_*`, `exclude_*` and `prefer_*` filters take comma separated
/// lists, for example `"CO,NE"` for states.
#[derive(Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default)]
pub struct AddressSearchCriteria {
    /// Partial or complete address to search.
    pub search: String,
    pub max_results: Option<u32>,
    pub include_cities: Option<String>,
    pub include_states: Option<String>,
    pub include_zipcodes: Option<String>,
    pub exclude_states: Option<String>,
    pub prefer_cities: Option<String>,
    pub prefer_states: Option<String>,
    pub prefer_zipcodes: Option<String>,
    /// Percentage of results to take from the preferred locations.
    pub prefer_ratio: Option<u32>,
    /// Latitude and longitude, or `ip` to geolocate the caller.
    pub prefer_geolocation: Option<String>,
    /// Previously selected suggestion, to expand secondary addresses.
    pub selected: Option<String>,
    pub source: Option<String>,
}

impl QueryParams for AddressSearchCriteria {
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("search", Some(self.search.clone())),
            ("maxResults", number(self.max_results)),
            ("includeCities", text(&self.include_cities)),
            ("includeStates", text(&self.include_states)),
            ("includeZipcodes", text(&self.include_zipcodes)),
            ("excludeStates", text(&self.exclude_states)),
            ("preferCities", text(&self.prefer_cities)),
            ("preferStates", text(&self.prefer_states)),
            ("preferZipcodes", text(&self.prefer_zipcodes)),
            ("preferRatio", number(self.prefer_ratio)),
            ("preferGeolocation", text(&self.prefer_geolocation)),
            ("selected", text(&self.selected)),
            ("source", text(&self.source)),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAddress {
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub state_or_province: String,
    pub postal_code: String,
    /// Number of secondary addresses (units, suites) at this address.
    #[serde(default)]
    pub entries: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct AddressSuggestions {
    #[serde(default)]
    pub suggestions: Vec<SuggestedAddress>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedIndividualProfile {
    #[serde(default)]
    pub name: Option<Name>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<Phone>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedBusinessProfile {
    #[serde(default)]
    pub legal_business_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<Phone>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub industry_codes: Option<IndustryCodes>,
}

/// Public details known about the owner of an email address.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct EnrichedProfile {
    #[serde(default)]
    pub individual: Option<EnrichedIndividualProfile>,
    #[serde(default)]
    pub business: Option<EnrichedBusinessProfile>,
}
