//! Query strings for list and search endpoints.
//!
//! Each criteria type lists the filters its endpoint recognises, in a fixed order and with the
//! exact query parameter names the API expects. Absent or falsy values (`None`, empty strings,
//! empty lists, zero) are left out of the query string.

use chrono::{DateTime, SecondsFormat, Utc};
use urlencoding::encode;

/// Typed set of filters which can be rendered as a query string.
pub trait QueryParams {
    /// Every recognised filter as `(parameter name, value)`, in the order they are sent.
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)>;

    /// Renders the present filters as `name=value&...`, percent-encoded.
    fn to_query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .filter_map(|(name, value)| value.filter(|v| !v.is_empty()).map(|v| (name, v)))
            .map(|(name, value)| format!("{}={}", encode(name), encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Appends the query string of `params` to `path`, if there is one.
pub(crate) fn with_query(path: String, params: &impl QueryParams) -> String {
    let query = params.to_query_string();

    if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query)
    }
}

pub(crate) fn text(value: &Option<String>) -> Option<String> {
    value.clone()
}

pub(crate) fn number<N: Into<u64>>(value: Option<N>) -> Option<String> {
    value.map(Into::into).filter(|n| *n != 0).map(|n| n.to_string())
}

/// RFC 3339 date-time, in UTC.
pub(crate) fn date(value: Option<DateTime<Utc>>) -> Option<String> {
    value.map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Comma separated list, left out when empty.
pub(crate) fn list(values: &[String]) -> Option<String> {
    Some(values.join(","))
}
