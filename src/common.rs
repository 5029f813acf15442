use crate::Error;
use reqwest::header::{HeaderName, HeaderValue};
use urlencoding::encode;
use uuid::Uuid;

pub(crate) static IDEMPOTENCY_KEY_HEADER: &str = "x-idempotency-key";

/// Builds the idempotency header for a write.
///
/// The caller's key is used verbatim. If none (or an empty one) was given, a fresh random key
/// is generated, so every call is a distinct operation for the server.
pub(crate) fn idempotency_header(key: Option<&str>) -> Result<(HeaderName, HeaderValue), Error> {
    let key = match key {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => Uuid::new_v4().to_string(),
    };

    let value = HeaderValue::from_str(&key)
        .map_err(|e| Error::Other(anyhow::Error::new(e).context("Invalid idempotency key")))?;

    Ok((HeaderName::from_static(IDEMPOTENCY_KEY_HEADER), value))
}

/// Joins percent-encoded path segments with `/`.
pub(crate) fn path(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|s| encode(s).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
