//! Authenticated request execution and JSON response decoding.
//!
//! Every API call goes through [`MoovRequest`]: a relative path, a method, optional headers,
//! an optional JSON body and an optional timeout. The client resolves the path against its
//! base URL, and the middleware chain adds the `Authorization` and `User-Agent` headers.
//!
//! No request is ever retried.

use crate::{apis::MoovClientInner, error::ApiError, Error};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Method, Response, Url,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

/// Description of a single call against the Moov API.
///
/// ```rust
/// # use moov_rust::request::MoovRequest;
/// # fn main() -> Result<(), moov_rust::Error> {
/// let request = MoovRequest::post("/accounts/some-id/cards")
///     .json(&serde_json::json!({ "holderName": "Jules Jackson" }))?;
///
/// // One leading slash is stripped
/// assert_eq!(request.path(), "accounts/some-id/cards");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MoovRequest {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<serde_json::Value>,
    timeout: Option<Duration>,
}

impl MoovRequest {
    /// Creates a new request for the given path, relative to the API base URL.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adds a header to the request.
    ///
    /// An `Authorization` header is rejected when the request is executed.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Adds all the given headers to the request.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Serializes `body` as the JSON payload of the request.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Bounds the whole request, from connection to the end of the response body.
    ///
    /// Overrides the default timeout configured on the client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request path, without its leading slash.
    pub fn path(&self) -> &str {
        self.path.strip_prefix('/').unwrap_or(&self.path)
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

impl MoovClientInner {
    /// Sends the request and returns the raw response, whatever its status.
    #[tracing::instrument(
        name = "Execute Moov Request",
        level = "debug",
        skip(self, request),
        fields(method = %request.method, path = %request.path())
    )]
    pub(crate) async fn execute(&self, request: MoovRequest) -> Result<Response, Error> {
        let url = self.url_for(request.path())?;

        let mut req = reqwest::Request::new(request.method, url);
        *req.headers_mut() = request.headers;
        if let Some(body) = request.body {
            if !req.headers().contains_key(CONTENT_TYPE) {
                req.headers_mut()
                    .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            *req.body_mut() = Some(serde_json::to_vec(&body)?.into());
        }
        *req.timeout_mut() = request.timeout.or(self.timeout);

        Ok(self.client.execute(req).await?)
    }

    /// Sends the request, rejects non-success statuses and decodes the JSON body.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, request: MoovRequest) -> Result<T, Error> {
        let response = ensure_success(self.execute(request).await?).await?;

        Ok(response.json().await?)
    }

    /// Sends the request and rejects non-success statuses, discarding the response body.
    pub(crate) async fn fetch_empty(&self, request: MoovRequest) -> Result<(), Error> {
        ensure_success(self.execute(request).await?).await?;

        Ok(())
    }

    /// Sends the request, rejects non-success statuses and returns the raw body.
    pub(crate) async fn fetch_bytes(&self, request: MoovRequest) -> Result<Vec<u8>, Error> {
        let response = ensure_success(self.execute(request).await?).await?;

        Ok(response.bytes().await?.to_vec())
    }

    fn url_for(&self, path: &str) -> Result<Url, Error> {
        let url = format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path);

        Url::parse(&url).map_err(|e| {
            Error::Other(anyhow::Error::new(e).context(format!("Invalid request URL: {}", url)))
        })
    }
}

/// Turns a non-success response into an [`Error::RequestFailedError`].
///
/// The body is kept as text. If it is a JSON object with an `error` field,
/// that message is extracted as well.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, Error> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let bytes = response.bytes().await?;

    tracing::debug!("Failed HTTP request. Status code: {}", status);

    let message = serde_json::from_slice::<ErrorResponse>(&bytes)
        .ok()
        .map(|e| e.error)
        .or_else(|| {
            bytes
                .is_empty()
                .then(|| status.canonical_reason().map(str::to_string))
                .flatten()
        });

    Err(ApiError {
        status: status.as_u16(),
        message,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
    .into())
}

/// Error response from Moov APIs.
#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: String,
}
