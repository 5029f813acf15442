use crate::{credentials::Credentials, error::Error};
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header::HeaderValue;

/// Turns the configured [`Credentials`] into the `Authorization` header sent with every request.
#[derive(Debug, Clone)]
pub struct Authenticator {
    credentials: Credentials,
}

impl Authenticator {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Builds the `Basic base64(public_key:secret_key)` header value.
    ///
    /// Fails with a [`ConfigurationError`](crate::error::ConfigurationError) if any of the
    /// three credentials is missing. Credentials are checked on every call and never cached.
    pub fn authorization_header(&self) -> Result<HeaderValue, Error> {
        let (public_key, secret_key) = self.credentials.resolve()?;

        let encoded = STANDARD.encode(format!("{}:{}", public_key, secret_key));
        let mut header_value = HeaderValue::from_str(&format!("Basic {}", encoded))
            .map_err(|e| Error::Other(e.into()))?;
        header_value.set_sensitive(true);

        Ok(header_value)
    }
}
