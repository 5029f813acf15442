//! Credentials used to authenticate against the Moov API.

use crate::error::ConfigurationError;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

static PUBLIC_KEY_ENV: &str = "MOOV_PUBLIC_KEY";
static SECRET_KEY_ENV: &str = "MOOV_SECRET_KEY";
static ACCOUNT_ID_ENV: &str = "MOOV_ACCOUNT_ID";

/// API key pair and facilitator account used to authenticate every request.
///
/// Any of the values may be left unset when the client is built. Missing values are
/// reported as a [`ConfigurationError`](crate::error::ConfigurationError) by each call,
/// before anything is sent over the network.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Credentials {
    public_key: Option<String>,
    secret_key: Option<Token>,
    account_id: Option<String>,
}

impl Credentials {
    /// Builds a complete set of credentials.
    pub fn new(
        public_key: impl Into<String>,
        secret_key: impl Into<Token>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            public_key: Some(public_key.into()),
            secret_key: Some(secret_key.into()),
            account_id: Some(account_id.into()),
        }
    }

    /// Reads the credentials from the `MOOV_PUBLIC_KEY`, `MOOV_SECRET_KEY`
    /// and `MOOV_ACCOUNT_ID` environment variables.
    ///
    /// Variables which are not set are left empty, and will be reported when the client is used.
    pub fn from_env() -> Self {
        Self {
            public_key: std::env::var(PUBLIC_KEY_ENV).ok(),
            secret_key: std::env::var(SECRET_KEY_ENV).ok().map(Token::new),
            account_id: std::env::var(ACCOUNT_ID_ENV).ok(),
        }
    }

    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    pub fn with_secret_key(mut self, secret_key: impl Into<Token>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Returns the public key, if configured.
    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }

    /// Returns the secret key, if configured.
    pub fn secret_key(&self) -> Option<&Token> {
        self.secret_key.as_ref()
    }

    /// Returns the facilitator account ID, if configured.
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    /// Checks that all three values are present and not empty.
    ///
    /// Returns the public and secret keys on success.
    pub(crate) fn resolve(&self) -> Result<(&str, &str), ConfigurationError> {
        let public_key = self
            .public_key()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigurationError::MissingPublicKey)?;
        let secret_key = self
            .secret_key()
            .map(Token::expose_secret)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigurationError::MissingSecretKey)?;
        self.account_id()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigurationError::MissingAccountId)?;

        Ok((public_key, secret_key))
    }
}

/// Wrapper for a secret string that makes it harder to accidentally expose secrets
/// and ensures the backing memory is wiped on drop.
///
/// It is a wrapper around a [`secrecy::Secret`](secrecy::Secret).
///
/// ```rust
/// # use moov_rust::credentials::Token;
/// let token = Token::new("supersecret");
///
/// // The secret is redacted when printed with Debug
/// assert!(!format!("{:?}", token).contains("supersecret"));
///
/// // But can be manually exposed calling `expose_secret()`
/// assert_eq!(token.expose_secret(), "supersecret");
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Token(#[serde(serialize_with = "serialize_secret")] Secret<String>);

impl Token {
    /// Wraps a secret string in a new `Token`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for Token
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Token::new(s)
    }
}

fn serialize_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    secret.expose_secret().serialize(serializer)
}
