//! Standard errors used by all functions in the crate.

use std::fmt;

/// Error collecting all possible failures of the Moov client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// One of the required credentials is not configured.
    ///
    /// This is a misconfiguration of the client, retrying the call will not help.
    #[error("{0}")]
    ConfigurationError(#[from] ConfigurationError),
    /// The caller tried to set its own `Authorization` header.
    ///
    /// Authentication is owned by the client and cannot be overridden per request.
    #[error("Custom authorization header is not allowed")]
    ProtocolViolationError,
    /// A required argument was missing or empty. No request was sent.
    #[error("{0}")]
    ValidationError(#[from] ValidationError),
    /// Moov API returned a non-success HTTP status.
    #[error("{0}")]
    RequestFailedError(#[from] ApiError),
    /// Network level failure (DNS, connection, timeout, body read).
    #[error("HTTP error: {0}")]
    TransportError(#[from] reqwest::Error),
    /// A request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    SerializationError(#[from] serde_json::Error),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::TransportError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// A credential the client needs but does not have.
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConfigurationError {
    #[error("Missing credentials: public key is not set (MOOV_PUBLIC_KEY)")]
    MissingPublicKey,
    #[error("Missing credentials: secret key is not set (MOOV_SECRET_KEY)")]
    MissingSecretKey,
    #[error("Missing credentials: account ID is not set (MOOV_ACCOUNT_ID)")]
    MissingAccountId,
}

/// A required argument of an API call that was missing or empty.
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ValidationError {
    #[error("Account ID is required")]
    MissingAccountId,
    #[error("Bank account ID is required")]
    MissingBankAccountId,
    #[error("Bank account details, Plaid token or MX authorization code is required")]
    MissingBankPayload,
    #[error("Bank account number is required")]
    MissingBankAccountNumber,
    #[error("Bank account routing number is required")]
    MissingBankAccountRoutingNumber,
    #[error("Bank account routing number must be 9 characters long")]
    InvalidBankAccountRoutingNumberLength,
    #[error("Bank account holder name is required")]
    MissingBankAccountHolderName,
    #[error("Micro-deposit amounts are required")]
    MissingAmounts,
    #[error("Card ID is required")]
    MissingCardId,
    #[error("Card number is required")]
    MissingCardNumber,
    #[error("Capability is required")]
    MissingCapability,
    #[error("At least one capability is required")]
    MissingCapabilities,
    #[error("Transfer ID is required")]
    MissingTransferId,
    #[error("Transfer source payment method ID or transfer ID is required")]
    MissingTransferSource,
    #[error("Refund ID is required")]
    MissingRefundId,
    #[error("Transfer options criteria are required")]
    MissingTransferOptionCriteria,
    #[error("Metadata is required")]
    MissingMetadata,
    #[error("Representative ID is required")]
    MissingRepresentativeId,
    #[error("Representative name is required")]
    MissingRepresentativeName,
    #[error("Wallet ID is required")]
    MissingWalletId,
    #[error("Wallet transaction ID is required")]
    MissingWalletTransactionId,
    #[error("Payment method ID is required")]
    MissingPaymentMethodId,
    #[error("Institution name or routing number is required")]
    MissingInstitutionNameOrRouting,
    #[error("Avatar ID is required")]
    MissingAvatarId,
    #[error("Address search string is required")]
    MissingEnrichAddressSearch,
    #[error("Email is required")]
    MissingEmail,
}

/// Moov HTTP APIs error.
#[derive(thiserror::Error, Debug, Clone)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// The error message returned by the server, if the body contained one.
    pub message: Option<String>,
    /// Raw response body, kept for debugging.
    pub body: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moov HTTP error {}", self.status)?;

        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }

        if !self.body.is_empty() && self.message.is_none() {
            write!(f, "\nResponse body: {}", self.body)?;
        }

        Ok(())
    }
}
