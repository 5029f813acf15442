//! Module containing the main Moov API client.

use crate::{
    apis::{
        accounts::AccountsApi, bank_accounts::BankAccountsApi, capabilities::CapabilitiesApi,
        cards::CardsApi, enrichments::EnrichmentsApi, institutions::InstitutionsApi,
        payment_methods::PaymentMethodsApi, representatives::RepresentativesApi,
        transfers::TransfersApi, wallets::WalletsApi, MoovClientInner,
    },
    authenticator::Authenticator,
    credentials::Credentials,
    middlewares::{
        authentication::AuthenticationMiddleware, inject_user_agent::InjectUserAgentMiddleware,
    },
    request::MoovRequest,
    Error,
};
use reqwest::{Response, Url};
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use std::{sync::Arc, time::Duration};

static DEFAULT_BASE_URL: &str = "https://api.moov.io";

/// Client for the Moov public APIs.
///
/// Cloning a client is cheap: all clones share the same connection pool and credentials.
/// Requests are never retried automatically. Callers who retry a transfer or refund
/// creation should pass their own idempotency key.
#[derive(Debug, Clone)]
pub struct MoovClient {
    /// Accounts APIs client.
    pub accounts: AccountsApi,
    /// Bank accounts APIs client.
    pub bank_accounts: BankAccountsApi,
    /// Capabilities APIs client.
    pub capabilities: CapabilitiesApi,
    /// Cards APIs client.
    pub cards: CardsApi,
    /// Enrichment APIs client.
    pub enrichments: EnrichmentsApi,
    /// Institutions APIs client.
    pub institutions: InstitutionsApi,
    /// Payment methods APIs client.
    pub payment_methods: PaymentMethodsApi,
    /// Representatives APIs client.
    pub representatives: RepresentativesApi,
    /// Transfers and refunds APIs client.
    pub transfers: TransfersApi,
    /// Wallets APIs client.
    pub wallets: WalletsApi,
    inner: Arc<MoovClientInner>,
}

impl MoovClient {
    /// Builds a new [`MoovClient`](crate::client::MoovClient) with the default configuration.
    pub fn new(credentials: Credentials) -> MoovClient {
        MoovClientBuilder::new(credentials).build()
    }

    /// Builds a new [`MoovClient`](crate::client::MoovClient) with credentials read from the environment.
    ///
    /// See [`Credentials::from_env`](crate::credentials::Credentials::from_env).
    pub fn from_env() -> MoovClient {
        MoovClientBuilder::new(Credentials::from_env()).build()
    }

    /// Returns a new builder to configure a new [`MoovClient`](crate::client::MoovClient).
    pub fn builder(credentials: Credentials) -> MoovClientBuilder {
        MoovClientBuilder::new(credentials)
    }

    /// Credentials used by this client.
    pub fn credentials(&self) -> &Credentials {
        self.inner.authenticator.credentials()
    }

    /// Sends an authenticated request and returns the raw response, whatever its status.
    pub async fn execute(&self, request: MoovRequest) -> Result<Response, Error> {
        self.inner.execute(request).await
    }

    /// Sends an authenticated request and decodes its JSON response.
    ///
    /// Non-success statuses are returned as [`Error::RequestFailedError`](crate::Error::RequestFailedError).
    pub async fn fetch<T: DeserializeOwned>(&self, request: MoovRequest) -> Result<T, Error> {
        self.inner.fetch(request).await
    }

    /// Sends an authenticated request, ignoring the body of a successful response.
    pub async fn fetch_empty(&self, request: MoovRequest) -> Result<(), Error> {
        self.inner.fetch_empty(request).await
    }
}

/// Builder for a [`MoovClient`](crate::client::MoovClient).
#[derive(Debug)]
pub struct MoovClientBuilder {
    client: reqwest::Client,
    credentials: Credentials,
    base_url: Url,
    timeout: Option<Duration>,
}

impl MoovClientBuilder {
    /// Creates a new builder to configure a [`MoovClient`](crate::client::MoovClient).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            timeout: None,
        }
    }

    /// Consumes the builder and builds a new [`MoovClient`](crate::client::MoovClient).
    pub fn build(self) -> MoovClient {
        let authenticator = Authenticator::new(self.credentials);

        let inner = Arc::new(MoovClientInner {
            client: build_client_with_middleware(
                self.client,
                AuthenticationMiddleware {
                    authenticator: authenticator.clone(),
                },
            ),
            authenticator,
            base_url: self.base_url,
            timeout: self.timeout,
        });

        MoovClient {
            accounts: AccountsApi::new(inner.clone()),
            bank_accounts: BankAccountsApi::new(inner.clone()),
            capabilities: CapabilitiesApi::new(inner.clone()),
            cards: CardsApi::new(inner.clone()),
            enrichments: EnrichmentsApi::new(inner.clone()),
            institutions: InstitutionsApi::new(inner.clone()),
            payment_methods: PaymentMethodsApi::new(inner.clone()),
            representatives: RepresentativesApi::new(inner.clone()),
            transfers: TransfersApi::new(inner.clone()),
            wallets: WalletsApi::new(inner.clone()),
            inner,
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the base URL all request paths are resolved against.
    ///
    /// Defaults to: `https://api.moov.io`
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sets a default timeout applied to every request.
    ///
    /// Individual requests can override it with [`MoovRequest::timeout`](crate::request::MoovRequest::timeout).
    /// Without it, requests are only bounded by the underlying HTTP client configuration.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    auth_middleware: AuthenticationMiddleware,
) -> ClientWithMiddleware {
    reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(InjectUserAgentMiddleware)
        .with(auth_middleware)
        .build()
}
