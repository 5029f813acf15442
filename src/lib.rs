//! Rust client for the [Moov](https://moov.io) payments platform.
//!
//! It provides typed access to accounts, bank accounts, cards, capabilities, transfers,
//! wallets, representatives, payment methods, institutions and enrichment data.
//!
//! Check out also the official Moov [API documentation](https://docs.moov.io/api/).
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! First sign up for a Moov account and create an API key pair from the dashboard.
//! Every request is authenticated with the key pair and made on behalf of your
//! facilitator account, so all three values are required:
//!
//! - `MOOV_PUBLIC_KEY`
//! - `MOOV_SECRET_KEY`
//! - `MOOV_ACCOUNT_ID`
//!
//! ## Initialize a new `MoovClient`
//!
//! Create a new [`MoovClient`](crate::client::MoovClient) with explicit credentials:
//!
//! ```rust,no_run
//! # use moov_rust::{MoovClient, credentials::Credentials};
//! let moov = MoovClient::new(Credentials::new(
//!     "some-public-key",
//!     "some-secret-key",
//!     "some-facilitator-account-id",
//! ));
//! ```
//!
//! or read them from the environment with [`MoovClient::from_env`](crate::client::MoovClient::from_env).
//! Missing credentials are not reported when the client is built, but by the first call made with it,
//! before anything is sent over the network.
//!
//! By default, a `MoovClient` connects to `https://api.moov.io`.
//! Use [`with_base_url`](crate::client::MoovClientBuilder::with_base_url) to point it somewhere else.
//!
//! ## Create a transfer
//!
//! ```rust,no_run
//! # use moov_rust::{MoovClient, Error, apis::transfers::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let moov: MoovClient = unreachable!();
//! #
//! let transfer = TransferCreateBuilder::default()
//!     .source(TransferCreateSource::payment_method("source-payment-method-id"))
//!     .destination(TransferCreateDestination::payment_method("destination-payment-method-id"))
//!     .amount(Amount::usd(1204))
//!     .description(Some("Invoice #1234".to_string()))
//!     .build()
//!     .unwrap();
//!
//! // Reuse the same idempotency key when retrying, so the transfer is only created once
//! let res = moov.transfers.create(&transfer, Some("my-idempotency-key")).await?;
//!
//! println!("Created new transfer: {}", res.transfer_id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Listing accounts
//!
//! ```rust,no_run
//! # use moov_rust::{MoovClient, Error, apis::accounts::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let moov: MoovClient = unreachable!();
//! #
//! let criteria = AccountListCriteriaBuilder::default()
//!     .name(Some("Jules".to_string()))
//!     .count(Some(20))
//!     .build()
//!     .unwrap();
//!
//! for account in moov.accounts.list(&criteria).await? {
//!     tracing::info!("Account {}: {:?}", account.account_id, account.display_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for more example usages of this library.
//!
//! To run an example, use `cargo run` like this:
//!
//! ```shell
//! cargo run --example list_accounts
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub(crate) mod authenticator;
pub mod client;
mod common;
pub mod credentials;
pub mod error;
mod middlewares;
pub mod query;
pub mod request;
pub mod resource;
pub mod validation;

pub use client::MoovClient;
pub use error::Error;
pub use query::QueryParams;
pub use resource::{AccountResource, DisableResource};
