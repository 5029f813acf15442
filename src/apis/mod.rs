//! Clients for the various Moov APIs.

use crate::authenticator::Authenticator;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::{
    fmt::{Debug, Formatter},
    time::Duration,
};

pub mod accounts;
pub mod bank_accounts;
pub mod capabilities;
pub mod cards;
pub mod enrichments;
pub mod institutions;
pub mod payment_methods;
pub mod representatives;
pub mod transfers;
pub mod wallets;

pub(crate) struct MoovClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) authenticator: Authenticator,
    pub(crate) base_url: Url,
    pub(crate) timeout: Option<Duration>,
}

impl Debug for MoovClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoovClientInner")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) async fn mock_inner_and_server() -> (std::sync::Arc<MoovClientInner>, wiremock::MockServer) {
    use crate::{
        credentials::Credentials,
        middlewares::{
            authentication::AuthenticationMiddleware, inject_user_agent::InjectUserAgentMiddleware,
        },
    };

    let mock_server = wiremock::MockServer::start().await;

    let authenticator = Authenticator::new(Credentials::new("pub_1", "sec_1", "acc_1"));

    let inner = MoovClientInner {
        client: reqwest_middleware::ClientBuilder::new(reqwest::Client::new())
            .with(InjectUserAgentMiddleware)
            .with(AuthenticationMiddleware {
                authenticator: authenticator.clone(),
            })
            .build(),
        authenticator,
        base_url: Url::parse(&mock_server.uri()).unwrap(),
        timeout: None,
    };

    (std::sync::Arc::new(inner), mock_server)
}
