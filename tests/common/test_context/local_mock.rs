use crate::common::mock_server::MoovMockServer;
use moov_rust::{credentials::Credentials, MoovClient};
use url::Url;
use uuid::Uuid;

pub struct TestContext {
    pub client: MoovClient,
    pub facilitator_account_id: String,
    pub source_payment_method_id: String,
    pub destination_payment_method_id: String,
    mock_server: MoovMockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        // Generate a new set of random credentials for this specific test
        let public_key = Uuid::new_v4().to_string();
        let secret_key = Uuid::new_v4().to_string();
        let facilitator_account_id = Uuid::new_v4().to_string();

        // Setup a new mock server
        let mock_server =
            MoovMockServer::start(&public_key, &secret_key, &facilitator_account_id).await;

        // Configure a new MoovClient to point to the mock server
        let client = MoovClient::builder(Credentials::new(
            public_key,
            secret_key,
            facilitator_account_id.clone(),
        ))
        .with_base_url(mock_server.url())
        .build();

        Self {
            client,
            source_payment_method_id: mock_server.source_payment_method_id().to_string(),
            destination_payment_method_id: mock_server.destination_payment_method_id().to_string(),
            facilitator_account_id,
            mock_server,
        }
    }

    pub fn base_url(&self) -> Url {
        self.mock_server.url()
    }

    /// Number of requests which reached the mock server so far.
    pub async fn received_requests(&self) -> usize {
        self.mock_server.received_requests().await
    }
}
