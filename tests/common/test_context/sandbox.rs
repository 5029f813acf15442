use moov_rust::{credentials::Credentials, MoovClient};
use url::Url;

static SANDBOX_URL: &str = "https://api.moov.io";

pub struct TestContext {
    pub client: MoovClient,
    pub facilitator_account_id: String,
    pub source_payment_method_id: String,
    pub destination_payment_method_id: String,
}

impl TestContext {
    pub async fn start() -> Self {
        // Take the required credentials from the env
        let public_key = std::env::var("ACCEPTANCE_TESTS_PUBLIC_KEY").unwrap();
        let secret_key = std::env::var("ACCEPTANCE_TESTS_SECRET_KEY").unwrap();
        let facilitator_account_id = std::env::var("ACCEPTANCE_TESTS_ACCOUNT_ID").unwrap();
        let source_payment_method_id =
            std::env::var("ACCEPTANCE_TESTS_SOURCE_PAYMENT_METHOD_ID").unwrap();
        let destination_payment_method_id =
            std::env::var("ACCEPTANCE_TESTS_DESTINATION_PAYMENT_METHOD_ID").unwrap();

        // Sandbox keys are served from the same host as production ones
        let client = MoovClient::builder(Credentials::new(
            public_key,
            secret_key,
            facilitator_account_id.clone(),
        ))
        .with_base_url(Url::parse(SANDBOX_URL).unwrap())
        .build();

        Self {
            client,
            facilitator_account_id,
            source_payment_method_id,
            destination_payment_method_id,
        }
    }

    pub fn base_url(&self) -> Url {
        Url::parse(SANDBOX_URL).unwrap()
    }
}
