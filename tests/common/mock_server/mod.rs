mod routes;

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use moov_rust::apis::{
    accounts::{Account, AccountType, BusinessProfile, IndividualProfile, Name, Profile},
    bank_accounts::{BankAccount, BankAccountStatus, BankAccountType, HolderType},
    payment_methods::{PaymentMethod, PaymentMethodAccount, PaymentMethodType},
    transfers::{Amount, Transfer},
    wallets::Wallet,
};
use reqwest::Url;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use uuid::Uuid;
use wiremock::{
    matchers::{method, path, path_regex},
    Match, Mock, MockServer, Request, Respond, ResponseTemplate,
};

#[derive(Clone, Default)]
struct MockServerStorageInner {
    accounts: HashMap<String, Account>,
    payment_methods: HashMap<String, PaymentMethod>,
    transfers: HashMap<String, Transfer>,
    /// Responses already sent, by idempotency key.
    idempotent_responses: HashMap<String, serde_json::Value>,
}

/// In-memory storage for the resources created on the mock server.
type MockServerStorage = Arc<RwLock<MockServerStorageInner>>;

/// Simple mock server for Moov APIs used in local integration tests.
///
/// Every route requires the configured Basic credentials and the SDK user agent.
pub struct MoovMockServer {
    server: MockServer,
    storage: MockServerStorage,
    source_payment_method_id: String,
    destination_payment_method_id: String,
}

impl MoovMockServer {
    pub async fn start(public_key: &str, secret_key: &str, facilitator_account_id: &str) -> Self {
        let server = MockServer::start().await;
        let storage = MockServerStorage::default();

        // Seed the facilitator with a wallet and a customer with a bank account
        let customer_account_id = Uuid::new_v4().to_string();
        let source = wallet_payment_method(facilitator_account_id);
        let destination = bank_account_payment_method(&customer_account_id);

        {
            let mut storage = storage.write().unwrap();
            storage.accounts.insert(
                facilitator_account_id.to_string(),
                seed_account(
                    facilitator_account_id,
                    AccountType::Business,
                    Profile {
                        individual: None,
                        business: Some(BusinessProfile {
                            legal_business_name: "Rust SDK Facilitator".to_string(),
                            doing_business_as: None,
                            business_type: None,
                            address: None,
                            phone: None,
                            email: None,
                            website: None,
                            description: None,
                            tax_id_provided: None,
                            owners_provided: None,
                            industry_codes: None,
                        }),
                    },
                ),
            );
            storage.accounts.insert(
                customer_account_id.clone(),
                seed_account(
                    &customer_account_id,
                    AccountType::Individual,
                    Profile {
                        individual: Some(IndividualProfile {
                            name: Name {
                                first_name: "Jules".to_string(),
                                middle_name: None,
                                last_name: "Jackson".to_string(),
                                suffix: None,
                            },
                            phone: None,
                            email: Some("jules@example.com".to_string()),
                            address: None,
                            birth_date_provided: None,
                            government_id_provided: None,
                        }),
                        business: None,
                    },
                ),
            );
            storage
                .payment_methods
                .insert(source.payment_method_id.clone(), source.clone());
            storage
                .payment_methods
                .insert(destination.payment_method_id.clone(), destination.clone());
        }

        let authenticated = Authenticated {
            authorization: format!(
                "Basic {}",
                STANDARD.encode(format!("{}:{}", public_key, secret_key))
            ),
        };

        let mock_server = Self {
            server,
            storage,
            source_payment_method_id: source.payment_method_id,
            destination_payment_method_id: destination.payment_method_id,
        };

        mock_server
            .mount(
                Mock::given(method("POST")).and(path("/accounts")),
                &authenticated,
                routes::CreateAccount,
            )
            .await;
        mock_server
            .mount(
                Mock::given(method("GET")).and(path("/accounts")),
                &authenticated,
                routes::ListAccounts,
            )
            .await;
        mock_server
            .mount(
                Mock::given(method("GET")).and(path_regex(r"^/accounts/[^/]+$")),
                &authenticated,
                routes::GetAccount,
            )
            .await;
        mock_server
            .mount(
                Mock::given(method("GET")).and(path_regex(r"^/accounts/[^/]+/payment-methods$")),
                &authenticated,
                routes::ListPaymentMethods,
            )
            .await;
        mock_server
            .mount(
                Mock::given(method("POST")).and(path("/transfers")),
                &authenticated,
                routes::CreateTransfer,
            )
            .await;
        mock_server
            .mount(
                Mock::given(method("GET")).and(path_regex(r"^/transfers/[^/]+$")),
                &authenticated,
                routes::GetTransfer,
            )
            .await;
        mock_server
            .mount(
                Mock::given(method("POST")).and(path_regex(r"^/transfers/[^/]+/refunds$")),
                &authenticated,
                routes::CreateRefund,
            )
            .await;
        mock_server
            .mount(
                Mock::given(method("GET")).and(path_regex(r"^/transfers/[^/]+/refunds$")),
                &authenticated,
                routes::ListRefunds,
            )
            .await;

        // The first mounted mock that matches wins: unknown routes are 404, bad credentials 401
        Mock::given(authenticated.clone())
            .respond_with(
                ResponseTemplate::new(404).set_body_json(serde_json::json!({ "error": "not found" })),
            )
            .mount(&mock_server.server)
            .await;
        Mock::given(path_regex(".*"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({ "error": "invalid credentials" })),
            )
            .mount(&mock_server.server)
            .await;

        mock_server
    }

    pub fn url(&self) -> Url {
        Url::parse(&self.server.uri()).unwrap()
    }

    /// Wallet of the facilitator account, usable as a transfer source.
    pub fn source_payment_method_id(&self) -> &str {
        &self.source_payment_method_id
    }

    /// Bank account of a customer account, usable as a transfer destination.
    pub fn destination_payment_method_id(&self) -> &str {
        &self.destination_payment_method_id
    }

    /// Number of requests which reached the server so far, whatever their outcome.
    pub async fn received_requests(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }

    async fn mount<R: Respond + 'static>(
        &self,
        mock: wiremock::MockBuilder,
        authenticated: &Authenticated,
        route: impl FnOnce(MockServerStorage) -> R,
    ) {
        mock.and(authenticated.clone())
            .respond_with(route(self.storage.clone()))
            .mount(&self.server)
            .await;
    }
}

/// Matches requests carrying the expected credentials and the SDK user agent.
#[derive(Clone)]
struct Authenticated {
    authorization: String,
}

impl Match for Authenticated {
    fn matches(&self, request: &Request) -> bool {
        let user_agent_ok = header_value(request, "user-agent")
            .map(|ua| ua.starts_with("moov-rust/"))
            .unwrap_or(false);

        user_agent_ok
            && header_value(request, "authorization").as_deref()
                == Some(self.authorization.as_str())
    }
}

fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers
        .iter()
        .find(|(header_name, _)| header_name.as_str().eq_ignore_ascii_case(name))
        .map(|(_, values)| values.last().as_str().to_string())
}

fn seed_account(account_id: &str, account_type: AccountType, profile: Profile) -> Account {
    let now = Utc::now();

    Account {
        account_id: account_id.to_string(),
        account_type,
        display_name: routes::display_name(&profile),
        profile,
        metadata: HashMap::new(),
        foreign_id: None,
        verification: None,
        customer_support: None,
        settings: None,
        terms_of_service: None,
        created_on: now,
        updated_on: now,
    }
}

fn wallet_payment_method(account_id: &str) -> PaymentMethod {
    PaymentMethod {
        payment_method_id: Uuid::new_v4().to_string(),
        payment_method_type: PaymentMethodType::MoovWallet,
        account: Some(PaymentMethodAccount {
            account_id: account_id.to_string(),
            email: None,
            display_name: Some("Rust SDK Facilitator".to_string()),
        }),
        wallet: Some(Wallet {
            wallet_id: Uuid::new_v4().to_string(),
            available_balance: Some(Amount::usd(1_000_000)),
        }),
        bank_account: None,
        card: None,
        ach_details: None,
        card_details: None,
    }
}

fn bank_account_payment_method(account_id: &str) -> PaymentMethod {
    PaymentMethod {
        payment_method_id: Uuid::new_v4().to_string(),
        payment_method_type: PaymentMethodType::AchCreditStandard,
        account: Some(PaymentMethodAccount {
            account_id: account_id.to_string(),
            email: Some("jules@example.com".to_string()),
            display_name: Some("Jules Jackson".to_string()),
        }),
        wallet: None,
        bank_account: Some(BankAccount {
            bank_account_id: Uuid::new_v4().to_string(),
            fingerprint: Uuid::new_v4().simple().to_string(),
            status: BankAccountStatus::Verified,
            holder_name: "Jules Jackson".to_string(),
            holder_type: HolderType::Individual,
            bank_name: Some("Mock Bank".to_string()),
            bank_account_type: BankAccountType::Checking,
            routing_number: "273976369".to_string(),
            last_four_account_number: "6789".to_string(),
        }),
        card: None,
        ach_details: None,
        card_details: None,
    }
}
