use anyhow::Context;
use moov_rust::{
    apis::accounts::AccountListCriteriaBuilder, credentials::Credentials, AccountResource,
    MoovClient,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    public_key: String,
    secret_key: String,
    account_id: String,
    name: Option<String>,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            // MOOV_PUBLIC_KEY, MOOV_SECRET_KEY, MOOV_ACCOUNT_ID, ...
            .add_source(config::Environment::with_prefix("MOOV"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    // Setup Moov client
    let moov = MoovClient::new(Credentials::new(
        config.public_key,
        config.secret_key,
        config.account_id,
    ));

    // List the first accounts matching the configured name
    let accounts = moov
        .accounts
        .list(
            &AccountListCriteriaBuilder::default()
                .name(config.name)
                .count(Some(20))
                .build()?,
        )
        .await?;

    for account in &accounts {
        tracing::info!(
            "Account {}: {} ({})",
            account.account_id,
            account.display_name.as_deref().unwrap_or("<unnamed>"),
            account.account_type.as_str()
        );

        // Show how each account can be paid
        for payment_method in moov.payment_methods.list(&account.account_id).await? {
            tracing::info!(
                "  Payment method {}: {:?}",
                payment_method.payment_method_id,
                payment_method.payment_method_type
            );
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
