use anyhow::Context;
use moov_rust::{
    apis::transfers::{
        Amount, TransferCreateBuilder, TransferCreateDestination, TransferCreateSource,
        TransferOptionsCriteriaBuilder, TransferOptionsTarget,
    },
    credentials::Credentials,
    MoovClient,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    public_key: String,
    secret_key: String,
    account_id: String,
    source_account_id: String,
    destination_account_id: String,
    amount_in_cents: i64,
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

    let amount = Amount::usd(config.amount_in_cents);

    // Find out which payment methods can move money between the two accounts
    let options = moov
        .transfers
        .get_transfer_options(
            &TransferOptionsCriteriaBuilder::default()
                .source(Some(TransferOptionsTarget {
                    account_id: Some(config.source_account_id),
                    payment_method_id: None,
                }))
                .destination(Some(TransferOptionsTarget {
                    account_id: Some(config.destination_account_id),
                    payment_method_id: None,
                }))
                .amount(amount.clone())
                .build()?,
        )
        .await?;

    let source = options
        .source_options
        .first()
        .context("No source payment method available")?;
    let destination = options
        .destination_options
        .first()
        .context("No destination payment method available")?;

    // Create a new transfer
    let res = moov
        .transfers
        .create(
            &TransferCreateBuilder::default()
                .source(TransferCreateSource::payment_method(
                    &source.payment_method_id,
                ))
                .destination(TransferCreateDestination::payment_method(
                    &destination.payment_method_id,
                ))
                .amount(amount)
                .description(Some("Created by moov-rust".to_string()))
                .build()?,
            None,
        )
        .await?;

    tracing::info!("Created new transfer: {}", res.transfer_id);

    let transfer = moov.transfers.get(&res.transfer_id).await?;
    tracing::info!("{:#?}", transfer);

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
