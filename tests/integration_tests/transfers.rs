use crate::{common::test_context::TestContext, integration_tests::helpers};
use moov_rust::{
    apis::transfers::{
        Amount, TransferCreateBuilder, TransferCreateDestination, TransferCreateSource,
    },
    error::ApiError,
    Error,
};
use std::collections::HashSet;
use uuid::Uuid;

#[tokio::test]
async fn create_and_get_transfer() {
    let ctx = TestContext::start().await;

    let res = helpers::create_transfer(&ctx, 1204).await.unwrap();
    assert!(!res.transfer_id.is_empty());

    // Retrieve it again
    let transfer = ctx.client.transfers.get(&res.transfer_id).await.unwrap();
    assert_eq!(transfer.transfer_id, res.transfer_id);
    assert_eq!(transfer.amount.value, 1204);
    assert_eq!(transfer.amount.currency, "USD");
    assert_eq!(
        transfer.source.payment_method_id,
        ctx.source_payment_method_id
    );
    assert_eq!(
        transfer.destination.payment_method_id,
        ctx.destination_payment_method_id
    );
    assert_eq!(transfer.description.as_deref(), Some("rust-sdk-test"));
}

#[tokio::test]
async fn same_idempotency_key_creates_a_single_transfer() {
    let ctx = TestContext::start().await;

    let transfer = helpers::wallet_to_bank_transfer(&ctx, 1);
    let idempotency_key = Uuid::new_v4().to_string();

    let first = ctx
        .client
        .transfers
        .create(&transfer, Some(&idempotency_key))
        .await
        .unwrap();
    let second = ctx
        .client
        .transfers
        .create(&transfer, Some(&idempotency_key))
        .await
        .unwrap();

    assert_eq!(first.transfer_id, second.transfer_id);
}

#[tokio::test]
async fn transfers_without_idempotency_key_are_distinct() {
    let ctx = TestContext::start().await;

    // Each call generates its own key, even when sent concurrently
    let transfers =
        futures::future::try_join_all((0..3).map(|_| helpers::create_transfer(&ctx, 1)))
            .await
            .unwrap();

    let ids = transfers
        .iter()
        .map(|t| t.transfer_id.as_str())
        .collect::<HashSet<_>>();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn unknown_destination_is_rejected() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .transfers
        .create(
            &TransferCreateBuilder::default()
                .source(TransferCreateSource::payment_method(
                    &ctx.source_payment_method_id,
                ))
                .destination(TransferCreateDestination::payment_method(
                    Uuid::new_v4().to_string(),
                ))
                .amount(Amount::usd(1))
                .build()
                .unwrap(),
            None,
        )
        .await
        .expect_err("Expected error");

    assert!(matches!(
        err,
        Error::RequestFailedError(ApiError { status, .. }) if (400..500).contains(&status)
    ));
}
