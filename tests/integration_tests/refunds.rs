use crate::{common::test_context::TestContext, integration_tests::helpers};
use moov_rust::apis::transfers::RefundCreate;

#[tokio::test]
async fn partial_refund() {
    let ctx = TestContext::start().await;

    let res = helpers::create_transfer(&ctx, 1000).await.unwrap();

    let refund = ctx
        .client
        .transfers
        .refund(
            &res.transfer_id,
            None,
            Some(&RefundCreate { amount: Some(250) }),
        )
        .await
        .unwrap();
    assert_eq!(refund.amount.value, 250);
    assert_eq!(refund.amount.currency, "USD");

    // The refund is listed under the transfer
    let refunds = ctx
        .client
        .transfers
        .list_refunds(&res.transfer_id)
        .await
        .unwrap();
    assert_eq!(refunds.len(), 1);
    assert_eq!(refunds[0].refund_id, refund.refund_id);
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn refund_without_body_is_a_full_refund() {
    let ctx = TestContext::start().await;

    let res = helpers::create_transfer(&ctx, 1000).await.unwrap();
    let idempotency_key = uuid::Uuid::new_v4().to_string();

    let refund = ctx
        .client
        .transfers
        .refund(&res.transfer_id, Some(&idempotency_key), None)
        .await
        .unwrap();
    assert_eq!(refund.amount.value, 1000);

    // Replaying the same key returns the same refund
    let replayed = ctx
        .client
        .transfers
        .refund(&res.transfer_id, Some(&idempotency_key), None)
        .await
        .unwrap();
    assert_eq!(replayed.refund_id, refund.refund_id);

    let transfer = ctx.client.transfers.get(&res.transfer_id).await.unwrap();
    assert_eq!(transfer.refunded_amount.unwrap().value, 1000);
    assert_eq!(transfer.refunds.len(), 1);
}
