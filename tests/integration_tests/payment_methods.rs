use crate::common::test_context::TestContext;
use moov_rust::AccountResource;

#[tokio::test]
async fn list_payment_methods() {
    let ctx = TestContext::start().await;

    let payment_methods = ctx
        .client
        .payment_methods
        .list(&ctx.facilitator_account_id)
        .await
        .unwrap();

    let source = payment_methods
        .iter()
        .find(|pm| pm.payment_method_id == ctx.source_payment_method_id)
        .expect("Source payment method not found");
    assert_eq!(
        source.account.as_ref().unwrap().account_id,
        ctx.facilitator_account_id
    );
}
