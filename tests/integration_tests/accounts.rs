use crate::{common::test_context::TestContext, integration_tests::helpers};
use moov_rust::{
    apis::accounts::{AccountListCriteriaBuilder, AccountType},
    credentials::Credentials,
    error::ApiError,
    Error, MoovClient,
};

#[tokio::test]
async fn create_and_get_account() {
    let ctx = TestContext::start().await;

    let account = helpers::create_individual_account(&ctx).await.unwrap();
    assert!(!account.account_id.is_empty());
    assert_eq!(account.account_type, AccountType::Individual);

    // Retrieve it again
    let fetched = ctx
        .client
        .accounts
        .get(&account.account_id)
        .await
        .unwrap();
    assert_eq!(fetched.account_id, account.account_id);
    assert_eq!(
        fetched.profile.individual.unwrap().name,
        account.profile.individual.unwrap().name
    );
}

#[tokio::test]
async fn list_accounts_by_name() {
    let ctx = TestContext::start().await;

    let account = helpers::create_individual_account(&ctx).await.unwrap();
    let last_name = account
        .profile
        .individual
        .as_ref()
        .unwrap()
        .name
        .last_name
        .clone();

    let accounts = ctx
        .client
        .accounts
        .list(
            &AccountListCriteriaBuilder::default()
                .name(Some(last_name))
                .count(Some(10))
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].account_id, account.account_id);
}

#[tokio::test]
async fn get_unknown_account() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .accounts
        .get("00000000-0000-0000-0000-000000000000")
        .await
        .expect_err("Expected error");

    assert!(matches!(err, Error::RequestFailedError(ApiError { status, .. }) if status == 404));
}

#[tokio::test]
async fn invalid_credentials() {
    let ctx = TestContext::start().await;

    // Create a new client with a set of invalid credentials pointing to the same server
    let client = MoovClient::builder(Credentials::new(
        "invalid",
        "invalid",
        ctx.facilitator_account_id.clone(),
    ))
    .with_base_url(ctx.base_url())
    .build();

    // Make the request and assert that we got an error
    let err = client
        .accounts
        .get(&ctx.facilitator_account_id)
        .await
        .expect_err("Expected error");

    assert!(matches!(err, Error::RequestFailedError(ApiError { status, .. }) if status == 401));
}
