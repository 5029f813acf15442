use crate::{
    apis::{payment_methods::PaymentMethod, MoovClientInner},
    error::ValidationError,
    resource::{AccountCollection, AccountResource},
    Error,
};
use async_trait::async_trait;
use std::sync::Arc;

const PAYMENT_METHODS: AccountCollection = AccountCollection {
    name: "payment-methods",
    missing_id: ValidationError::MissingPaymentMethodId,
};

/// Moov payment methods APIs client.
///
/// Payment methods are derived by Moov from the wallets, bank accounts and cards of an account.
#[derive(Clone, Debug)]
pub struct PaymentMethodsApi {
    inner: Arc<MoovClientInner>,
}

impl PaymentMethodsApi {
    pub(crate) fn new(inner: Arc<MoovClientInner>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl AccountResource for PaymentMethodsApi {
    type Item = PaymentMethod;

    #[tracing::instrument(name = "List Payment Methods", skip(self))]
    async fn list(&self, account_id: &str) -> Result<Vec<PaymentMethod>, Error> {
        PAYMENT_METHODS.list(&self.inner, account_id).await
    }

    #[tracing::instrument(name = "Get Payment Method", skip(self))]
    async fn get(&self, account_id: &str, payment_method_id: &str) -> Result<PaymentMethod, Error> {
        PAYMENT_METHODS
            .get(&self.inner, account_id, payment_method_id)
            .await
    }
}
