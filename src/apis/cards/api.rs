use crate::{
    apis::{
        cards::{Card, LinkCard},
        MoovClientInner,
    },
    error::ValidationError,
    request::MoovRequest,
    resource::{AccountCollection, AccountResource, DisableResource},
    validation::check_string,
    Error,
};
use async_trait::async_trait;
use std::sync::Arc;

const CARDS: AccountCollection = AccountCollection {
    name: "cards",
    missing_id: ValidationError::MissingCardId,
};

/// Moov cards APIs client.
#[derive(Clone, Debug)]
pub struct CardsApi {
    inner: Arc<MoovClientInner>,
}

impl CardsApi {
    pub(crate) fn new(inner: Arc<MoovClientInner>) -> Self {
        Self { inner }
    }

    /// Links a card to a Moov account.
    #[tracing::instrument(name = "Link Card", skip(self, card))]
    pub async fn link(&self, account_id: &str, card: &LinkCard) -> Result<Card, Error> {
        let path = CARDS.collection_path(account_id)?;
        check_string(card.card_number.as_str()).or(ValidationError::MissingCardNumber)?;

        self.inner.fetch(MoovRequest::post(path).json(card)?).await
    }
}

#[async_trait]
impl AccountResource for CardsApi {
    type Item = Card;

    #[tracing::instrument(name = "List Cards", skip(self))]
    async fn list(&self, account_id: &str) -> Result<Vec<Card>, Error> {
        CARDS.list(&self.inner, account_id).await
    }

    #[tracing::instrument(name = "Get Card", skip(self))]
    async fn get(&self, account_id: &str, card_id: &str) -> Result<Card, Error> {
        CARDS.get(&self.inner, account_id, card_id).await
    }
}

#[async_trait]
impl DisableResource for CardsApi {
    #[tracing::instrument(name = "Disable Card", skip(self))]
    async fn disable(&self, account_id: &str, card_id: &str) -> Result<(), Error> {
        CARDS.disable(&self.inner, account_id, card_id).await
    }
}
