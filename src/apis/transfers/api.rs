use crate::{
    apis::{
        transfers::{
            AvailableTransferOptions, Refund, RefundCreate, Transfer, TransferCreate,
            TransferListCriteria, TransferOptionsCriteria, TransferResponse,
        },
        MoovClientInner,
    },
    common::{self, idempotency_header},
    error::ValidationError,
    query::with_query,
    request::MoovRequest,
    validation::{check, check_id, check_string},
    Error,
};
use serde_json::json;
use std::{collections::HashMap, sync::Arc};

/// Moov transfers and refunds APIs client.
///
/// Transfer and refund creation carry an idempotency key. When no key is given, a new random
/// one is generated on every call: retrying such a call creates a new transfer. Pass the same
/// key to every attempt to make retries safe.
#[derive(Clone, Debug)]
pub struct TransfersApi {
    inner: Arc<MoovClientInner>,
}

impl TransfersApi {
    pub(crate) fn new(inner: Arc<MoovClientInner>) -> Self {
        Self { inner }
    }

    /// Moves money from a source to a destination payment method.
    #[tracing::instrument(
        name = "Create Transfer",
        skip(self, transfer, idempotency_key),
        fields(
            amount = transfer.amount.value,
            currency = %transfer.amount.currency,
        )
    )]
    pub async fn create(
        &self,
        transfer: &TransferCreate,
        idempotency_key: Option<&str>,
    ) -> Result<TransferResponse, Error> {
        if !check_string(transfer.source.payment_method_id.as_deref()).passed()
            && !check_string(transfer.source.transfer_id.as_deref()).passed()
        {
            return Err(ValidationError::MissingTransferSource.into());
        }
        check_string(transfer.destination.payment_method_id.as_str())
            .or(ValidationError::MissingPaymentMethodId)?;
        let (name, value) = idempotency_header(idempotency_key)?;

        self.inner
            .fetch(
                MoovRequest::post("transfers")
                    .header(name, value)
                    .json(transfer)?,
            )
            .await
    }

    /// Lists the transfers of the facilitator account, filtered by `criteria`.
    #[tracing::instrument(name = "List Transfers", skip(self))]
    pub async fn list(&self, criteria: &TransferListCriteria) -> Result<Vec<Transfer>, Error> {
        self.inner
            .fetch(MoovRequest::get(with_query("transfers".into(), criteria)))
            .await
    }

    /// Gets the details of an existing transfer.
    #[tracing::instrument(name = "Get Transfer", skip(self))]
    pub async fn get(&self, transfer_id: &str) -> Result<Transfer, Error> {
        let path = transfer_path(transfer_id)?;

        self.inner.fetch(MoovRequest::get(path)).await
    }

    /// Replaces the metadata of a transfer.
    #[tracing::instrument(name = "Update Transfer Metadata", skip(self, metadata))]
    pub async fn update_metadata(
        &self,
        transfer_id: &str,
        metadata: &HashMap<String, String>,
    ) -> Result<Transfer, Error> {
        let path = transfer_path(transfer_id)?;
        check(metadata).or(ValidationError::MissingMetadata)?;

        self.inner
            .fetch(MoovRequest::patch(path).json(&json!({ "metadata": metadata }))?)
            .await
    }

    /// Lists the payment methods which can be used as source and destination of a transfer.
    #[tracing::instrument(name = "Get Transfer Options", skip(self, criteria))]
    pub async fn get_transfer_options(
        &self,
        criteria: &TransferOptionsCriteria,
    ) -> Result<AvailableTransferOptions, Error> {
        if criteria.source.is_none() && criteria.destination.is_none() {
            return Err(ValidationError::MissingTransferOptionCriteria.into());
        }

        self.inner
            .fetch(MoovRequest::post("transfer-options").json(criteria)?)
            .await
    }

    /// Refunds a card payment, in full or partially.
    #[tracing::instrument(name = "Refund Transfer", skip(self, idempotency_key, refund))]
    pub async fn refund(
        &self,
        transfer_id: &str,
        idempotency_key: Option<&str>,
        refund: Option<&RefundCreate>,
    ) -> Result<Refund, Error> {
        let path = format!("{}/refunds", transfer_path(transfer_id)?);
        let (name, value) = idempotency_header(idempotency_key)?;

        let mut request = MoovRequest::post(path).header(name, value);
        if let Some(refund) = refund {
            request = request.json(refund)?;
        }

        self.inner.fetch(request).await
    }

    /// Lists the refunds of a transfer.
    #[tracing::instrument(name = "List Refunds", skip(self))]
    pub async fn list_refunds(&self, transfer_id: &str) -> Result<Vec<Refund>, Error> {
        let path = format!("{}/refunds", transfer_path(transfer_id)?);

        self.inner.fetch(MoovRequest::get(path)).await
    }

    /// Gets the details of a refund.
    #[tracing::instrument(name = "Get Refund", skip(self))]
    pub async fn get_refund(&self, transfer_id: &str, refund_id: &str) -> Result<Refund, Error> {
        let transfer = transfer_path(transfer_id)?;
        check_id(refund_id).or(ValidationError::MissingRefundId)?;

        self.inner
            .fetch(MoovRequest::get(format!(
                "{}/refunds/{}",
                transfer,
                common::path(&[refund_id])
            )))
            .await
    }
}

fn transfer_path(transfer_id: &str) -> Result<String, Error> {
    check_id(transfer_id).or(ValidationError::MissingTransferId)?;

    Ok(common::path(&["transfers", transfer_id]))
}
