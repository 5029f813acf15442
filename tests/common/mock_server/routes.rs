use super::{header_value, MockServerStorage};
use chrono::Utc;
use moov_rust::apis::{
    accounts::{Account, AccountCreate, Profile},
    transfers::{Amount, Refund, RefundCreate, RefundStatus, Transfer, TransferCreate, TransferStatus},
};
use serde_json::json;
use uuid::Uuid;
use wiremock::{Request, Respond, ResponseTemplate};

pub(super) fn display_name(profile: &Profile) -> Option<String> {
    match (&profile.individual, &profile.business) {
        (Some(individual), _) => Some(format!(
            "{} {}",
            individual.name.first_name, individual.name.last_name
        )),
        (None, Some(business)) => Some(business.legal_business_name.clone()),
        (None, None) => None,
    }
}

fn error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "error": message }))
}

/// Path segment at the given position, `/transfers/{id}` has the ID at position 1.
fn segment(request: &Request, position: usize) -> String {
    request
        .url
        .path_segments()
        .and_then(|mut segments| segments.nth(position))
        .unwrap_or_default()
        .to_string()
}

fn query(request: &Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// POST /accounts
pub(super) struct CreateAccount(pub(super) MockServerStorage);

impl Respond for CreateAccount {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let create = match request.body_json::<AccountCreate>() {
            Ok(create) => create,
            Err(_) => return error(400, "invalid account"),
        };

        if create.profile.individual.is_none() && create.profile.business.is_none() {
            return error(422, "profile is required");
        }

        let now = Utc::now();
        let account = Account {
            account_id: Uuid::new_v4().to_string(),
            account_type: create.account_type,
            display_name: display_name(&create.profile),
            profile: create.profile,
            metadata: create.metadata,
            foreign_id: create.foreign_id,
            verification: None,
            customer_support: create.customer_support,
            settings: create.settings,
            terms_of_service: None,
            created_on: now,
            updated_on: now,
        };

        self.0
            .write()
            .unwrap()
            .accounts
            .insert(account.account_id.clone(), account.clone());

        ResponseTemplate::new(200).set_body_json(account)
    }
}

/// GET /accounts
pub(super) struct ListAccounts(pub(super) MockServerStorage);

impl Respond for ListAccounts {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let name = query(request, "name").map(|name| name.to_lowercase());
        let count = query(request, "count")
            .and_then(|count| count.parse().ok())
            .unwrap_or(200);
        let skip = query(request, "skip")
            .and_then(|skip| skip.parse().ok())
            .unwrap_or(0);

        let storage = self.0.read().unwrap();
        let mut accounts = storage
            .accounts
            .values()
            .filter(|account| match (&name, &account.display_name) {
                (Some(name), Some(display_name)) => display_name.to_lowercase().contains(name),
                (Some(_), None) => false,
                (None, _) => true,
            })
            .cloned()
            .collect::<Vec<_>>();
        accounts.sort_by(|a, b| {
            a.created_on
                .cmp(&b.created_on)
                .then_with(|| a.account_id.cmp(&b.account_id))
        });

        let accounts = accounts
            .into_iter()
            .skip(skip)
            .take(count)
            .collect::<Vec<_>>();

        ResponseTemplate::new(200).set_body_json(accounts)
    }
}

/// GET /accounts/{id}
pub(super) struct GetAccount(pub(super) MockServerStorage);

impl Respond for GetAccount {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match self.0.read().unwrap().accounts.get(&segment(request, 1)) {
            Some(account) => ResponseTemplate::new(200).set_body_json(account),
            None => error(404, "account not found"),
        }
    }
}

/// GET /accounts/{id}/payment-methods
pub(super) struct ListPaymentMethods(pub(super) MockServerStorage);

impl Respond for ListPaymentMethods {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let account_id = segment(request, 1);
        let storage = self.0.read().unwrap();

        if !storage.accounts.contains_key(&account_id) {
            return error(404, "account not found");
        }

        let payment_methods = storage
            .payment_methods
            .values()
            .filter(|pm| {
                pm.account
                    .as_ref()
                    .map(|account| account.account_id == account_id)
                    .unwrap_or(false)
            })
            .cloned()
            .collect::<Vec<_>>();

        ResponseTemplate::new(200).set_body_json(payment_methods)
    }
}

/// POST /transfers
pub(super) struct CreateTransfer(pub(super) MockServerStorage);

impl Respond for CreateTransfer {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let idempotency_key = match header_value(request, "x-idempotency-key") {
            Some(key) if !key.is_empty() => key,
            _ => return error(400, "missing idempotency key"),
        };

        let mut storage = self.0.write().unwrap();
        if let Some(replayed) = storage.idempotent_responses.get(&idempotency_key) {
            return ResponseTemplate::new(200).set_body_json(replayed.clone());
        }

        let create = match request.body_json::<TransferCreate>() {
            Ok(create) => create,
            Err(_) => return error(400, "invalid transfer"),
        };

        if create.amount.value <= 0 {
            return error(422, "amount must be positive");
        }

        let source = match create
            .source
            .payment_method_id
            .as_ref()
            .and_then(|id| storage.payment_methods.get(id))
        {
            Some(source) => source.clone(),
            None => return error(422, "unknown source payment method"),
        };
        let destination = match storage
            .payment_methods
            .get(&create.destination.payment_method_id)
        {
            Some(destination) => destination.clone(),
            None => return error(422, "unknown destination payment method"),
        };

        let transfer = Transfer {
            transfer_id: Uuid::new_v4().to_string(),
            created_on: Utc::now(),
            status: TransferStatus::Created,
            source,
            destination,
            amount: create.amount,
            description: create.description,
            metadata: create.metadata,
            refunded_amount: None,
            refunds: vec![],
            facilitator_fee: create.facilitator_fee,
            moov_fee: None,
            moov_fee_decimal: None,
        };

        let response = json!({
            "transferID": transfer.transfer_id,
            "createdOn": transfer.created_on,
        });
        storage
            .idempotent_responses
            .insert(idempotency_key, response.clone());
        storage
            .transfers
            .insert(transfer.transfer_id.clone(), transfer);

        ResponseTemplate::new(200).set_body_json(response)
    }
}

/// GET /transfers/{id}
pub(super) struct GetTransfer(pub(super) MockServerStorage);

impl Respond for GetTransfer {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match self.0.read().unwrap().transfers.get(&segment(request, 1)) {
            Some(transfer) => ResponseTemplate::new(200).set_body_json(transfer),
            None => error(404, "transfer not found"),
        }
    }
}

/// POST /transfers/{id}/refunds
pub(super) struct CreateRefund(pub(super) MockServerStorage);

impl Respond for CreateRefund {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let idempotency_key = match header_value(request, "x-idempotency-key") {
            Some(key) if !key.is_empty() => key,
            _ => return error(400, "missing idempotency key"),
        };

        let mut storage = self.0.write().unwrap();
        if let Some(replayed) = storage.idempotent_responses.get(&idempotency_key) {
            return ResponseTemplate::new(200).set_body_json(replayed.clone());
        }

        // No body means a full refund
        let refund_create = if request.body.is_empty() {
            RefundCreate::default()
        } else {
            match request.body_json::<RefundCreate>() {
                Ok(refund_create) => refund_create,
                Err(_) => return error(400, "invalid refund"),
            }
        };

        let transfer = match storage.transfers.get_mut(&segment(request, 1)) {
            Some(transfer) => transfer,
            None => return error(404, "transfer not found"),
        };

        let already_refunded = transfer
            .refunded_amount
            .as_ref()
            .map(|amount| amount.value)
            .unwrap_or(0);
        let refundable = transfer.amount.value - already_refunded;
        let value = refund_create.amount.unwrap_or(refundable);
        if value <= 0 || value > refundable {
            return error(422, "amount exceeds the refundable amount");
        }

        let now = Utc::now();
        let refund = Refund {
            refund_id: Uuid::new_v4().to_string(),
            created_on: now,
            updated_on: now,
            status: RefundStatus::Created,
            amount: Amount::new(value, transfer.amount.currency.clone()),
        };

        transfer.refunds.push(refund.clone());
        transfer.refunded_amount = Some(Amount::new(
            already_refunded + value,
            transfer.amount.currency.clone(),
        ));

        let response = json!(refund);
        storage
            .idempotent_responses
            .insert(idempotency_key, response.clone());

        ResponseTemplate::new(200).set_body_json(response)
    }
}

/// GET /transfers/{id}/refunds
pub(super) struct ListRefunds(pub(super) MockServerStorage);

impl Respond for ListRefunds {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match self.0.read().unwrap().transfers.get(&segment(request, 1)) {
            Some(transfer) => ResponseTemplate::new(200).set_body_json(&transfer.refunds),
            None => error(404, "transfer not found"),
        }
    }
}
