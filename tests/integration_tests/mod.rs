mod accounts;
mod payment_methods;
mod refunds;
mod transfers;
