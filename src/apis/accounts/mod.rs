//! APIs and models related to Moov accounts.

mod api;
mod model;

pub use api::AccountsApi;
pub use model::*;
