//! APIs and models related to financial institutions.

mod api;
mod model;

pub use api::InstitutionsApi;
pub use model::*;
