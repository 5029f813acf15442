//! APIs and models related to account capabilities.

mod api;
mod model;

pub use api::CapabilitiesApi;
pub use model::*;
