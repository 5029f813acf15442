//! APIs and models related to business representatives.

mod api;
mod model;

pub use api::RepresentativesApi;
pub use model::*;
