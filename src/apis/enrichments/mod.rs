//! APIs and models related to enrichment data.

mod api;
mod model;

pub use api::EnrichmentsApi;
pub use model::*;
