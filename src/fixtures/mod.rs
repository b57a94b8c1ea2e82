// fixtures/mod.rs - Built-in product catalogs
//
// A fixture catalog is a fixed list of recommendation records. The SSR server
// serves one from its demo endpoint so the page works without an external
// recommendation service, and the tests use them as realistic payloads.

pub mod catalog;

pub use catalog::{DemoCatalog, MultiImageCatalog};

use crate::web_app::model::ProductRecord;

/// A fixed set of records shaped like the recommendation endpoint's response
pub trait FixtureCatalog {
    /// The records, in the order the endpoint returns them
    fn records() -> Vec<ProductRecord>;

    /// The records as the JSON array body the endpoint would send
    fn to_json() -> serde_json::Result<String> {
        serde_json::to_string(&Self::records())
    }
}
