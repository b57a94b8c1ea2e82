// fixtures/catalog.rs
//
// Recommendation records for a small underwear storefront. The records carry
// no price or rating, so every one of them goes through mock enrichment.

use crate::fixtures::FixtureCatalog;
use crate::web_app::model::ProductRecord;

const CDN: &str = "https://cdn.shopify.com/s/files/1/1853/5335/files";

fn record(id: u64, title: &str, handle: &str, product_type: &str, images: &[&str]) -> ProductRecord {
    ProductRecord {
        id,
        title: title.to_string(),
        handle: handle.to_string(),
        product_type: product_type.to_string(),
        images: images.iter().map(|path| format!("{}/{}", CDN, path)).collect(),
        price: None,
        discount: None,
        rating: None,
    }
}

/// Four recommendations with one image each
pub struct DemoCatalog;

impl FixtureCatalog for DemoCatalog {
    fn records() -> Vec<ProductRecord> {
        vec![
            record(
                6605868728392,
                "Women's Body Shorts - Stone",
                "womens-body-shorts-boxer-stone",
                "Womens Boxer",
                &["240515_S1_2_WOMANS_1097.jpg?v=1717557980"],
            ),
            record(
                6703687434312,
                "Women's Body Shorts - Hot Sauce",
                "womens-body-shorts-hot-sauce",
                "Womens Boxer",
                &["240515_S1_2_WOMANS_1130.jpg?v=1717594634"],
            ),
            record(
                6765280034888,
                "Women's SmoothFit Bikini Brief - Rosé All Day",
                "womens-smoothfit-bikini-brief-rose-all-day",
                "SmoothFit Bikini Brief",
                &["240515_S1_2_WOMANS_0811.jpg?v=1717504741"],
            ),
            record(
                6780035235912,
                "Trunk - Megalodong",
                "trunk-megalodong",
                "Trunk",
                &["ECOMM-08copy_e7010446-533d-4889-a397-65c269932bfb.jpg?v=1717504666"],
            ),
        ]
    }
}

/// A single recommendation with a three-image gallery
pub struct MultiImageCatalog;

impl FixtureCatalog for MultiImageCatalog {
    fn records() -> Vec<ProductRecord> {
        vec![record(
            6605868728392,
            "Women's Body Shorts - Stone",
            "womens-body-shorts-boxer-stone",
            "Womens Boxer",
            &[
                "240515_S1_2_WOMANS_1097.jpg?v=1717557980",
                "240515_S1_2_WOMANS_1107.jpg?v=1717557965",
                "240515_S1_2_WOMANS_1114.jpg?v=1717557988",
            ],
        )]
    }
}
