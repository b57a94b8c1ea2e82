// web_app/enrichment.rs - Mock enrichment of recommendation records
//
// The recommendation endpoint does not send prices for every product and its
// ratings are not used. Until the backend supplies real values, this step
// fills them with placeholders:
// - price: server value if present, otherwise a random amount in [0, 100)
// - rating: always a random integer in [RATING_FLOOR, RATING_MAX]
//
// Seeded mode makes the placeholders reproducible, Disabled mode removes the
// randomness entirely.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::web_app::model::{Product, ProductRecord, RATING_FLOOR, RATING_MAX};

/// Placeholder prices are drawn in whole cents below this bound (i.e. < 100.00)
const PRICE_CEILING_CENTS: i64 = 10_000;

/// How missing display fields are synthesized
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrichmentMode {
    /// Fresh randomness per enrichment pass
    #[default]
    Random,
    /// Reproducible randomness
    Seeded(u64),
    /// No randomness: missing price becomes 0.00, rating becomes the floor
    Disabled,
}

impl std::fmt::Display for EnrichmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrichmentMode::Random => write!(f, "random"),
            EnrichmentMode::Seeded(seed) => write!(f, "seeded({})", seed),
            EnrichmentMode::Disabled => write!(f, "disabled"),
        }
    }
}

/// Placeholder price/rating synthesis applied to every fetched record
pub struct MockEnrichment {
    rng: Option<StdRng>,
}

impl MockEnrichment {
    pub fn new(mode: EnrichmentMode) -> Self {
        let rng = match mode {
            EnrichmentMode::Random => Some(StdRng::from_entropy()),
            EnrichmentMode::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
            EnrichmentMode::Disabled => None,
        };
        Self { rng }
    }

    /// Turn wire records into display products, preserving order
    pub fn enrich(&mut self, records: Vec<ProductRecord>) -> Vec<Product> {
        records.into_iter().map(|record| self.enrich_one(record)).collect()
    }

    fn enrich_one(&mut self, record: ProductRecord) -> Product {
        let server_price = record.price.and_then(to_amount);
        let price = match server_price {
            Some(price) => price,
            None => self.placeholder_price(),
        };

        Product {
            id: record.id,
            title: record.title,
            handle: record.handle,
            product_type: record.product_type,
            images: record.images,
            price,
            discount: record.discount.and_then(to_amount),
            rating: self.placeholder_rating(),
        }
    }

    fn placeholder_price(&mut self) -> Decimal {
        match self.rng.as_mut() {
            Some(rng) => Decimal::new(rng.gen_range(0..PRICE_CEILING_CENTS), 2),
            None => Decimal::new(0, 2),
        }
    }

    // A 1..=5 draw floored at RATING_FLOOR; low draws collapse onto the floor.
    fn placeholder_rating(&mut self) -> u8 {
        match self.rng.as_mut() {
            Some(rng) => rng.gen_range(1..=RATING_MAX).max(RATING_FLOOR),
            None => RATING_FLOOR,
        }
    }
}

impl Default for MockEnrichment {
    fn default() -> Self {
        Self::new(EnrichmentMode::default())
    }
}

fn to_amount(value: Decimal) -> Option<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return None;
    }
    Some(value.round_dp(2))
}
