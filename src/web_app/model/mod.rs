// web_app/model/mod.rs - Shared data models for client and server
//
// Two shapes of a product live here:
// - ProductRecord: exactly what the recommendation endpoint sends
// - Product: the display record the widgets render, produced by MockEnrichment

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Lowest rating a synthesized product can carry
pub const RATING_FLOOR: u8 = 3;

/// Number of icons in a rating indicator
pub const RATING_MAX: u8 = 5;

/// Product as returned by the recommendation endpoint
///
/// Unknown fields are ignored and `null` counts as missing. Amounts may be
/// JSON numbers or numeric strings; an amount that is neither is dropped
/// rather than failing the whole list. A server-supplied `rating` is accepted
/// so the payload parses, but it is never carried into the display record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub handle: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
    #[serde(default, skip_serializing)]
    pub rating: Option<serde_json::Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// "24.99" and 24.99 both parse; anything else becomes None
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value::<Decimal>(v).ok()))
}

/// Product ready for display (price and rating always present)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub handle: String,
    pub product_type: String,
    pub images: Vec<String>,
    pub price: Decimal,
    pub discount: Option<Decimal>,
    pub rating: u8,
}

impl Product {
    /// First image URL, used as the thumbnail
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Price as a plain two-decimal amount, e.g. `42.50`
    pub fn price_amount(&self) -> String {
        format_price(self.price)
    }

    /// Discount badge text, e.g. `15% off`
    pub fn discount_label(&self) -> Option<String> {
        self.discount
            .filter(|d| !d.is_zero())
            .map(|d| format!("{}% off", d.normalize()))
    }
}

/// Format a decimal amount with exactly two fractional digits
pub fn format_price(price: Decimal) -> String {
    format!("{:.2}", price.round_dp(2))
}
