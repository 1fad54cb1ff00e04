//! Cart line-item model.

use cornermarket_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// One product selected in the cart.
///
/// `quantity` is optional on purpose: a candidate passed to
/// [`crate::CartStore::add_to_cart`] carries no quantity yet, and the two
/// summary aggregates apply different defaults to a missing quantity
/// (1 in total-price math, 0 in item-count math). Keep the field optional;
/// do not collapse it to a plain integer with a single default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque unique identifier, immutable once created.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
    /// Units of this product in the cart. Absent for a fresh candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl LineItem {
    /// Create a candidate line item with no quantity set.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
            quantity: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cornermarket_core::CurrencyCode;

    #[test]
    fn test_candidate_has_no_quantity() {
        let item = LineItem::new(
            "prod-1",
            "Beanie",
            "https://img.example/beanie.png",
            Price::from_cents(1299, CurrencyCode::USD),
        );
        assert_eq!(item.quantity, None);
        assert_eq!(item.id.as_str(), "prod-1");
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut item = LineItem::new(
            "prod-2",
            "Mug",
            "https://img.example/mug.png",
            Price::from_cents(800, CurrencyCode::USD),
        );
        item.quantity = Some(3);

        let json = serde_json::to_string(&item).unwrap();
        let back: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_missing_quantity_omitted_from_json() {
        let item = LineItem::new("prod-3", "Cap", "", Price::ZERO);
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("quantity"));

        let back: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.quantity, None);
    }
}
