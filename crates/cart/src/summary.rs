//! Floating cart summary.
//!
//! A read-only consumer of the store's current list: it derives the total
//! price and total item count, formats the total for display, and exposes a
//! pressable affordance that requests navigation to the cart screen. It
//! never mutates the store.
//!
//! The two aggregates apply different defaults to a missing quantity: the
//! total treats it as 1, the item count treats it as 0. This asymmetry is
//! load-bearing observed behavior; keep both defaults as they are.

use std::sync::Arc;

use rust_decimal::Decimal;

use cornermarket_core::Price;

use crate::models::LineItem;

/// Named navigation routes.
pub mod routes {
    /// Cart detail screen.
    pub const CART: &str = "Cart";
}

/// Navigation service keyed by named routes.
pub trait Navigator: Send + Sync {
    /// Request navigation to `route`. No parameters are passed.
    fn navigate(&self, route: &str);
}

/// Total price of the cart: sum of `price * quantity`, with a missing
/// quantity counted as 1.
///
/// Assumes a single-currency cart: the catalog prices everything in the
/// store's one currency, so the total is labeled with the first item's
/// currency code. A mixed-currency list still sums the raw amounts.
#[must_use]
pub fn cart_total(products: &[LineItem]) -> Price {
    let amount = products.iter().fold(Decimal::ZERO, |acc, product| {
        let quantity = product.quantity.unwrap_or(1);
        acc + product.price.amount * Decimal::from(quantity)
    });

    let currency_code = products
        .first()
        .map(|p| p.price.currency_code)
        .unwrap_or_default();

    Price::new(amount, currency_code)
}

/// Total number of units in the cart: sum of quantities, with a missing
/// quantity counted as 0.
#[must_use]
pub fn total_items_in_cart(products: &[LineItem]) -> u32 {
    products.iter().fold(0u32, |acc, product| {
        acc.saturating_add(product.quantity.unwrap_or(0))
    })
}

/// Summary display data, recomputed whenever the list changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingCartView {
    /// Total units in the cart.
    pub item_count: u32,
    /// Formatted total price (e.g., "$25.00").
    pub total: String,
}

impl FloatingCartView {
    /// View of an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            item_count: 0,
            total: Price::ZERO.display(),
        }
    }
}

impl From<&[LineItem]> for FloatingCartView {
    fn from(products: &[LineItem]) -> Self {
        Self {
            item_count: total_items_in_cart(products),
            total: cart_total(products).display(),
        }
    }
}

/// The floating summary widget: derived aggregates plus a navigation
/// affordance.
pub struct FloatingCart {
    navigator: Arc<dyn Navigator>,
}

impl FloatingCart {
    /// Create a summary widget wired to a navigation service.
    #[must_use]
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    /// Derive the display data for the current list.
    #[must_use]
    pub fn view(&self, products: &[LineItem]) -> FloatingCartView {
        FloatingCartView::from(products)
    }

    /// Activation of the pressable control: request navigation to the cart
    /// detail screen.
    pub fn press(&self) {
        self.navigator.navigate(routes::CART);
    }
}
