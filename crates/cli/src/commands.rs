//! Cart subcommand implementations.
//!
//! Every command opens the provider for the duration of one invocation:
//! load config, hydrate from the persisted slot, perform the operation,
//! print the summary line.

use std::sync::Arc;

use rust_decimal::Decimal;

use cornermarket_cart::{
    CartConfig, CartHandle, CartProvider, FileStorage, FloatingCartView, LineItem, use_cart,
};
use cornermarket_core::{CurrencyCode, Price};

type Error = Box<dyn std::error::Error>;

/// Open a hydrated cart handle from the configured storage directory.
async fn open_cart() -> Result<CartHandle, Error> {
    let config = CartConfig::from_env()?;
    let provider = CartProvider::open(Arc::new(FileStorage::new(config.storage_dir))).await?;
    let cart = use_cart(Some(&provider))?;
    Ok(cart)
}

/// Add a product to the cart.
pub async fn add(id: &str, title: &str, image_url: &str, price: &str) -> Result<(), Error> {
    let amount: Decimal = price.parse()?;
    let cart = open_cart().await?;

    cart.add_to_cart(LineItem::new(
        id,
        title,
        image_url,
        Price::new(amount, CurrencyCode::USD),
    ))
    .await?;

    print_summary(&cart);
    Ok(())
}

/// Increase a product's quantity by one.
pub async fn increment(id: &str) -> Result<(), Error> {
    let cart = open_cart().await?;
    cart.increment(&id.into()).await?;
    print_summary(&cart);
    Ok(())
}

/// Decrease a product's quantity by one.
pub async fn decrement(id: &str) -> Result<(), Error> {
    let cart = open_cart().await?;
    cart.decrement(&id.into()).await?;
    print_summary(&cart);
    Ok(())
}

/// Print the floating cart summary.
pub async fn show() -> Result<(), Error> {
    let cart = open_cart().await?;
    print_summary(&cart);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_summary(cart: &CartHandle) {
    let view = FloatingCartView::from(cart.products().as_slice());
    println!("{} items - {}", view.item_count, view.total);
}
