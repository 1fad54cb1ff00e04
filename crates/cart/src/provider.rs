//! Session-scoped ownership of the cart store.
//!
//! A [`CartProvider`] is constructed once per application session and owns
//! the [`CartStore`]. Consumers never hold the store directly: they call
//! [`use_cart`] with the provider reference they were given and receive a
//! [`CartHandle`] exposing the consumption contract (current products plus
//! the three mutations). Calling [`use_cart`] without an active provider is
//! a usage error and fails immediately, before any storage access.

use std::sync::Arc;

use cornermarket_core::ProductId;

use crate::error::{CartError, Result};
use crate::models::LineItem;
use crate::storage::CartStorage;
use crate::store::CartStore;

/// Owns the cart store for the duration of the application session.
pub struct CartProvider {
    store: Arc<CartStore>,
}

impl CartProvider {
    /// Create a provider with an empty, un-hydrated store.
    #[must_use]
    pub fn new(storage: Arc<dyn CartStorage>) -> Self {
        Self {
            store: Arc::new(CartStore::new(storage)),
        }
    }

    /// Create a provider and hydrate its store from the persisted slot.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the persisted slot cannot be read.
    pub async fn open(storage: Arc<dyn CartStorage>) -> Result<Self> {
        let provider = Self::new(storage);
        provider.store.hydrate().await?;
        Ok(provider)
    }
}

/// Obtain a cart handle from an active provider.
///
/// # Errors
///
/// Returns [`CartError::OutsideProvider`] when `provider` is `None`, i.e.
/// the caller is not nested under an active provider scope.
pub fn use_cart(provider: Option<&CartProvider>) -> Result<CartHandle> {
    let provider = provider.ok_or(CartError::OutsideProvider)?;
    Ok(CartHandle {
        store: Arc::clone(&provider.store),
    })
}

/// Consumer-facing view of the cart: current products plus the three
/// mutating operations.
#[derive(Clone)]
pub struct CartHandle {
    store: Arc<CartStore>,
}

impl CartHandle {
    /// Snapshot of the current line-item list.
    #[must_use]
    pub fn products(&self) -> Vec<LineItem> {
        self.store.products()
    }

    /// Add a candidate product to the cart. See [`CartStore::add_to_cart`].
    ///
    /// # Errors
    ///
    /// Returns an error if the persistence write fails.
    pub async fn add_to_cart(&self, product: LineItem) -> Result<()> {
        self.store.add_to_cart(product).await
    }

    /// Increase the quantity of `id` by 1. See [`CartStore::increment`].
    ///
    /// # Errors
    ///
    /// Returns an error if the persistence write fails.
    pub async fn increment(&self, id: &ProductId) -> Result<()> {
        self.store.increment(id).await
    }

    /// Decrease the quantity of `id` by 1. See [`CartStore::decrement`].
    ///
    /// # Errors
    ///
    /// Returns an error if the persistence write fails.
    pub async fn decrement(&self, id: &ProductId) -> Result<()> {
        self.store.decrement(id).await
    }
}
