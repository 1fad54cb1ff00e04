//! The authoritative cart store.
//!
//! [`CartStore`] owns the in-memory line-item list and mirrors every
//! mutation to the persisted slot under [`STORAGE_KEY`]. Mutations follow
//! filter-out-then-prepend semantics: the touched item becomes first and
//! the remaining items keep their previous relative order.
//!
//! # Concurrency
//!
//! Operations run on whatever task invokes them and are not serialized
//! against each other. Each one snapshots the list at call time, installs
//! its result in memory, and only then awaits the persistence write; two
//! overlapping operations can therefore compute against stale snapshots,
//! and the last write to settle wins in storage. The in-memory lock is
//! never held across an await point.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tracing::instrument;

use cornermarket_core::ProductId;

use crate::error::Result;
use crate::models::LineItem;
use crate::storage::CartStorage;

/// Fixed key of the persisted cart slot.
pub const STORAGE_KEY: &str = "@CornerMarket:products";

/// Cart state container: in-memory list plus persisted mirror.
pub struct CartStore {
    storage: Arc<dyn CartStorage>,
    products: RwLock<Vec<LineItem>>,
    hydrated: AtomicBool,
}

impl CartStore {
    /// Create an empty store backed by `storage`.
    ///
    /// The store starts empty; call [`Self::hydrate`] to load the persisted
    /// list from a previous session.
    #[must_use]
    pub fn new(storage: Arc<dyn CartStorage>) -> Self {
        Self {
            storage,
            products: RwLock::new(Vec::new()),
            hydrated: AtomicBool::new(false),
        }
    }

    /// Load the persisted list into memory, once per store.
    ///
    /// Subsequent calls are no-ops, including after a failed load: the
    /// hydration read is never retried. An absent slot leaves the cart
    /// empty; a slot that fails to decode is logged and treated as empty.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CartError::Storage`] if the slot cannot be read.
    #[instrument(skip(self))]
    pub async fn hydrate(&self) -> Result<()> {
        if self.hydrated.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let Some(raw) = self.storage.get(STORAGE_KEY).await? else {
            tracing::debug!("no persisted cart found, starting empty");
            return Ok(());
        };

        match serde_json::from_str::<Vec<LineItem>>(&raw) {
            Ok(items) => {
                tracing::debug!(count = items.len(), "hydrated cart from storage");
                self.install(items);
            }
            Err(e) => {
                tracing::warn!("persisted cart is malformed, starting empty: {e}");
            }
        }

        Ok(())
    }

    /// Snapshot of the current line-item list.
    #[must_use]
    pub fn products(&self) -> Vec<LineItem> {
        self.products
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Add a candidate product to the cart.
    ///
    /// A product whose id is not yet in the cart is given quantity 1 and
    /// inserted at the front. A product whose id is already present is
    /// moved to the front with its stored quantity unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the persistence write fails; the in-memory list
    /// keeps the new state regardless.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn add_to_cart(&self, product: LineItem) -> Result<()> {
        let products = self.products();

        let existing = products.iter().find(|p| p.id == product.id).cloned();

        let next = if let Some(existing) = existing {
            // Duplicate adds keep the stored quantity; callers that want
            // more units go through increment.
            // TODO: confirm with product whether adding an item already in
            // the cart should bump its quantity instead.
            let existing_id = existing.id.clone();
            let others = products.into_iter().filter(move |p| p.id != existing_id);
            std::iter::once(existing).chain(others).collect()
        } else {
            let mut candidate = product;
            candidate.quantity = Some(1);
            std::iter::once(candidate).chain(products).collect()
        };

        self.install_and_persist(next).await
    }

    /// Increase the quantity of the item with `id` by 1 and move it to the
    /// front. An item with no quantity gets quantity 1.
    ///
    /// An `id` that matches nothing falls back to an empty placeholder
    /// item, which ends up prepended with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the persistence write fails; the in-memory list
    /// keeps the new state regardless.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn increment(&self, id: &ProductId) -> Result<()> {
        let products = self.products();

        let mut item = products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .unwrap_or_default();
        item.quantity = Some(item.quantity.map_or(1, |q| q.saturating_add(1)));

        let others = products.into_iter().filter(|p| &p.id != id);
        let next = std::iter::once(item).chain(others).collect();

        self.install_and_persist(next).await
    }

    /// Decrease the quantity of the item with `id` by 1.
    ///
    /// A quantity that reaches 0 removes the item from the cart entirely;
    /// otherwise the item moves to the front with the reduced quantity.
    /// An item with no quantity floors at 0 (and is removed), never
    /// negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the persistence write fails; the in-memory list
    /// keeps the new state regardless.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn decrement(&self, id: &ProductId) -> Result<()> {
        let products = self.products();

        let mut item = products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .unwrap_or_default();
        let quantity = match item.quantity {
            Some(q) if q > 0 => q - 1,
            _ => 0,
        };

        let others: Vec<LineItem> = products.into_iter().filter(|p| &p.id != id).collect();

        let next = if quantity == 0 {
            others
        } else {
            item.quantity = Some(quantity);
            std::iter::once(item).chain(others).collect()
        };

        self.install_and_persist(next).await
    }

    /// Replace the in-memory list.
    fn install(&self, next: Vec<LineItem>) {
        let mut products = self
            .products
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *products = next;
    }

    /// Install `next` in memory, then overwrite the persisted slot with it.
    ///
    /// Memory is updated before the write settles, so a write failure
    /// leaves memory and storage diverged. There is no rollback.
    async fn install_and_persist(&self, next: Vec<LineItem>) -> Result<()> {
        let serialized = serde_json::to_string(&next)?;
        self.install(next);
        self.storage.set(STORAGE_KEY, serialized).await?;
        Ok(())
    }
}
