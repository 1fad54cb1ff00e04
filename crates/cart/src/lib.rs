//! Corner Market cart state container.
//!
//! Tracks the products a shopper has selected, mirrors every mutation to a
//! persisted key-value slot, and derives the aggregates the floating cart
//! summary renders.
//!
//! # Architecture
//!
//! - [`store::CartStore`] owns the authoritative in-memory line-item list
//!   and performs the three mutations (add, increment, decrement), each
//!   followed by a full rewrite of the persisted slot.
//! - [`provider::CartProvider`] owns the store for the application session;
//!   consumers obtain a [`provider::CartHandle`] through
//!   [`provider::use_cart`], which fails fast outside an active provider.
//! - [`summary::FloatingCart`] is a read-only consumer deriving total price
//!   and item count from the current list; it never mutates the store.
//! - [`storage::CartStorage`] is the persistence port; file-backed and
//!   in-memory backends are provided.
//!
//! Data flows one way: store list -> derived aggregates -> summary view.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod storage;
pub mod store;
pub mod summary;

pub use config::CartConfig;
pub use error::{CartError, Result};
pub use models::LineItem;
pub use provider::{CartHandle, CartProvider, use_cart};
pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::CartStore;
pub use summary::{FloatingCart, FloatingCartView, Navigator};
