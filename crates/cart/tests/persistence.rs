//! End-to-end persistence tests over the file backend.
//!
//! A fresh provider must rehydrate exactly what a previous session's
//! mutations left in the persisted slot.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;
use std::sync::Arc;

use cornermarket_cart::{CartProvider, FileStorage, LineItem, use_cart};
use cornermarket_core::{CurrencyCode, Price};

fn temp_root() -> PathBuf {
    std::env::temp_dir().join(format!("cornermarket-test-{}", uuid::Uuid::new_v4()))
}

fn item(id: &str, cents: u64) -> LineItem {
    LineItem::new(
        id,
        format!("Product {id}"),
        format!("https://img.example/{id}.png"),
        Price::from_cents(cents, CurrencyCode::USD),
    )
}

#[tokio::test]
async fn fresh_session_rehydrates_previous_mutations() {
    let root = temp_root();

    {
        let provider = CartProvider::open(Arc::new(FileStorage::new(&root)))
            .await
            .unwrap();
        let cart = use_cart(Some(&provider)).unwrap();

        cart.add_to_cart(item("a", 1000)).await.unwrap();
        cart.add_to_cart(item("b", 500)).await.unwrap();
        cart.increment(&"a".into()).await.unwrap();
    }

    let provider = CartProvider::open(Arc::new(FileStorage::new(&root)))
        .await
        .unwrap();
    let cart = use_cart(Some(&provider)).unwrap();

    let products = cart.products();
    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert_eq!(products.first().unwrap().quantity, Some(2));

    tokio::fs::remove_dir_all(&root).await.unwrap();
}

#[tokio::test]
async fn decrement_to_zero_survives_restart() {
    let root = temp_root();

    {
        let provider = CartProvider::open(Arc::new(FileStorage::new(&root)))
            .await
            .unwrap();
        let cart = use_cart(Some(&provider)).unwrap();

        cart.add_to_cart(item("a", 1000)).await.unwrap();
        cart.add_to_cart(item("b", 500)).await.unwrap();
        cart.decrement(&"b".into()).await.unwrap();
    }

    let provider = CartProvider::open(Arc::new(FileStorage::new(&root)))
        .await
        .unwrap();
    let cart = use_cart(Some(&provider)).unwrap();

    let products = cart.products();
    assert_eq!(products.len(), 1);
    assert_eq!(products.first().unwrap().id.as_str(), "a");

    tokio::fs::remove_dir_all(&root).await.unwrap();
}

#[tokio::test]
async fn first_session_starts_empty() {
    let root = temp_root();

    let provider = CartProvider::open(Arc::new(FileStorage::new(&root)))
        .await
        .unwrap();
    let cart = use_cart(Some(&provider)).unwrap();
    assert!(cart.products().is_empty());
}
