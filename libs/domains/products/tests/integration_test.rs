//! Integration tests for the Products domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Database queries work correctly
//! - The serial id column and defaults behave as expected
//! - Updates touch only the intended columns
//!
//! They are ignored by default; run `cargo test -- --ignored` on a machine
//! with a Docker daemon.

use domain_products::*;
use test_utils::{TestDatabase, TestDataBuilder, assertions::*};

fn product(name: String, price: f64) -> CreateProduct {
    CreateProduct {
        name,
        price,
        availability: true,
    }
}

#[tokio::test]
#[ignore] // Requires a Docker daemon
async fn test_create_and_get_product() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let input = product(builder.name("product", "main"), 300.0);
    let created = repo.create(input.clone()).await.unwrap();

    assert!(created.id >= 1);
    assert_eq!(created.name, input.name);
    assert_eq!(created.price, 300.0);
    assert!(created.availability);

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "product should exist");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.name, created.name);
}

#[tokio::test]
#[ignore] // Requires a Docker daemon
async fn test_list_all_orders_by_id() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_ordered");

    for (suffix, price) in [("monitor", 300.0), ("keyboard", 45.0), ("mouse", 20.0)] {
        repo.create(product(builder.name("product", suffix), price))
            .await
            .unwrap();
    }

    let products = repo.list_all().await.unwrap();

    assert_eq!(products.len(), 3);
    assert!(products.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[tokio::test]
#[ignore] // Requires a Docker daemon
async fn test_replace_overwrites_every_field() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("replace");

    let created = repo
        .create(product(builder.name("product", "before"), 300.0))
        .await
        .unwrap();

    let replaced = repo
        .replace(
            created.id,
            ReplaceProduct {
                name: builder.name("product", "after"),
                price: 3000.0,
                availability: false,
            },
        )
        .await
        .unwrap();
    let replaced = assert_some(replaced, "product should exist");

    assert_eq!(replaced.name, builder.name("product", "after"));
    assert_eq!(replaced.price, 3000.0);
    assert!(!replaced.availability);
    assert!(replaced.updated_at >= created.updated_at);
}

#[tokio::test]
#[ignore] // Requires a Docker daemon
async fn test_replace_missing_product_returns_none() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("replace_missing");

    let replaced = repo
        .replace(
            2000,
            ReplaceProduct {
                name: builder.name("product", "ghost"),
                price: 300.0,
                availability: true,
            },
        )
        .await
        .unwrap();

    assert!(replaced.is_none());
}

#[tokio::test]
#[ignore] // Requires a Docker daemon
async fn test_set_availability_keeps_other_fields() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("set_availability");

    let created = repo
        .create(product(builder.name("product", "main"), 300.0))
        .await
        .unwrap();

    let updated = repo.set_availability(created.id, false).await.unwrap();
    let updated = assert_some(updated, "product should exist");

    assert!(!updated.availability);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.price, created.price);
}

#[tokio::test]
#[ignore] // Requires a Docker daemon
async fn test_delete_is_reported_once() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete_once");

    let created = repo
        .create(product(builder.name("product", "main"), 300.0))
        .await
        .unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires a Docker daemon
async fn test_ping_answers_on_a_live_connection() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    repo.ping().await.unwrap();
}
