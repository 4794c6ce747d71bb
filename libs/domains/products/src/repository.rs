use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ReplaceProduct};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product, assigning its id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by id
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// List every product, ordered by id ascending
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Overwrite every mutable field of an existing product
    async fn replace(&self, id: i32, input: ReplaceProduct) -> ProductResult<Option<Product>>;

    /// Overwrite only the availability flag of an existing product
    async fn set_availability(
        &self,
        id: i32,
        availability: bool,
    ) -> ProductResult<Option<Product>>;

    /// Delete a product by id, reporting whether a record was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// Verify the backing store answers queries
    async fn ping(&self) -> ProductResult<()>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<i32, Product>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let product = Product::new(id, input);

        let mut products = self.products.write().await;
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by_key(|product| product.id);

        Ok(result)
    }

    async fn replace(&self, id: i32, input: ReplaceProduct) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let Some(product) = products.get_mut(&id) else {
            return Ok(None);
        };
        product.apply_replace(input);

        tracing::info!(product_id = id, "Replaced product");
        Ok(Some(product.clone()))
    }

    async fn set_availability(
        &self,
        id: i32,
        availability: bool,
    ) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let Some(product) = products.get_mut(&id) else {
            return Ok(None);
        };
        product.apply_availability(availability);

        tracing::info!(product_id = id, availability, "Updated product availability");
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        let removed = products.remove(&id).is_some();

        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }

    async fn ping(&self) -> ProductResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_owned(),
            price,
            availability: true,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(sample("Monitor", 300.0)).await.unwrap();
        let second = repo.create(sample("Keyboard", 45.0)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_all_orders_by_id() {
        let repo = InMemoryProductRepository::new();

        for (name, price) in [("Monitor", 300.0), ("Keyboard", 45.0), ("Mouse", 20.0)] {
            repo.create(sample(name, price)).await.unwrap();
        }

        let products = repo.list_all().await.unwrap();
        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_replace_missing_product_returns_none() {
        let repo = InMemoryProductRepository::new();

        let replaced = repo
            .replace(
                99,
                ReplaceProduct {
                    name: "Monitor".to_owned(),
                    price: 300.0,
                    availability: true,
                },
            )
            .await
            .unwrap();

        assert!(replaced.is_none());
    }

    #[tokio::test]
    async fn test_set_availability_keeps_other_fields() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(sample("Monitor", 300.0)).await.unwrap();

        let updated = repo
            .set_availability(created.id, false)
            .await
            .unwrap()
            .unwrap();

        assert!(!updated.availability);
        assert_eq!(updated.name, "Monitor");
        assert_eq!(updated.price, 300.0);
    }

    #[tokio::test]
    async fn test_delete_is_reported_once() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(sample("Monitor", 300.0)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
