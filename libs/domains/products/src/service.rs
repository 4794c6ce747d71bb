//! Product Service - Business logic layer

use std::sync::Arc;

use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ReplaceProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer turns repository lookups into domain outcomes: an empty
/// lookup becomes a not-found error, a missing patch value becomes a
/// precondition error.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every product, ordered by id
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list_all().await
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    /// Replace every mutable field of an existing product
    #[instrument(skip(self, input))]
    pub async fn replace_product(&self, id: i32, input: ReplaceProduct) -> ProductResult<Product> {
        self.repository
            .replace(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Update the availability flag of an existing product.
    ///
    /// The record lookup runs before the flag is inspected: a missing record
    /// answers not-found even when the request carried no availability value.
    #[instrument(skip(self))]
    pub async fn change_availability(
        &self,
        id: i32,
        availability: Option<bool>,
    ) -> ProductResult<Product> {
        self.get_product(id).await?;

        let availability = availability.ok_or(ProductError::MissingAvailability)?;

        self.repository
            .set_availability(id, availability)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }

    /// Report whether the backing store answers queries
    pub async fn ping(&self) -> ProductResult<()> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_product(id: i32) -> Product {
        Product {
            id,
            name: "Monitor".to_owned(),
            price: 300.0,
            availability: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_product_maps_empty_lookup_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(99))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(99).await;

        assert!(matches!(result, Err(ProductError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_change_availability_reports_missing_record_first() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));
        // set_availability must not be reached

        let service = ProductService::new(mock_repo);
        let result = service.change_availability(42, None).await;

        assert!(matches!(result, Err(ProductError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_change_availability_requires_a_value_for_existing_records() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(5))
            .returning(|id| Ok(Some(sample_product(id))));

        let service = ProductService::new(mock_repo);
        let result = service.change_availability(5, None).await;

        assert!(matches!(result, Err(ProductError::MissingAvailability)));
    }

    #[tokio::test]
    async fn test_change_availability_sets_the_flag() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(5))
            .returning(|id| Ok(Some(sample_product(id))));
        mock_repo
            .expect_set_availability()
            .with(eq(5), eq(false))
            .returning(|id, availability| {
                Ok(Some(Product {
                    availability,
                    ..sample_product(id)
                }))
            });

        let service = ProductService::new(mock_repo);
        let updated = service.change_availability(5, Some(false)).await.unwrap();

        assert!(!updated.availability);
    }

    #[tokio::test]
    async fn test_delete_product_maps_no_removal_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().with(eq(7)).returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let result = service.delete_product(7).await;

        assert!(matches!(result, Err(ProductError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_replace_product_maps_empty_lookup_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_replace()
            .with(eq(3), mockall::predicate::always())
            .returning(|_, _| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service
            .replace_product(
                3,
                ReplaceProduct {
                    name: "Monitor".to_owned(),
                    price: 300.0,
                    availability: true,
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_surfaced_database_errors_keep_their_details() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list_all()
            .returning(|| Err(ProductError::Database("connection reset".to_owned())));

        let service = ProductService::new(mock_repo);

        match service.list_products().await {
            Err(ProductError::Database(details)) => assert_eq!(details, "connection reset"),
            other => panic!("expected a database error, got {other:?}"),
        }
    }
}
