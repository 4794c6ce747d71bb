use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder,
    Statement,
};

use crate::entity;
use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ReplaceProduct};
use crate::repository::ProductRepository;

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = self.base.insert(active_model).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn replace(&self, id: i32, input: ReplaceProduct) -> ProductResult<Option<Product>> {
        let Some(model) = self.base.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        active_model.name = Set(input.name);
        active_model.price = Set(input.price);
        active_model.availability = Set(input.availability);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = self.base.update(active_model).await?;

        tracing::info!(product_id = id, "Replaced product");
        Ok(Some(updated.into()))
    }

    async fn set_availability(
        &self,
        id: i32,
        availability: bool,
    ) -> ProductResult<Option<Product>> {
        let Some(model) = self.base.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        active_model.availability = Set(availability);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = self.base.update(active_model).await?;

        tracing::info!(product_id = id, availability, "Updated product availability");
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(rows_affected > 0)
    }

    async fn ping(&self) -> ProductResult<()> {
        let select_one = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
        self.base.db().query_one_raw(select_one).await?;
        Ok(())
    }
}
