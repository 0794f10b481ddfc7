//! Product service - catalog operations.

use crate::domain::{NewProduct, Product};
use crate::ports::{CoreError, ProductRepository};
use std::sync::Arc;

/// Service for product CRUD operations.
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Create a new product service.
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// List all products.
    pub async fn list(&self) -> Result<Vec<Product>, CoreError> {
        self.repo.get_all().await.map_err(CoreError::from)
    }

    /// Fetch a single product, `None` if it does not exist.
    pub async fn get(&self, id: i64) -> Result<Option<Product>, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Create a product and return it with its assigned id.
    pub async fn create(&self, product: NewProduct) -> Result<Product, CoreError> {
        let created = self.repo.add(product).await?;
        tracing::info!(id = created.id, name = %created.name, "product created");
        Ok(created)
    }

    /// Update a product. Returns `false` if it does not exist.
    pub async fn update(&self, id: i64, product: NewProduct) -> Result<bool, CoreError> {
        self.repo.update(id, product).await.map_err(CoreError::from)
    }

    /// Delete a product. Returns `false` if it does not exist.
    pub async fn delete(&self, id: i64) -> Result<bool, CoreError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!(id, "product deleted");
        }
        Ok(deleted)
    }
}
