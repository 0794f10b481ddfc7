//! Product repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewProduct, Product};

/// Repository for product persistence.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - `add` returns the entity with its assigned id
/// - `update`/`delete` return whether a row was matched
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Fetch a single product by id.
    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;

    /// Insert a new product and return it with its assigned id.
    async fn add(&self, product: NewProduct) -> Result<Product, RepositoryError>;

    /// Update an existing product. Returns `false` if no row matched.
    async fn update(&self, id: i64, product: NewProduct) -> Result<bool, RepositoryError>;

    /// Delete a product by id. Returns `false` if no row matched.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
