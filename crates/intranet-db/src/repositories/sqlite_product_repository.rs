//! `SQLite` implementation of the `ProductRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use intranet_core::domain::{NewProduct, Product};
use intranet_core::ports::{ProductRepository, RepositoryError};

use super::map_sqlx_err;

/// `SQLite` implementation of the `ProductRepository` trait.
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new `SQLite` product repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn map_row(row: &sqlx::sqlite::SqliteRow) -> Product {
    Product {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        price: row.get("price"),
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name, description, price FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        Ok(rows.iter().map(map_row).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, description, price FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        Ok(row.as_ref().map(map_row))
    }

    async fn add(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let result = sqlx::query("INSERT INTO products (name, description, price) VALUES (?, ?, ?)")
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(Product {
            id: result.last_insert_rowid(),
            name: product.name,
            description: product.description,
            price: product.price,
        })
    }

    async fn update(&self, id: i64, product: NewProduct) -> Result<bool, RepositoryError> {
        let result =
            sqlx::query("UPDATE products SET name = ?, description = ?, price = ? WHERE id = ?")
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_err)?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn repo() -> SqliteProductRepository {
        SqliteProductRepository::new(setup_test_database().await.unwrap())
    }

    fn sample() -> NewProduct {
        NewProduct {
            name: "Stapler".to_string(),
            description: Some("Red".to_string()),
            price: 4.5,
        }
    }

    #[tokio::test]
    async fn add_then_get_round_trips() {
        let repo = repo().await;
        let created = repo.add(sample()).await.unwrap();
        assert!(created.id > 0);

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(repo.get_all().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_missing_row() {
        let repo = repo().await;
        assert!(repo.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_and_delete_report_rows_affected() {
        let repo = repo().await;
        let created = repo.add(sample()).await.unwrap();

        let mut changed = sample();
        changed.price = 9.0;
        changed.description = None;
        assert!(repo.update(created.id, changed).await.unwrap());

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.price, 9.0);
        assert_eq!(fetched.description, None);

        assert!(!repo.update(999, sample()).await.unwrap());
        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
