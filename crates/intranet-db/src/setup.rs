//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with full schema. Entry points call this with the
//! resolved database path.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::Path;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Establishes a connection to the `SQLite` database file
/// 2. Creates the database file if it doesn't exist
/// 3. Creates all tables and indexes
/// 4. Seeds the built-in procedure definitions
///
/// # Errors
///
/// Returns an error if the database file cannot be opened or created, or if
/// schema creation fails.
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true),
    )
    .await?;

    create_schema(&pool).await?;
    seed_procedures(&pool).await?;

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema and
/// seeded procedures. Capped at one connection: each in-memory connection
/// would otherwise get its own empty database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().in_memory(true).foreign_keys(true))
        .await?;
    create_schema(&pool).await?;
    seed_procedures(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times as all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            price REAL NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS departments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            location TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            department_id INTEGER,
            FOREIGN KEY (department_id) REFERENCES departments(id) ON DELETE SET NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index on department_id for faster per-department queries
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_employees_department ON employees(department_id)",
    )
    .execute(pool)
    .await?;

    // Named procedures callable through the gateway. Each body is a single
    // SQL statement that must reference its one `?1` parameter (the full
    // request JSON) and return one scalar JSON string.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS procedures (
            name TEXT PRIMARY KEY NOT NULL,
            body TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Built-in procedure definitions shipped with the schema.
///
/// INSERT OR IGNORE so operator-modified bodies survive restarts.
async fn seed_procedures(pool: &SqlitePool) -> Result<()> {
    const SEEDS: &[(&str, &str)] = &[
        ("P_PING", "SELECT json_array('pong') WHERE json_valid(?1)"),
        ("P_ECHO", "SELECT ?1"),
        (
            "P_GETPRODUCTS",
            "SELECT json_group_array(json_object(\
             'id', id, 'name', name, 'description', description, 'price', price)) \
             FROM products WHERE json_valid(?1)",
        ),
        (
            "P_GETEMPLOYEES",
            "SELECT json_group_array(json_object(\
             'id', id, 'firstName', first_name, 'lastName', last_name, \
             'email', email, 'departmentId', department_id)) \
             FROM employees WHERE json_valid(?1)",
        ),
    ];

    for (name, body) in SEEDS {
        sqlx::query("INSERT OR IGNORE INTO procedures (name, body) VALUES (?, ?)")
            .bind(name)
            .bind(body)
            .execute(pool)
            .await?;
    }

    Ok(())
}
