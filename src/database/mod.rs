// ABOUTME: Database handle and schema management for the pantry server
// ABOUTME: Wraps a SqlitePool; constructed once at startup and injected into repositories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

//! # Database Management
//!
//! A [`Database`] is an explicitly constructed pool handle. The binary
//! creates one and passes a clone into each repository implementation; no
//! module-scope client exists anywhere in the crate.
//!
//! Both tables carry a UNIQUE constraint on their name column. That is the
//! store-level closure of the check-then-act race in the create use cases:
//! a racing insert that slips past the read-side uniqueness check still
//! surfaces as a conflict error.

mod ingredients;
mod recipes;

pub use ingredients::SqliteIngredientRepository;
pub use recipes::SqliteRecipeRepository;

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite, SqlitePool};

/// Shared connection pool handle
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Connect to the database and run migrations.
    ///
    /// # Errors
    ///
    /// Returns a database error if the connection or a migration fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates a file-backed database if it doesn't exist
        let connection_options =
            if database_url.starts_with("sqlite:") && !database_url.contains(":memory:") {
                format!("{database_url}?mode=rwc")
            } else {
                database_url.to_owned()
            };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("failed to connect: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns a database error if a statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ingredients (
                name TEXT PRIMARY KEY,
                quantity REAL NOT NULL,
                unit TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("failed to create ingredients table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL,
                how_to_prepare TEXT NOT NULL,
                time_to_prepare INTEGER NOT NULL,
                portions INTEGER NOT NULL,
                ingredients TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("failed to create recipes table: {e}")))?;

        Ok(())
    }
}

/// Map an sqlx error to the application taxonomy: unique-constraint
/// violations become conflicts (the caller names the resource), everything
/// else is a database error with context.
pub(crate) fn map_sqlx_error(resource: &str, context: &str, error: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            return AppError::conflict(resource);
        }
    }
    AppError::database(format!("{context}: {error}")).with_source(error)
}

/// Parse an rfc3339 timestamp column
pub(crate) fn parse_timestamp(value: &str, column: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("invalid {column} timestamp: {e}")))
}
