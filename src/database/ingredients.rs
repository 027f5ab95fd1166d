// ABOUTME: SQLite implementation of the ingredient repository
// ABOUTME: CRUD operations over the ingredients table, keyed by unique name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

use super::{map_sqlx_error, parse_timestamp, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{Ingredient, IngredientProps};
use crate::repositories::{IngredientChanges, IngredientRepository};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row};

/// SQLite implementation of [`IngredientRepository`]
pub struct SqliteIngredientRepository {
    db: Database,
}

impl SqliteIngredientRepository {
    /// Create a new repository over the given database handle
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    fn row_to_ingredient(row: &SqliteRow) -> AppResult<Ingredient> {
        let created_at: String = row
            .try_get("created_at")
            .map_err(|e| AppError::database(format!("failed to read created_at: {e}")))?;
        let updated_at: String = row
            .try_get("updated_at")
            .map_err(|e| AppError::database(format!("failed to read updated_at: {e}")))?;

        Ingredient::with(IngredientProps {
            name: row
                .try_get("name")
                .map_err(|e| AppError::database(format!("failed to read name: {e}")))?,
            quantity: row
                .try_get("quantity")
                .map_err(|e| AppError::database(format!("failed to read quantity: {e}")))?,
            unit: row
                .try_get("unit")
                .map_err(|e| AppError::database(format!("failed to read unit: {e}")))?,
            created_at: parse_timestamp(&created_at, "created_at")?,
            updated_at: parse_timestamp(&updated_at, "updated_at")?,
        })
    }
}

#[async_trait]
impl IngredientRepository for SqliteIngredientRepository {
    async fn save(&self, ingredient: &Ingredient) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO ingredients (name, quantity, unit, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(ingredient.name())
        .bind(ingredient.quantity())
        .bind(ingredient.unit())
        .bind(ingredient.created_at().to_rfc3339())
        .bind(ingredient.updated_at().to_rfc3339())
        .execute(self.db.pool())
        .await
        .map_err(|e| map_sqlx_error("Ingredient", "failed to save ingredient", e))?;

        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Ingredient>> {
        let row = sqlx::query(
            r"
            SELECT name, quantity, unit, created_at, updated_at
            FROM ingredients WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::database(format!("failed to find ingredient: {e}")))?;

        row.as_ref().map(Self::row_to_ingredient).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Ingredient>> {
        let rows = sqlx::query(
            r"
            SELECT name, quantity, unit, created_at, updated_at
            FROM ingredients ORDER BY name
            ",
        )
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::database(format!("failed to list ingredients: {e}")))?;

        rows.iter().map(Self::row_to_ingredient).collect()
    }

    async fn update_by_name(
        &self,
        name: &str,
        changes: &IngredientChanges,
    ) -> AppResult<Ingredient> {
        let existing = self
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("Ingredient"))?;

        let quantity = changes.quantity.unwrap_or(existing.quantity());
        let unit = changes
            .unit
            .clone()
            .unwrap_or_else(|| existing.unit().to_owned());
        let updated_at = Utc::now();

        sqlx::query(
            r"
            UPDATE ingredients SET quantity = $1, unit = $2, updated_at = $3
            WHERE name = $4
            ",
        )
        .bind(quantity)
        .bind(&unit)
        .bind(updated_at.to_rfc3339())
        .bind(name)
        .execute(self.db.pool())
        .await
        .map_err(|e| AppError::database(format!("failed to update ingredient: {e}")))?;

        Ingredient::with(IngredientProps {
            name: name.to_owned(),
            quantity,
            unit,
            created_at: existing.created_at(),
            updated_at,
        })
    }

    async fn delete_by_name(&self, name: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM ingredients WHERE name = $1")
            .bind(name)
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::database(format!("failed to delete ingredient: {e}")))?;

        Ok(())
    }
}
