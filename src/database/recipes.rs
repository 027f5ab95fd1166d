// ABOUTME: SQLite implementation of the recipe repository
// ABOUTME: CRUD operations over the recipes table with JSON-encoded line items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

use super::{map_sqlx_error, parse_timestamp, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{LineItem, Recipe, RecipeProps};
use crate::repositories::{RecipeChanges, RecipeRepository};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

/// SQLite implementation of [`RecipeRepository`].
///
/// Line items are denormalized value objects, so they live in a JSON TEXT
/// column rather than a join table. Updates that supply a list replace the
/// column wholesale.
pub struct SqliteRecipeRepository {
    db: Database,
}

impl SqliteRecipeRepository {
    /// Create a new repository over the given database handle
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    fn get_column<T>(row: &SqliteRow, column: &str) -> AppResult<T>
    where
        for<'r> T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
    {
        row.try_get(column)
            .map_err(|e| AppError::database(format!("failed to read {column}: {e}")))
    }

    fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
        let id: String = Self::get_column(row, "id")?;
        let id = Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("invalid recipe id: {e}")))?;

        let ingredients_json: String = Self::get_column(row, "ingredients")?;
        let ingredients: Vec<LineItem> = serde_json::from_str(&ingredients_json)
            .map_err(|e| AppError::database(format!("invalid ingredients column: {e}")))?;

        let created_at: String = Self::get_column(row, "created_at")?;
        let updated_at: String = Self::get_column(row, "updated_at")?;

        Recipe::with(RecipeProps {
            id: Some(id),
            name: Self::get_column(row, "name")?,
            description: Self::get_column(row, "description")?,
            how_to_prepare: Self::get_column(row, "how_to_prepare")?,
            time_to_prepare: Self::get_column(row, "time_to_prepare")?,
            portions: Self::get_column(row, "portions")?,
            ingredients: Some(ingredients),
            created_at: parse_timestamp(&created_at, "created_at")?,
            updated_at: parse_timestamp(&updated_at, "updated_at")?,
        })
    }

    fn encode_line_items(items: &[LineItem]) -> AppResult<String> {
        serde_json::to_string(items)
            .map_err(|e| AppError::database(format!("failed to encode ingredients: {e}")))
    }
}

#[async_trait]
impl RecipeRepository for SqliteRecipeRepository {
    async fn save(&self, recipe: &Recipe) -> AppResult<Recipe> {
        // The store assigns the id; a caller-supplied id is kept as-is
        let id = recipe.id().unwrap_or_else(Uuid::new_v4);
        let ingredients_json = Self::encode_line_items(recipe.ingredients())?;

        sqlx::query(
            r"
            INSERT INTO recipes (
                id, name, description, how_to_prepare, time_to_prepare,
                portions, ingredients, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(id.to_string())
        .bind(recipe.name())
        .bind(recipe.description())
        .bind(recipe.how_to_prepare())
        .bind(recipe.time_to_prepare())
        .bind(recipe.portions())
        .bind(&ingredients_json)
        .bind(recipe.created_at().to_rfc3339())
        .bind(recipe.updated_at().to_rfc3339())
        .execute(self.db.pool())
        .await
        .map_err(|e| map_sqlx_error("Recipe", "failed to save recipe", e))?;

        Recipe::with(RecipeProps {
            id: Some(id),
            name: recipe.name().to_owned(),
            description: recipe.description().to_owned(),
            how_to_prepare: recipe.how_to_prepare().to_owned(),
            time_to_prepare: recipe.time_to_prepare(),
            portions: recipe.portions(),
            ingredients: Some(recipe.ingredients().to_vec()),
            created_at: recipe.created_at(),
            updated_at: recipe.updated_at(),
        })
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(
            r"
            SELECT id, name, description, how_to_prepare, time_to_prepare,
                   portions, ingredients, created_at, updated_at
            FROM recipes WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::database(format!("failed to find recipe: {e}")))?;

        row.as_ref().map(Self::row_to_recipe).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(
            r"
            SELECT id, name, description, how_to_prepare, time_to_prepare,
                   portions, ingredients, created_at, updated_at
            FROM recipes WHERE id = $1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::database(format!("failed to find recipe: {e}")))?;

        row.as_ref().map(Self::row_to_recipe).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Recipe>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, description, how_to_prepare, time_to_prepare,
                   portions, ingredients, created_at, updated_at
            FROM recipes ORDER BY name
            ",
        )
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::database(format!("failed to list recipes: {e}")))?;

        rows.iter().map(Self::row_to_recipe).collect()
    }

    async fn update_by_id(&self, id: Uuid, changes: &RecipeChanges) -> AppResult<Recipe> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe"))?;

        let name = changes
            .name
            .clone()
            .unwrap_or_else(|| existing.name().to_owned());
        let description = changes
            .description
            .clone()
            .unwrap_or_else(|| existing.description().to_owned());
        let how_to_prepare = changes
            .how_to_prepare
            .clone()
            .unwrap_or_else(|| existing.how_to_prepare().to_owned());
        let time_to_prepare = changes.time_to_prepare.unwrap_or(existing.time_to_prepare());
        let portions = changes.portions.unwrap_or(existing.portions());
        // Full replacement when supplied, never a merge
        let ingredients = changes
            .ingredients
            .clone()
            .unwrap_or_else(|| existing.ingredients().to_vec());
        let updated_at = Utc::now();

        let ingredients_json = Self::encode_line_items(&ingredients)?;

        sqlx::query(
            r"
            UPDATE recipes SET name = $1, description = $2, how_to_prepare = $3,
                   time_to_prepare = $4, portions = $5, ingredients = $6, updated_at = $7
            WHERE id = $8
            ",
        )
        .bind(&name)
        .bind(&description)
        .bind(&how_to_prepare)
        .bind(time_to_prepare)
        .bind(portions)
        .bind(&ingredients_json)
        .bind(updated_at.to_rfc3339())
        .bind(id.to_string())
        .execute(self.db.pool())
        .await
        .map_err(|e| map_sqlx_error("Recipe", "failed to update recipe", e))?;

        Recipe::with(RecipeProps {
            id: Some(id),
            name,
            description,
            how_to_prepare,
            time_to_prepare,
            portions,
            ingredients: Some(ingredients),
            created_at: existing.created_at(),
            updated_at,
        })
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id.to_string())
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::database(format!("failed to delete recipe: {e}")))?;

        Ok(())
    }
}
