// ABOUTME: Recipe use cases: create, find-all, find-by-id, update, delete
// ABOUTME: Implements sparse-payload reconciliation for partial updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

use crate::errors::{AppError, AppResult};
use crate::models::{recipe, LineItem, Recipe};
use crate::repositories::{RecipeChanges, RecipeRepository};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Request to create a recipe. A missing ingredient list means an empty one.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecipeRequest {
    pub name: String,
    pub description: String,
    pub how_to_prepare: String,
    pub time_to_prepare: i64,
    pub portions: i64,
    pub ingredients: Option<Vec<LineItem>>,
}

/// Request to partially update a recipe identified by id. Omitted fields are
/// left untouched; a supplied `ingredients` list replaces the stored one.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecipeRequest {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub how_to_prepare: Option<String>,
    pub time_to_prepare: Option<i64>,
    pub portions: Option<i64>,
    pub ingredients: Option<Vec<LineItem>>,
}

/// Recipe response shape shared by every recipe use case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub how_to_prepare: String,
    pub time_to_prepare: i64,
    pub portions: i64,
    pub ingredients: Vec<LineItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<&Recipe> for RecipeResponse {
    type Error = AppError;

    /// Fails when the persisted recipe carries no id. That indicates a
    /// defect in the persistence collaborator, not a user error, so it maps
    /// to an invariant violation.
    fn try_from(recipe: &Recipe) -> AppResult<Self> {
        let id = recipe
            .id()
            .ok_or_else(|| AppError::invariant("recipe id missing from persisted record"))?;

        Ok(Self {
            id,
            name: recipe.name().to_owned(),
            description: recipe.description().to_owned(),
            how_to_prepare: recipe.how_to_prepare().to_owned(),
            time_to_prepare: recipe.time_to_prepare(),
            portions: recipe.portions(),
            ingredients: recipe.ingredients().to_vec(),
            created_at: recipe.created_at(),
            updated_at: recipe.updated_at(),
        })
    }
}

/// Create a new recipe after checking name uniqueness.
///
/// Uniqueness is checked before the entity is constructed, so a
/// duplicate-name request with otherwise-invalid data reports the conflict.
pub struct CreateRecipe {
    repository: Arc<dyn RecipeRepository>,
}

impl CreateRecipe {
    #[must_use]
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns a conflict error if the name is taken, a validation error if
    /// an entity invariant is violated, or a database error.
    pub async fn execute(&self, request: CreateRecipeRequest) -> AppResult<RecipeResponse> {
        if self.repository.find_by_name(&request.name).await?.is_some() {
            return Err(AppError::conflict("Recipe"));
        }

        let recipe = Recipe::new(
            request.name,
            request.description,
            request.how_to_prepare,
            request.time_to_prepare,
            request.portions,
            request.ingredients.unwrap_or_default(),
        )?;

        let saved = self.repository.save(&recipe).await?;
        RecipeResponse::try_from(&saved)
    }
}

/// Return every stored recipe
pub struct FindAllRecipes {
    repository: Arc<dyn RecipeRepository>,
}

impl FindAllRecipes {
    #[must_use]
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    /// An empty store yields an empty list, never an error.
    ///
    /// # Errors
    ///
    /// Returns a database error if the lookup fails, or an invariant error
    /// if a stored recipe has no id.
    pub async fn execute(&self) -> AppResult<Vec<RecipeResponse>> {
        let recipes = self.repository.find_all().await?;
        recipes.iter().map(RecipeResponse::try_from).collect()
    }
}

/// Look up a single recipe by id
pub struct FindRecipeById {
    repository: Arc<dyn RecipeRepository>,
}

impl FindRecipeById {
    #[must_use]
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    /// An absent key yields `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns a database error if the lookup fails.
    pub async fn execute(&self, id: Uuid) -> AppResult<Option<RecipeResponse>> {
        let recipe = self.repository.find_by_id(id).await?;
        recipe.as_ref().map(RecipeResponse::try_from).transpose()
    }
}

/// Partially update a recipe identified by id.
///
/// The reconciliation order is fixed: existence first (a miss is reported
/// before any field is validated), then the sparse payload is built from the
/// fields present in the request, rejected if empty, validated field by
/// field, and finally delegated to the repository.
pub struct UpdateRecipeById {
    repository: Arc<dyn RecipeRepository>,
}

impl UpdateRecipeById {
    #[must_use]
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns a not-found error if no recipe has the given id, a
    /// missing-field error if the request carries no updatable field, a
    /// validation error for an invalid field, an invariant error if the
    /// store returns a recipe without an id, or a database error.
    pub async fn execute(&self, request: UpdateRecipeRequest) -> AppResult<RecipeResponse> {
        if self.repository.find_by_id(request.id).await?.is_none() {
            return Err(AppError::not_found("Recipe"));
        }

        let changes = RecipeChanges {
            name: request.name,
            description: request.description,
            how_to_prepare: request.how_to_prepare,
            time_to_prepare: request.time_to_prepare,
            portions: request.portions,
            ingredients: request.ingredients,
        };

        if changes.is_empty() {
            return Err(AppError::missing_field(
                "at least one field must be provided for update",
            ));
        }

        Self::validate_changes(&changes)?;

        let updated = self.repository.update_by_id(request.id, &changes).await?;
        RecipeResponse::try_from(&updated)
    }

    /// Validate the semantic fields of a sparse payload. Uses the same
    /// validators as entity construction; the payload never passes through
    /// the validating constructor, so this is where its rules apply.
    fn validate_changes(changes: &RecipeChanges) -> AppResult<()> {
        if let Some(name) = &changes.name {
            recipe::validate_name(name)?;
        }
        if let Some(minutes) = changes.time_to_prepare {
            recipe::validate_time_to_prepare(minutes)?;
        }
        if let Some(portions) = changes.portions {
            recipe::validate_portions(portions)?;
        }
        Ok(())
    }
}

/// Delete a recipe identified by id
pub struct DeleteRecipe {
    repository: Arc<dyn RecipeRepository>,
}

impl DeleteRecipe {
    #[must_use]
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns a not-found error if no recipe has the given id, or a
    /// database error. The repository delete is never invoked on a miss.
    pub async fn execute(&self, id: Uuid) -> AppResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Recipe"));
        }

        self.repository.delete_by_id(id).await
    }
}
