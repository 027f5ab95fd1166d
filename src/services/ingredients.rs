// ABOUTME: Ingredient use cases: create, find-all, find-by-name, update, delete
// ABOUTME: Enforces name uniqueness and maps entities to response shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

use crate::errors::{AppError, AppResult};
use crate::models::Ingredient;
use crate::repositories::{IngredientChanges, IngredientRepository};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request to create an ingredient
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIngredientRequest {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Request to partially update an ingredient identified by name.
/// Omitted fields are left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateIngredientRequest {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Full ingredient response, used by single lookups, create, and update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientResponse {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Ingredient> for IngredientResponse {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name().to_owned(),
            quantity: ingredient.quantity(),
            unit: ingredient.unit().to_owned(),
            created_at: ingredient.created_at(),
            updated_at: ingredient.updated_at(),
        }
    }
}

/// List-item projection: find-all responses omit `updated_at`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientSummary {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Ingredient> for IngredientSummary {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name().to_owned(),
            quantity: ingredient.quantity(),
            unit: ingredient.unit().to_owned(),
            created_at: ingredient.created_at(),
        }
    }
}

/// Create a new ingredient after checking name uniqueness.
///
/// Uniqueness is checked before the entity is constructed, so a
/// duplicate-name request with otherwise-invalid data reports the conflict,
/// not the validation error.
pub struct CreateIngredient {
    repository: Arc<dyn IngredientRepository>,
}

impl CreateIngredient {
    #[must_use]
    pub fn new(repository: Arc<dyn IngredientRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns a conflict error if the name is taken, a validation error if
    /// an entity invariant is violated, or a database error.
    pub async fn execute(&self, request: CreateIngredientRequest) -> AppResult<IngredientResponse> {
        if self.repository.find_by_name(&request.name).await?.is_some() {
            return Err(AppError::conflict("Ingredient"));
        }

        let ingredient = Ingredient::new(request.name, request.quantity, request.unit)?;
        self.repository.save(&ingredient).await?;

        Ok(IngredientResponse::from(&ingredient))
    }
}

/// Return every stored ingredient as a summary projection
pub struct FindAllIngredients {
    repository: Arc<dyn IngredientRepository>,
}

impl FindAllIngredients {
    #[must_use]
    pub fn new(repository: Arc<dyn IngredientRepository>) -> Self {
        Self { repository }
    }

    /// An empty store yields an empty list, never an error.
    ///
    /// # Errors
    ///
    /// Returns a database error if the lookup fails.
    pub async fn execute(&self) -> AppResult<Vec<IngredientSummary>> {
        let ingredients = self.repository.find_all().await?;
        Ok(ingredients.iter().map(IngredientSummary::from).collect())
    }
}

/// Look up a single ingredient by name
pub struct FindIngredientByName {
    repository: Arc<dyn IngredientRepository>,
}

impl FindIngredientByName {
    #[must_use]
    pub fn new(repository: Arc<dyn IngredientRepository>) -> Self {
        Self { repository }
    }

    /// An absent key yields `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns a database error if the lookup fails.
    pub async fn execute(&self, name: &str) -> AppResult<Option<IngredientResponse>> {
        let ingredient = self.repository.find_by_name(name).await?;
        Ok(ingredient.as_ref().map(IngredientResponse::from))
    }
}

/// Partially update an ingredient identified by name.
///
/// Builds a sparse payload from the fields present in the request; an empty
/// payload is forwarded to the repository as a no-op update (unlike the
/// recipe path, which rejects it).
pub struct UpdateIngredientByName {
    repository: Arc<dyn IngredientRepository>,
}

impl UpdateIngredientByName {
    #[must_use]
    pub fn new(repository: Arc<dyn IngredientRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns a not-found error if no ingredient has the given name, or a
    /// database error.
    pub async fn execute(&self, request: UpdateIngredientRequest) -> AppResult<IngredientResponse> {
        if self.repository.find_by_name(&request.name).await?.is_none() {
            return Err(AppError::not_found("Ingredient"));
        }

        let changes = IngredientChanges {
            quantity: request.quantity,
            unit: request.unit,
        };

        let updated = self.repository.update_by_name(&request.name, &changes).await?;
        Ok(IngredientResponse::from(&updated))
    }
}

/// Delete an ingredient identified by name
pub struct DeleteIngredient {
    repository: Arc<dyn IngredientRepository>,
}

impl DeleteIngredient {
    #[must_use]
    pub fn new(repository: Arc<dyn IngredientRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns a not-found error if no ingredient has the given name, or a
    /// database error. The repository delete is never invoked on a miss.
    pub async fn execute(&self, name: &str) -> AppResult<()> {
        if self.repository.find_by_name(name).await?.is_none() {
            return Err(AppError::not_found("Ingredient"));
        }

        self.repository.delete_by_name(name).await
    }
}
