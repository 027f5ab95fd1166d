// ABOUTME: Async persistence contracts consumed by the use cases
// ABOUTME: Defines repository traits and the sparse-change payloads for updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

//! Repository contracts.
//!
//! Use cases depend on these traits, never on a concrete store. The sqlite
//! implementations live in [`crate::database`]; tests substitute in-memory
//! fakes. Repositories propagate storage failures as database errors; the
//! use-case layer does not interpret store-specific codes.

use crate::errors::AppResult;
use crate::models::{Ingredient, LineItem, Recipe};
use async_trait::async_trait;
use uuid::Uuid;

/// Sparse update payload for an ingredient: only fields explicitly supplied
/// by the caller are set, untouched fields stay `None` and are never
/// overwritten with defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientChanges {
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

impl IngredientChanges {
    /// True when no field is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.unit.is_none()
    }
}

/// Sparse update payload for a recipe. Supplying `ingredients` replaces the
/// stored list entirely; there is no merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub how_to_prepare: Option<String>,
    pub time_to_prepare: Option<i64>,
    pub portions: Option<i64>,
    pub ingredients: Option<Vec<LineItem>>,
}

impl RecipeChanges {
    /// True when no field is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.how_to_prepare.is_none()
            && self.time_to_prepare.is_none()
            && self.portions.is_none()
            && self.ingredients.is_none()
    }
}

/// Persistence contract for ingredients, keyed by name
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Persist a new ingredient. Fails with a conflict error if the name is
    /// already taken (store-level unique constraint).
    async fn save(&self, ingredient: &Ingredient) -> AppResult<()>;

    /// Look up an ingredient by name; `None` when absent
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Ingredient>>;

    /// Return all ingredients
    async fn find_all(&self) -> AppResult<Vec<Ingredient>>;

    /// Apply a sparse update to the named ingredient and return the
    /// persisted, fully-populated entity. Refreshes `updated_at`.
    async fn update_by_name(
        &self,
        name: &str,
        changes: &IngredientChanges,
    ) -> AppResult<Ingredient>;

    /// Delete the named ingredient
    async fn delete_by_name(&self, name: &str) -> AppResult<()>;
}

/// Persistence contract for recipes, keyed by store-assigned id
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Persist a new recipe and return it with its assigned id. Fails with a
    /// conflict error if the name is already taken.
    async fn save(&self, recipe: &Recipe) -> AppResult<Recipe>;

    /// Look up a recipe by name; `None` when absent
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Recipe>>;

    /// Look up a recipe by id; `None` when absent
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Recipe>>;

    /// Return all recipes
    async fn find_all(&self) -> AppResult<Vec<Recipe>>;

    /// Apply a sparse update to the identified recipe and return the
    /// persisted, fully-populated entity. Refreshes `updated_at`.
    async fn update_by_id(&self, id: Uuid, changes: &RecipeChanges) -> AppResult<Recipe>;

    /// Delete the identified recipe
    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_is_empty() {
        assert!(IngredientChanges::default().is_empty());
        assert!(!IngredientChanges {
            quantity: Some(1.0),
            unit: None,
        }
        .is_empty());

        assert!(RecipeChanges::default().is_empty());
        assert!(!RecipeChanges {
            ingredients: Some(vec![]),
            ..Default::default()
        }
        .is_empty());
    }
}
