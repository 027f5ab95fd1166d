// ABOUTME: Recipe entity with name/time/portions invariants
// ABOUTME: Holds an ordered list of denormalized ingredient line items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A denormalized ingredient reference embedded in a recipe.
///
/// Line items capture an ingredient's name, quantity, and unit at the time
/// of association. They are value objects, not references to [`super::Ingredient`]
/// entities, and nothing enforces that a matching entity exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Ingredient name as written in the recipe
    pub name: String,
    /// Quantity required, in `unit`
    pub quantity: f64,
    /// Measurement unit (free-form)
    pub unit: String,
}

/// Recipe fields as loaded from the store.
///
/// `ingredients` is optional so reconstruction tolerates rows persisted
/// before the column existed; it defaults to the empty list.
#[derive(Debug, Clone)]
pub struct RecipeProps {
    /// Store-assigned identifier; absent until first save
    pub id: Option<Uuid>,
    /// Unique name of the recipe
    pub name: String,
    /// Short description
    pub description: String,
    /// Preparation instructions
    pub how_to_prepare: String,
    /// Preparation time in minutes
    pub time_to_prepare: i64,
    /// Number of portions the recipe yields
    pub portions: i64,
    /// Ordered ingredient line items
    pub ingredients: Option<Vec<LineItem>>,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
}

/// A recipe.
///
/// Invariants: `name` is non-empty, `time_to_prepare` and `portions` are
/// non-negative, checked at construction. The entity exposes only getters;
/// updates are whole-field replacements mediated by the repository update
/// path, which validates through the same rules (see [`validate_name`] and
/// friends).
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    id: Option<Uuid>,
    name: String,
    description: String,
    how_to_prepare: String,
    time_to_prepare: i64,
    portions: i64,
    ingredients: Vec<LineItem>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a new recipe with fresh timestamps and no id (ids are assigned
    /// by the store on first save). The line-item list is stored as-is;
    /// per-item validation is not this layer's concern.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty, the preparation time
    /// is negative, or the portion count is negative.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        how_to_prepare: impl Into<String>,
        time_to_prepare: i64,
        portions: i64,
        ingredients: Vec<LineItem>,
    ) -> AppResult<Self> {
        let now = Utc::now();
        Self::with(RecipeProps {
            id: None,
            name: name.into(),
            description: description.into(),
            how_to_prepare: how_to_prepare.into(),
            time_to_prepare,
            portions,
            ingredients: Some(ingredients),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstruct a recipe from persisted fields. Runs the same validation
    /// as [`Recipe::new`]; a missing ingredient list defaults to empty.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the stored fields violate an invariant.
    pub fn with(props: RecipeProps) -> AppResult<Self> {
        validate_name(&props.name)?;
        validate_time_to_prepare(props.time_to_prepare)?;
        validate_portions(props.portions)?;

        Ok(Self {
            id: props.id,
            name: props.name,
            description: props.description,
            how_to_prepare: props.how_to_prepare,
            time_to_prepare: props.time_to_prepare,
            portions: props.portions,
            ingredients: props.ingredients.unwrap_or_default(),
            created_at: props.created_at,
            updated_at: props.updated_at,
        })
    }

    #[must_use]
    pub const fn id(&self) -> Option<Uuid> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn how_to_prepare(&self) -> &str {
        &self.how_to_prepare
    }

    #[must_use]
    pub const fn time_to_prepare(&self) -> i64 {
        self.time_to_prepare
    }

    #[must_use]
    pub const fn portions(&self) -> i64 {
        self.portions
    }

    #[must_use]
    pub fn ingredients(&self) -> &[LineItem] {
        &self.ingredients
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Validate a recipe name. Shared by entity construction and the sparse
/// update path so the rule has a single source of truth.
///
/// # Errors
///
/// Returns a validation error if the name is empty after trimming.
pub fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("name cannot be empty"));
    }
    Ok(())
}

/// Validate a preparation time in minutes.
///
/// # Errors
///
/// Returns a validation error if the value is negative.
pub fn validate_time_to_prepare(minutes: i64) -> AppResult<()> {
    if minutes < 0 {
        return Err(AppError::validation("time to prepare cannot be negative"));
    }
    Ok(())
}

/// Validate a portion count.
///
/// # Errors
///
/// Returns a validation error if the value is negative.
pub fn validate_portions(portions: i64) -> AppResult<()> {
    if portions < 0 {
        return Err(AppError::validation("portions cannot be negative"));
    }
    Ok(())
}
