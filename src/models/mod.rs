// ABOUTME: Domain entities for the pantry server
// ABOUTME: Self-validating Ingredient and Recipe types with their value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

//! Domain entities.
//!
//! Entities validate their own invariants: construction and every mutating
//! method re-check the affected fields, so an entity instance is valid for
//! its whole lifetime. Cross-entity rules (uniqueness, existence) live in
//! the use-case layer.

pub mod ingredient;
pub mod recipe;

pub use ingredient::{Ingredient, IngredientProps};
pub use recipe::{LineItem, Recipe, RecipeProps};
