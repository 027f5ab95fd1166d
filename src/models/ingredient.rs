// ABOUTME: Ingredient entity with name/quantity/unit invariants
// ABOUTME: Validating constructors plus the sole mutation surface for stock changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};

/// Fully-specified ingredient fields, as loaded from the store
#[derive(Debug, Clone)]
pub struct IngredientProps {
    /// Unique name of the ingredient
    pub name: String,
    /// Quantity on hand, in `unit`
    pub quantity: f64,
    /// Measurement unit (free-form, e.g. "grams")
    pub unit: String,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

/// A stocked ingredient.
///
/// Invariants: `name` is non-empty, `quantity` is non-negative, `unit` is
/// non-empty. They are enforced at construction and by every mutator; the
/// fields are private so no other mutation path exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    name: String,
    quantity: f64,
    unit: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Ingredient {
    /// Create a new ingredient with fresh timestamps
    /// (`created_at == updated_at`).
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty, the quantity is
    /// negative, or the unit is empty.
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> AppResult<Self> {
        let now = Utc::now();
        Self::with(IngredientProps {
            name: name.into(),
            quantity,
            unit: unit.into(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstruct an ingredient from persisted fields without re-stamping
    /// timestamps. Runs the same validation as [`Ingredient::new`], so
    /// stored data violating the invariants surfaces as an error.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the stored fields violate an invariant.
    pub fn with(props: IngredientProps) -> AppResult<Self> {
        validate_name(&props.name)?;
        validate_quantity(props.quantity)?;
        validate_unit(&props.unit)?;

        Ok(Self {
            name: props.name,
            quantity: props.quantity,
            unit: props.unit,
            created_at: props.created_at,
            updated_at: props.updated_at,
        })
    }

    /// Increase the quantity on hand, refreshing `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `amount` is negative.
    pub fn increase_quantity(&mut self, amount: f64) -> AppResult<()> {
        if amount < 0.0 {
            return Err(AppError::validation("amount to increase cannot be negative"));
        }

        self.quantity += amount;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Decrease the quantity on hand, refreshing `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `amount` is negative or the resulting
    /// quantity would go below zero.
    pub fn decrease_quantity(&mut self, amount: f64) -> AppResult<()> {
        if amount < 0.0 {
            return Err(AppError::validation("amount to decrease cannot be negative"));
        }

        if self.quantity - amount < 0.0 {
            return Err(AppError::validation(
                "quantity cannot be decreased below zero",
            ));
        }

        self.quantity -= amount;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Rename the ingredient, refreshing `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the new name is empty.
    pub fn update_name(&mut self, new_name: impl Into<String>) -> AppResult<()> {
        let new_name = new_name.into();
        validate_name(&new_name)?;

        self.name = new_name;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Change the measurement unit, refreshing `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the new unit is empty.
    pub fn update_unit(&mut self, new_unit: impl Into<String>) -> AppResult<()> {
        let new_unit = new_unit.into();
        validate_unit(&new_unit)?;

        self.unit = new_unit;
        self.updated_at = Utc::now();
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
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

fn validate_name(name: &str) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::validation("name cannot be empty"));
    }
    Ok(())
}

fn validate_quantity(quantity: f64) -> AppResult<()> {
    if quantity < 0.0 {
        return Err(AppError::validation("quantity cannot be negative"));
    }
    Ok(())
}

fn validate_unit(unit: &str) -> AppResult<()> {
    if unit.is_empty() {
        return Err(AppError::validation("unit cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_create_valid_ingredient() {
        let ingredient = Ingredient::new("Sugar", 100.0, "grams").unwrap();

        assert_eq!(ingredient.name(), "Sugar");
        assert!((ingredient.quantity() - 100.0).abs() < f64::EPSILON);
        assert_eq!(ingredient.unit(), "grams");
        assert_eq!(ingredient.created_at(), ingredient.updated_at());
    }

    #[test]
    fn test_create_rejects_invalid_fields() {
        for (name, quantity, unit) in [("", 100.0, "grams"), ("Sugar", -1.0, "grams"), ("Sugar", 100.0, "")] {
            let err = Ingredient::new(name, quantity, unit).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
        }
    }

    #[test]
    fn test_with_revalidates_stored_data() {
        let now = Utc::now();
        let err = Ingredient::with(IngredientProps {
            name: "Flour".into(),
            quantity: -5.0,
            unit: "grams".into(),
            created_at: now,
            updated_at: now,
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_increase_decrease_are_inverses() {
        let mut ingredient = Ingredient::new("Sugar", 100.0, "grams").unwrap();

        ingredient.decrease_quantity(40.0).unwrap();
        ingredient.increase_quantity(40.0).unwrap();

        assert!((ingredient.quantity() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decrease_never_goes_negative() {
        let mut ingredient = Ingredient::new("Sugar", 10.0, "grams").unwrap();

        let err = ingredient.decrease_quantity(10.5).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        // quantity untouched on failure
        assert!((ingredient.quantity() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let mut ingredient = Ingredient::new("Sugar", 10.0, "grams").unwrap();

        assert!(ingredient.increase_quantity(-1.0).is_err());
        assert!(ingredient.decrease_quantity(-1.0).is_err());
    }

    #[test]
    fn test_update_name_and_unit() {
        let mut ingredient = Ingredient::new("Sugar", 10.0, "grams").unwrap();

        ingredient.update_name("Brown Sugar").unwrap();
        ingredient.update_unit("kilograms").unwrap();
        assert_eq!(ingredient.name(), "Brown Sugar");
        assert_eq!(ingredient.unit(), "kilograms");

        assert!(ingredient.update_name("").is_err());
        assert!(ingredient.update_unit("").is_err());
    }

    #[test]
    fn test_mutation_refreshes_updated_at() {
        let mut ingredient = Ingredient::new("Sugar", 10.0, "grams").unwrap();
        let created = ingredient.created_at();
        let before = ingredient.updated_at();

        ingredient.increase_quantity(1.0).unwrap();

        assert!(ingredient.updated_at() >= before);
        assert_eq!(ingredient.created_at(), created);
    }
}
