// ABOUTME: Integration tests for the ingredient use cases
// ABOUTME: Drives create/find/update/delete against an in-memory fake repository
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

use async_trait::async_trait;
use pantry_server::errors::{AppError, AppResult, ErrorCode};
use pantry_server::models::{Ingredient, IngredientProps};
use pantry_server::repositories::{IngredientChanges, IngredientRepository};
use pantry_server::services::ingredients::{
    CreateIngredient, CreateIngredientRequest, DeleteIngredient, FindAllIngredients,
    FindIngredientByName, UpdateIngredientByName, UpdateIngredientRequest,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Fake repository
// ============================================================================

/// In-memory fake that records how often each write operation is invoked
#[derive(Default)]
struct FakeIngredientRepository {
    store: Mutex<HashMap<String, Ingredient>>,
    save_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    last_changes: Mutex<Option<IngredientChanges>>,
}

impl FakeIngredientRepository {
    fn with_ingredient(ingredient: Ingredient) -> Self {
        let repo = Self::default();
        repo.store
            .lock()
            .unwrap()
            .insert(ingredient.name().to_owned(), ingredient);
        repo
    }
}

#[async_trait]
impl IngredientRepository for FakeIngredientRepository {
    async fn save(&self, ingredient: &Ingredient) -> AppResult<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.store
            .lock()
            .unwrap()
            .insert(ingredient.name().to_owned(), ingredient.clone());
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Ingredient>> {
        Ok(self.store.lock().unwrap().get(name).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Ingredient>> {
        Ok(self.store.lock().unwrap().values().cloned().collect())
    }

    async fn update_by_name(
        &self,
        name: &str,
        changes: &IngredientChanges,
    ) -> AppResult<Ingredient> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_changes.lock().unwrap() = Some(changes.clone());

        let mut store = self.store.lock().unwrap();
        let existing = store
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::not_found("Ingredient"))?;

        let updated = Ingredient::with(IngredientProps {
            name: name.to_owned(),
            quantity: changes.quantity.unwrap_or(existing.quantity()),
            unit: changes.unit.clone().unwrap_or_else(|| existing.unit().to_owned()),
            created_at: existing.created_at(),
            updated_at: chrono::Utc::now(),
        })?;
        store.insert(name.to_owned(), updated.clone());
        Ok(updated)
    }

    async fn delete_by_name(&self, name: &str) -> AppResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.store.lock().unwrap().remove(name);
        Ok(())
    }
}

fn sugar() -> Ingredient {
    Ingredient::new("Sugar", 100.0, "grams").unwrap()
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_persists_new_ingredient() {
    let repo = Arc::new(FakeIngredientRepository::default());
    let use_case = CreateIngredient::new(repo.clone());

    let response = use_case
        .execute(CreateIngredientRequest {
            name: "Sugar".into(),
            quantity: 100.0,
            unit: "grams".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.name, "Sugar");
    assert!((response.quantity - 100.0).abs() < f64::EPSILON);
    assert_eq!(response.unit, "grams");
    assert_eq!(repo.save_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_create_duplicate_name_conflicts_without_saving() {
    let repo = Arc::new(FakeIngredientRepository::with_ingredient(sugar()));
    let use_case = CreateIngredient::new(repo.clone());

    let err = use_case
        .execute(CreateIngredientRequest {
            name: "Sugar".into(),
            quantity: 50.0,
            unit: "grams".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(repo.save_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_create_duplicate_reports_conflict_even_with_invalid_data() {
    // Uniqueness is checked before entity construction, so the conflict
    // wins over the negative quantity
    let repo = Arc::new(FakeIngredientRepository::with_ingredient(sugar()));
    let use_case = CreateIngredient::new(repo.clone());

    let err = use_case
        .execute(CreateIngredientRequest {
            name: "Sugar".into(),
            quantity: -1.0,
            unit: String::new(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_create_invalid_fields_fail_validation() {
    let repo = Arc::new(FakeIngredientRepository::default());
    let use_case = CreateIngredient::new(repo.clone());

    let err = use_case
        .execute(CreateIngredientRequest {
            name: "Sugar".into(),
            quantity: -1.0,
            unit: "grams".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(repo.save_calls.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Find
// ============================================================================

#[tokio::test]
async fn test_find_all_empty_store_yields_empty_list() {
    let repo = Arc::new(FakeIngredientRepository::default());
    let use_case = FindAllIngredients::new(repo);

    let ingredients = use_case.execute().await.unwrap();
    assert!(ingredients.is_empty());
}

#[tokio::test]
async fn test_find_all_returns_summaries() {
    let repo = Arc::new(FakeIngredientRepository::with_ingredient(sugar()));
    let use_case = FindAllIngredients::new(repo);

    let ingredients = use_case.execute().await.unwrap();
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].name, "Sugar");
}

#[tokio::test]
async fn test_find_by_name_miss_is_none_not_error() {
    let repo = Arc::new(FakeIngredientRepository::default());
    let use_case = FindIngredientByName::new(repo);

    let result = use_case.execute("Sugar").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_by_name_includes_all_fields() {
    let ingredient = sugar();
    let repo = Arc::new(FakeIngredientRepository::with_ingredient(ingredient.clone()));
    let use_case = FindIngredientByName::new(repo);

    let response = use_case.execute("Sugar").await.unwrap().unwrap();
    assert_eq!(response.name, "Sugar");
    assert_eq!(response.created_at, ingredient.created_at());
    assert_eq!(response.updated_at, ingredient.updated_at());
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_missing_ingredient_fails_before_repository_update() {
    let repo = Arc::new(FakeIngredientRepository::default());
    let use_case = UpdateIngredientByName::new(repo.clone());

    let err = use_case
        .execute(UpdateIngredientRequest {
            name: "Sugar".into(),
            quantity: Some(5.0),
            unit: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(repo.update_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_update_forwards_only_present_fields() {
    let repo = Arc::new(FakeIngredientRepository::with_ingredient(sugar()));
    let use_case = UpdateIngredientByName::new(repo.clone());

    use_case
        .execute(UpdateIngredientRequest {
            name: "Sugar".into(),
            quantity: Some(250.0),
            unit: None,
        })
        .await
        .unwrap();

    let changes = repo.last_changes.lock().unwrap().clone().unwrap();
    assert_eq!(
        changes,
        IngredientChanges {
            quantity: Some(250.0),
            unit: None,
        }
    );
}

#[tokio::test]
async fn test_update_empty_payload_is_a_no_op_passthrough() {
    // Unlike the recipe path, an empty ingredient update is forwarded
    let repo = Arc::new(FakeIngredientRepository::with_ingredient(sugar()));
    let use_case = UpdateIngredientByName::new(repo.clone());

    let response = use_case
        .execute(UpdateIngredientRequest {
            name: "Sugar".into(),
            quantity: None,
            unit: None,
        })
        .await
        .unwrap();

    assert_eq!(repo.update_calls.load(Ordering::SeqCst), 1);
    assert!(repo.last_changes.lock().unwrap().clone().unwrap().is_empty());
    assert!((response.quantity - 100.0).abs() < f64::EPSILON);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_missing_ingredient_never_calls_repository_delete() {
    let repo = Arc::new(FakeIngredientRepository::default());
    let use_case = DeleteIngredient::new(repo.clone());

    let err = use_case.execute("Sugar").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(repo.delete_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_delete_existing_ingredient() {
    let repo = Arc::new(FakeIngredientRepository::with_ingredient(sugar()));
    let use_case = DeleteIngredient::new(repo.clone());

    use_case.execute("Sugar").await.unwrap();

    assert_eq!(repo.delete_calls.load(Ordering::SeqCst), 1);
    assert!(repo.store.lock().unwrap().is_empty());
}
