// ABOUTME: Route handlers for the ingredients REST API
// ABOUTME: CRUD endpoints keyed by ingredient name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

use super::ServerResources;
use crate::errors::AppError;
use crate::services::ingredients::{
    CreateIngredient, CreateIngredientRequest, DeleteIngredient, FindAllIngredients,
    FindIngredientByName, UpdateIngredientByName, UpdateIngredientRequest,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Request body for updating an ingredient; the name comes from the path
#[derive(Debug, Deserialize)]
pub struct UpdateIngredientBody {
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Ingredient routes handler
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create all ingredient routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/ingredients", post(Self::handle_create))
            .route("/ingredients", get(Self::handle_list))
            .route("/ingredients/:name", get(Self::handle_get))
            .route("/ingredients/:name", put(Self::handle_update))
            .route("/ingredients/:name", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle POST /ingredients - Create a new ingredient
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateIngredientRequest>,
    ) -> Result<Response, AppError> {
        let use_case = CreateIngredient::new(Arc::clone(&resources.ingredients));
        let ingredient = use_case.execute(body).await?;

        Ok((StatusCode::CREATED, Json(ingredient)).into_response())
    }

    /// Handle GET /ingredients - List all ingredients
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let use_case = FindAllIngredients::new(Arc::clone(&resources.ingredients));
        let ingredients = use_case.execute().await?;

        Ok((StatusCode::OK, Json(ingredients)).into_response())
    }

    /// Handle GET /ingredients/:name - Look up one ingredient
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(name): Path<String>,
    ) -> Result<Response, AppError> {
        let use_case = FindIngredientByName::new(Arc::clone(&resources.ingredients));

        // The use case signals a miss with None; the transport maps it to 404
        let ingredient = use_case
            .execute(&name)
            .await?
            .ok_or_else(|| AppError::not_found("Ingredient"))?;

        Ok((StatusCode::OK, Json(ingredient)).into_response())
    }

    /// Handle PUT /ingredients/:name - Partially update an ingredient
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(name): Path<String>,
        Json(body): Json<UpdateIngredientBody>,
    ) -> Result<Response, AppError> {
        let use_case = UpdateIngredientByName::new(Arc::clone(&resources.ingredients));
        let ingredient = use_case
            .execute(UpdateIngredientRequest {
                name,
                quantity: body.quantity,
                unit: body.unit,
            })
            .await?;

        Ok((StatusCode::OK, Json(ingredient)).into_response())
    }

    /// Handle DELETE /ingredients/:name - Delete an ingredient
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(name): Path<String>,
    ) -> Result<Response, AppError> {
        let use_case = DeleteIngredient::new(Arc::clone(&resources.ingredients));
        use_case.execute(&name).await?;

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
