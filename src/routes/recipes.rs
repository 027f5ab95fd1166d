// ABOUTME: Route handlers for the recipes REST API
// ABOUTME: CRUD endpoints keyed by store-assigned recipe id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

use super::ServerResources;
use crate::errors::AppError;
use crate::models::LineItem;
use crate::services::recipes::{
    CreateRecipe, CreateRecipeRequest, DeleteRecipe, FindAllRecipes, FindRecipeById,
    UpdateRecipeById, UpdateRecipeRequest,
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
use uuid::Uuid;

/// Request body for updating a recipe; the id comes from the path
#[derive(Debug, Deserialize)]
pub struct UpdateRecipeBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub how_to_prepare: Option<String>,
    pub time_to_prepare: Option<i64>,
    pub portions: Option<i64>,
    pub ingredients: Option<Vec<LineItem>>,
}

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recipes", post(Self::handle_create))
            .route("/recipes", get(Self::handle_list))
            .route("/recipes/:id", get(Self::handle_get))
            .route("/recipes/:id", put(Self::handle_update))
            .route("/recipes/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle POST /recipes - Create a new recipe
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateRecipeRequest>,
    ) -> Result<Response, AppError> {
        let use_case = CreateRecipe::new(Arc::clone(&resources.recipes));
        let recipe = use_case.execute(body).await?;

        Ok((StatusCode::CREATED, Json(recipe)).into_response())
    }

    /// Handle GET /recipes - List all recipes
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let use_case = FindAllRecipes::new(Arc::clone(&resources.recipes));
        let recipes = use_case.execute().await?;

        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle GET /recipes/:id - Look up one recipe
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let use_case = FindRecipeById::new(Arc::clone(&resources.recipes));

        let recipe = use_case
            .execute(id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe"))?;

        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle PUT /recipes/:id - Partially update a recipe
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
        Json(body): Json<UpdateRecipeBody>,
    ) -> Result<Response, AppError> {
        let use_case = UpdateRecipeById::new(Arc::clone(&resources.recipes));
        let recipe = use_case
            .execute(UpdateRecipeRequest {
                id,
                name: body.name,
                description: body.description,
                how_to_prepare: body.how_to_prepare,
                time_to_prepare: body.time_to_prepare,
                portions: body.portions,
                ingredients: body.ingredients,
            })
            .await?;

        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle DELETE /recipes/:id - Delete a recipe
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let use_case = DeleteRecipe::new(Arc::clone(&resources.recipes));
        use_case.execute(id).await?;

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
