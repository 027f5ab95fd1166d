// ABOUTME: HTTP surface of the pantry server
// ABOUTME: Assembles the axum router and the shared server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

//! Routes.
//!
//! Handlers translate transport requests into use-case calls and map
//! results to responses. Status codes come from [`crate::errors::ErrorCode`];
//! handlers never invent their own mapping.

pub mod health;
pub mod ingredients;
pub mod recipes;

use crate::repositories::{IngredientRepository, RecipeRepository};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state injected into every route: the two repository handles.
/// Constructed once at startup; nothing here is ambient or global.
pub struct ServerResources {
    pub ingredients: Arc<dyn IngredientRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
}

/// Build the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(ingredients::IngredientRoutes::routes(Arc::clone(&resources)))
        .merge(recipes::RecipeRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
}
