// ABOUTME: Main library entry point for the pantry server
// ABOUTME: Exposes domain entities, use cases, repositories, and the HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

#![deny(unsafe_code)]

//! # Pantry Server
//!
//! A REST API for managing ingredients and recipes. Recipes hold denormalized
//! ingredient line items (name, quantity, unit) rather than live references,
//! so the two entity types evolve independently.
//!
//! ## Architecture
//!
//! The crate follows a layered design:
//! - **Models**: self-validating domain entities (`Ingredient`, `Recipe`)
//! - **Repositories**: async persistence contracts plus sqlite implementations
//! - **Services**: one use case per operation, orchestrating entity rules
//!   and repository calls
//! - **Routes**: axum handlers translating HTTP requests into use-case calls
//!
//! Persistence is injected: the binary constructs a single
//! [`database::Database`] handle and passes it into each repository
//! implementation. There is no ambient global state.

pub mod config;
pub mod database;
pub mod errors;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
