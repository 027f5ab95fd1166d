// ABOUTME: Application use cases, one struct per operation
// ABOUTME: Orchestrate entity rules and repository calls for ingredients and recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

//! Use cases.
//!
//! Each use case is a short-lived, request-scoped operation holding only a
//! repository handle. It performs at most one read-then-write sequence and
//! propagates every repository failure immediately; there are no retries or
//! timeouts at this layer.

pub mod ingredients;
pub mod recipes;
