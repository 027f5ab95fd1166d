// ABOUTME: Pantry server binary
// ABOUTME: Wires configuration, logging, database, and the HTTP router together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server Developers

//! # Pantry Server Binary
//!
//! Starts the recipe/ingredient management REST API: loads configuration
//! from the environment, initializes logging, connects the database, and
//! serves the router until a shutdown signal arrives.

use anyhow::Result;
use clap::Parser;
use pantry_server::{
    config::ServerConfig,
    database::{Database, SqliteIngredientRepository, SqliteRecipeRepository},
    logging,
    routes::{self, ServerResources},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "pantry-server")]
#[command(about = "Recipe and ingredient management REST API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting pantry server");
    info!("{}", config.summary());

    // Single database handle, injected into each repository
    let database = Database::new(&config.database_url).await?;
    info!("Database initialized: {}", config.database_url);

    let resources = Arc::new(ServerResources {
        ingredients: Arc::new(SqliteIngredientRepository::new(database.clone())),
        recipes: Arc::new(SqliteRecipeRepository::new(database)),
    });

    let app = routes::router(resources);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
