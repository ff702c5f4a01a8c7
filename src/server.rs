// ABOUTME: HTTP server assembly for the nutrition gateway
// ABOUTME: Shared request resources, router construction and the serve loop with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server assembly
//!
//! [`ServerResources`] is built once from [`ServerConfig`] and shared
//! read-only by every handler. Upstream clients are `None` when their
//! credentials were absent at startup.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::external::FatSecretClient;
use crate::llm::{LlmProvider, OpenAiProvider};
use crate::middleware::setup_cors;
use crate::routes::{self, GuidanceRoutes, HealthRoutes, NutritionRoutes};
use crate::utils::http_client::create_client_with_timeout;

/// Immutable state shared by all handlers
pub struct ServerResources {
    /// Configuration loaded at startup
    pub config: Arc<ServerConfig>,
    /// `FatSecret` client, if credentials are configured
    pub fatsecret: Option<FatSecretClient>,
    /// LLM provider, if an API key is configured
    pub llm_provider: Option<Arc<dyn LlmProvider>>,
}

impl ServerResources {
    /// Build the upstream clients described by `config`
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let http_client = create_client_with_timeout(
            config.http_client.timeout_secs,
            config.http_client.connect_timeout_secs,
        );

        let fatsecret = config
            .fatsecret_client_config()
            .map(|fatsecret_config| FatSecretClient::new(fatsecret_config, http_client.clone()));
        if fatsecret.is_none() {
            warn!("FatSecret credentials not set; nutrition search will answer 500");
        }

        let llm_provider = config.openai_config().map(|openai_config| {
            Arc::new(OpenAiProvider::new(openai_config, http_client.clone()))
                as Arc<dyn LlmProvider>
        });
        if llm_provider.is_none() {
            warn!("OpenAI API key not set; AI guidance will answer 500");
        }

        Self {
            config: Arc::new(config),
            fatsecret,
            llm_provider,
        }
    }
}

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors_origins);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(NutritionRoutes::routes(Arc::clone(&resources)))
        .merge(GuidanceRoutes::routes(resources))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.http_port);
    let resources = Arc::new(ServerResources::new(config));
    let app = build_router(resources);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
