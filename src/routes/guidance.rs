// ABOUTME: Route handler for the AI guidance endpoint
// ABOUTME: POST /api/ai/guidance delegates to the guidance service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use super::{json_body, method_not_allowed};
use crate::errors::AppError;
use crate::server::ServerResources;
use crate::services::guidance::{self, GuidanceRequest};

/// AI guidance routes
pub struct GuidanceRoutes;

impl GuidanceRoutes {
    /// Create the guidance routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/ai/guidance",
                post(Self::handle_guidance).fallback(method_not_allowed),
            )
            .with_state(resources)
    }

    /// Generate guidance text for nutrition data and user goals
    async fn handle_guidance(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<GuidanceRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(payload)?;
        let response =
            guidance::generate_guidance(resources.llm_provider.as_deref(), &request).await?;
        Ok(Json(response).into_response())
    }
}
