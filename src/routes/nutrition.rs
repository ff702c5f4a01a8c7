// ABOUTME: Route handler for the nutrition search endpoint
// ABOUTME: POST /api/nutrition/search delegates to the nutrition search service
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
use crate::services::nutrition_search::{self, NutritionSearchRequest};

/// Nutrition search routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create the nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/nutrition/search",
                post(Self::handle_search).fallback(method_not_allowed),
            )
            .with_state(resources)
    }

    /// Search foods by text or barcode
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<NutritionSearchRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(payload)?;
        let response =
            nutrition_search::search_nutrition(resources.fatsecret.as_ref(), &request).await?;
        Ok(Json(response).into_response())
    }
}
