// ABOUTME: Route module organization for the nutrition gateway HTTP endpoints
// ABOUTME: Domain routers plus the shared JSON fallbacks and body extraction helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the nutrition gateway
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to [`crate::services`].

/// AI guidance route
pub mod guidance;
/// Health check and readiness routes
pub mod health;
/// Nutrition search route
pub mod nutrition;

pub use guidance::GuidanceRoutes;
pub use health::HealthRoutes;
pub use nutrition::NutritionRoutes;

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::errors::AppError;

/// Unwrap a JSON body, turning extractor rejections into 400 responses
///
/// # Errors
///
/// Returns `InvalidInput` for malformed JSON, a wrong content type or a
/// body that does not match the expected shape
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Fallback for unsupported methods on a known path
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

/// Fallback for unknown paths
pub async fn not_found() -> AppError {
    AppError::not_found("Route")
}
