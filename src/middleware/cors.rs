// ABOUTME: CORS middleware configuration for the gateway endpoints
// ABOUTME: Browser clients call the nutrition and guidance endpoints directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Configure CORS from the configured origin list
///
/// `["*"]` (or a list where nothing parses) allows any origin. Preflight
/// `OPTIONS` requests are answered by the layer and never reach a handler.
///
/// ```bash
/// # Allow specific origins
/// export CORS_ORIGINS="https://app.example.com,http://localhost:3000"
/// ```
#[must_use]
pub fn setup_cors(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|e| warn!(origin = %origin, "Ignoring invalid CORS origin: {}", e))
                    .ok()
            })
            .collect();

        if parsed.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(parsed)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
