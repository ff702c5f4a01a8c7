// ABOUTME: HTTP middleware for the gateway router
// ABOUTME: Cross-origin resource sharing configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
