// ABOUTME: Configuration module for centralized gateway settings
// ABOUTME: Environment-sourced server, upstream and HTTP client configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and server configuration
pub mod environment;

pub use environment::{FatSecretConfig, HttpClientConfig, LlmConfig, ServerConfig};
