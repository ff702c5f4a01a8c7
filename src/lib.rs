// ABOUTME: Main library entry point for the nutrition gateway
// ABOUTME: OAuth 1.0a signed nutrition search and LLM-backed nutrition guidance over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Gateway
//!
//! Two thin HTTP endpoints in front of third-party APIs:
//!
//! - **Nutrition search**: OAuth 1.0a (HMAC-SHA1) signed `foods.search`
//!   calls against the `FatSecret` Platform API, with the free-text
//!   nutrition description of each hit parsed into numbers
//! - **AI guidance**: nutrition and goal data rendered into one of six
//!   prompt templates and sent to an `OpenAI` chat completion model
//!
//! Nothing is persisted and no state is shared between requests beyond
//! the immutable configuration and pooled HTTP clients.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrition_gateway::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     nutrition_gateway::server::run(config).await
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants grouped by domain
pub mod constants;

/// Unified error handling
pub mod errors;

/// External API clients
pub mod external;

/// LLM provider abstraction and guidance prompts
pub mod llm;

/// Logging configuration
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Nutrition description parsing and response shaping
pub mod nutrition;

/// OAuth 1.0a request signing
pub mod oauth1;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serve loop
pub mod server;

/// Domain services behind the routes
pub mod services;

/// Shared utilities
pub mod utils;
