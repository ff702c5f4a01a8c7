// ABOUTME: Outbound HTTP client construction with timeout configuration
// ABOUTME: One pooled reqwest client is built at startup and shared by both upstream clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::warn;

/// Create a new HTTP client with custom timeout settings
///
/// `reqwest::Client` pools connections internally and is cheap to clone, so
/// the server builds one of these and hands clones to each upstream client.
///
/// # Arguments
/// * `timeout_secs` - Request timeout in seconds
/// * `connect_timeout_secs` - Connection timeout in seconds
///
/// Falls back to a default client if the builder fails (TLS backend init).
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .user_agent(concat!("nutrition-gateway/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            warn!("Failed to build configured HTTP client, using defaults: {}", e);
            Client::new()
        })
}
