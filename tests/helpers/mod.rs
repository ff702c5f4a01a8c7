// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Router construction against fake upstreams plus the Axum request helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;

use std::sync::Arc;

use nutrition_gateway::config::ServerConfig;
use nutrition_gateway::server::{build_router, ServerResources};

/// Path the fake `FatSecret` server answers on
pub const FATSECRET_PATH: &str = "/rest/server.api";

/// Consumer credentials used against the fake `FatSecret` server
pub const CONSUMER_KEY: &str = "test_consumer_key";
pub const CONSUMER_SECRET: &str = "test_consumer_secret";

/// API key used against the fake chat completion server
pub const OPENAI_KEY: &str = "sk-test-key";

/// Configuration pointing at fake upstreams; `None` leaves that upstream unconfigured
pub fn test_config(fatsecret_base: Option<&str>, openai_base: Option<&str>) -> ServerConfig {
    let mut config = ServerConfig::default();
    if let Some(base) = fatsecret_base {
        config.fatsecret.consumer_key = Some(CONSUMER_KEY.to_owned());
        config.fatsecret.consumer_secret = Some(CONSUMER_SECRET.to_owned());
        config.fatsecret.api_url = format!("{base}{FATSECRET_PATH}");
    }
    if let Some(base) = openai_base {
        config.llm.api_key = Some(OPENAI_KEY.to_owned());
        config.llm.base_url = base.to_owned();
    }
    config.http_client.timeout_secs = 5;
    config.http_client.connect_timeout_secs = 2;
    config
}

/// Full application router for a configuration
pub fn gateway(config: ServerConfig) -> axum::Router {
    build_router(Arc::new(ServerResources::new(config)))
}
