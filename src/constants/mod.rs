// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Upstream endpoints, OAuth 1.0a protocol values, LLM request settings and env keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Environment variable names read by `ServerConfig::from_env`
pub mod env_keys {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// `FatSecret` OAuth consumer key
    pub const FATSECRET_CONSUMER_KEY: &str = "FATSECRET_CONSUMER_KEY";
    /// `FatSecret` OAuth consumer secret
    pub const FATSECRET_CONSUMER_SECRET: &str = "FATSECRET_CONSUMER_SECRET";
    /// `FatSecret` REST endpoint override
    pub const FATSECRET_API_URL: &str = "FATSECRET_API_URL";
    /// `OpenAI` API key
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// `OpenAI`-compatible API base URL override
    pub const OPENAI_API_BASE: &str = "OPENAI_API_BASE";
    /// Chat completion model override
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    /// Outbound request timeout in seconds
    pub const HTTP_CLIENT_TIMEOUT_SECS: &str = "HTTP_CLIENT_TIMEOUT_SECS";
    /// Outbound connect timeout in seconds
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: &str = "HTTP_CLIENT_CONNECT_TIMEOUT_SECS";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ORIGINS: &str = "CORS_ORIGINS";
    /// Tracing filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (`json`, `compact`, `pretty`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default configuration values
pub mod defaults {
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default bind port
    pub const HTTP_PORT: u16 = 8081;
    /// Default outbound request timeout
    pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 30;
    /// Default outbound connect timeout
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default CORS origins
    pub const CORS_ORIGINS: &str = "*";
}

/// `FatSecret` Platform API values
pub mod fatsecret {
    /// Service name used in error messages and logs
    pub const SERVICE_NAME: &str = "FatSecret API";
    /// REST endpoint for all method calls
    pub const API_URL: &str = "https://platform.fatsecret.com/rest/server.api";
    /// Food search method
    pub const METHOD_FOODS_SEARCH: &str = "foods.search";
    /// Response format requested from the API
    pub const FORMAT_JSON: &str = "json";
    /// Maximum results requested per search
    pub const MAX_RESULTS: u32 = 20;
    /// `source` value reported in barcode responses
    pub const SOURCE: &str = "fatsecret";
    /// Brand reported for generic (unbranded) foods
    pub const GENERIC_BRAND: &str = "Generic";
}

/// OAuth 1.0a protocol values
pub mod oauth1 {
    /// Only signature method supported
    pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
    /// Protocol version
    pub const VERSION: &str = "1.0";
    /// Nonce length in characters
    pub const NONCE_LENGTH: usize = 26;
}

/// LLM chat completion settings
pub mod llm {
    /// Service name used in error messages and logs
    pub const SERVICE_NAME: &str = "OpenAI API";
    /// Default `OpenAI` API base URL
    pub const API_BASE_URL: &str = "https://api.openai.com/v1";
    /// Default chat completion model
    pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
    /// Sampling temperature for guidance prompts
    pub const TEMPERATURE: f32 = 0.7;
    /// Maximum output tokens for guidance prompts
    pub const MAX_TOKENS: u32 = 500;
}

/// Service names for structured logging
pub mod service_names {
    /// This service
    pub const NUTRITION_GATEWAY: &str = "nutrition-gateway";
}
