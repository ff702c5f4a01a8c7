// ABOUTME: Environment configuration for the nutrition gateway
// ABOUTME: Reads bind address, upstream credentials, base URLs, timeouts and CORS origins once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! [`ServerConfig`] is built once in `main` and shared read-only with every
//! handler. Missing upstream credentials are not a startup error: the
//! affected endpoint answers 500 "not configured" instead.

use crate::constants::{defaults, env_keys, fatsecret, llm};
use crate::external::FatSecretClientConfig;
use crate::llm::OpenAiConfig;
use anyhow::{Context, Result};
use std::env;
use tracing::{info, warn};

/// `FatSecret` Platform API settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatSecretConfig {
    /// OAuth consumer key
    pub consumer_key: Option<String>,
    /// OAuth consumer secret
    pub consumer_secret: Option<String>,
    /// REST endpoint URL
    pub api_url: String,
}

/// Chat completion API settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// Bearer API key
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
}

/// Outbound HTTP client timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

/// Process-wide gateway configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub http_port: u16,
    /// Nutrition database settings
    pub fatsecret: FatSecretConfig,
    /// LLM settings
    pub llm: LlmConfig,
    /// Outbound client timeouts
    pub http_client: HttpClientConfig,
    /// Allowed CORS origins; `["*"]` allows any
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            fatsecret: FatSecretConfig {
                consumer_key: None,
                consumer_secret: None,
                api_url: fatsecret::API_URL.to_owned(),
            },
            llm: LlmConfig {
                api_key: None,
                base_url: llm::API_BASE_URL.to_owned(),
                model: llm::DEFAULT_MODEL.to_owned(),
            },
            http_client: HttpClientConfig {
                timeout_secs: defaults::HTTP_CLIENT_TIMEOUT_SECS,
                connect_timeout_secs: defaults::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
            },
            cors_origins: parse_origins(defaults::CORS_ORIGINS),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        Ok(Self {
            host: env_var_or(env_keys::HOST, defaults::HOST),
            http_port: env_var_or(env_keys::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            fatsecret: FatSecretConfig {
                consumer_key: optional_env(env_keys::FATSECRET_CONSUMER_KEY),
                consumer_secret: optional_env(env_keys::FATSECRET_CONSUMER_SECRET),
                api_url: env_var_or(env_keys::FATSECRET_API_URL, fatsecret::API_URL),
            },
            llm: LlmConfig {
                api_key: optional_env(env_keys::OPENAI_API_KEY),
                base_url: env_var_or(env_keys::OPENAI_API_BASE, llm::API_BASE_URL),
                model: env_var_or(env_keys::OPENAI_MODEL, llm::DEFAULT_MODEL),
            },
            http_client: HttpClientConfig {
                timeout_secs: env_var_or(
                    env_keys::HTTP_CLIENT_TIMEOUT_SECS,
                    &defaults::HTTP_CLIENT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid HTTP_CLIENT_TIMEOUT_SECS value")?,
                connect_timeout_secs: env_var_or(
                    env_keys::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
                    &defaults::HTTP_CLIENT_CONNECT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid HTTP_CLIENT_CONNECT_TIMEOUT_SECS value")?,
            },
            cors_origins: parse_origins(&env_var_or(
                env_keys::CORS_ORIGINS,
                defaults::CORS_ORIGINS,
            )),
        })
    }

    /// `FatSecret` client settings, if both credentials are present
    #[must_use]
    pub fn fatsecret_client_config(&self) -> Option<FatSecretClientConfig> {
        match (&self.fatsecret.consumer_key, &self.fatsecret.consumer_secret) {
            (Some(key), Some(secret)) => Some(FatSecretClientConfig {
                consumer_key: key.clone(),
                consumer_secret: secret.clone(),
                api_url: self.fatsecret.api_url.clone(),
            }),
            _ => None,
        }
    }

    /// `OpenAI` provider settings, if an API key is present
    #[must_use]
    pub fn openai_config(&self) -> Option<OpenAiConfig> {
        self.llm.api_key.as_ref().map(|api_key| OpenAiConfig {
            api_key: api_key.clone(),
            base_url: self.llm.base_url.clone(),
            model: self.llm.model.clone(),
        })
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrition Gateway Configuration:\n\
             - Bind: {}:{}\n\
             - FatSecret: {} ({})\n\
             - LLM: {} ({}, model {})\n\
             - HTTP Client Timeouts: {}s request, {}s connect\n\
             - CORS Origins: {}",
            self.host,
            self.http_port,
            if self.fatsecret_client_config().is_some() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.fatsecret.api_url,
            if self.llm.api_key.is_some() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.llm.base_url,
            self.llm.model,
            self.http_client.timeout_secs,
            self.http_client.connect_timeout_secs,
            self.cors_origins.join(", "),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get a non-blank environment variable
fn optional_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
