// ABOUTME: FatSecret Platform API client for OAuth 1.0a signed food searches
// ABOUTME: Issues foods.search requests and decodes the array/object/empty result variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `FatSecret` Platform API Client
//!
//! Every call is a signed GET against the single REST endpoint, with the
//! API method named in the `method` parameter. Requests are signed
//! consumer-only (two-legged) with [`crate::oauth1`].
//!
//! # Response quirks
//! - `foods.food` is an array for several hits, an object for one hit, and
//!   absent for zero hits
//! - API errors arrive as HTTP 200 with an `{"error": {...}}` body
//!
//! # API Reference
//! <https://platform.fatsecret.com/docs/v1/foods.search>

use crate::constants::fatsecret::{FORMAT_JSON, MAX_RESULTS, METHOD_FOODS_SEARCH, SERVICE_NAME};
use crate::errors::{AppError, AppResult};
use crate::oauth1::{percent_encode, OAuthRequestBuilder};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, error, instrument};
use url::Url;

/// `FatSecret` client configuration
#[derive(Debug, Clone)]
pub struct FatSecretClientConfig {
    /// OAuth consumer key
    pub consumer_key: String,
    /// OAuth consumer secret
    pub consumer_secret: String,
    /// REST endpoint URL
    pub api_url: String,
}

/// One hit from `foods.search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSearchHit {
    /// `FatSecret` food identifier
    #[serde(deserialize_with = "string_or_number")]
    pub food_id: String,
    /// Food name
    pub food_name: String,
    /// Brand name, absent for generic foods
    #[serde(default)]
    pub brand_name: Option<String>,
    /// Nutrition summary line, e.g. `Per 100g - Calories: 165kcal | ...`
    #[serde(default)]
    pub food_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    foods: Option<FoodsPage>,
    #[serde(default)]
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct FoodsPage {
    #[serde(default)]
    food: Option<OneOrMany<FoodSearchHit>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// `FatSecret` Platform API client
#[derive(Debug, Clone)]
pub struct FatSecretClient {
    config: FatSecretClientConfig,
    http_client: Client,
}

impl FatSecretClient {
    /// Create a client using the given HTTP client
    #[must_use]
    pub const fn new(config: FatSecretClientConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Build the signed parameter set for a `foods.search` call
    #[must_use]
    pub fn search_params(&self, query: &str) -> BTreeMap<String, String> {
        OAuthRequestBuilder::new(&self.config.consumer_key, &self.config.consumer_secret)
            .param("method", METHOD_FOODS_SEARCH)
            .param("search_expression", query)
            .param("format", FORMAT_JSON)
            .param("max_results", MAX_RESULTS.to_string())
            .sign("GET", &self.config.api_url)
    }

    /// Search foods by free-text expression
    ///
    /// Returns hits in upstream order; an empty vector means no matches.
    ///
    /// # Errors
    /// Returns `ExternalServiceError` if the request fails, the API answers
    /// with a non-success status, the body cannot be decoded, or the body is
    /// an API error payload
    #[instrument(skip(self), fields(service = SERVICE_NAME))]
    pub async fn search_foods(&self, query: &str) -> AppResult<Vec<FoodSearchHit>> {
        let params = self.search_params(query);
        let query_string = params
            .iter()
            .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let mut url = Url::parse(&self.config.api_url).map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("Invalid API URL: {e}"))
        })?;
        // Pre-encoded so the wire form matches the signed form exactly
        url.set_query(Some(&query_string));

        debug!("Sending foods.search request");

        let response = self.http_client.get(url).send().await.map_err(|e| {
            error!("Failed to reach FatSecret API: {}", e);
            AppError::external_service(SERVICE_NAME, format!("Failed to connect: {e}"))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!(
                    "HTTP {status}: {}",
                    body.chars().take(200).collect::<String>()
                ),
            ));
        }

        Self::parse_search_body(&body)
    }

    fn parse_search_body(body: &str) -> AppResult<Vec<FoodSearchHit>> {
        let envelope: SearchEnvelope = serde_json::from_str(body).map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        if let Some(api_error) = envelope.error {
            let message = api_error
                .message
                .unwrap_or_else(|| "Unknown API error".to_owned());
            return Err(AppError::external_service(
                SERVICE_NAME,
                api_error
                    .code
                    .map_or_else(|| message.clone(), |code| format!("error {code}: {message}")),
            ));
        }

        let hits = envelope
            .foods
            .and_then(|page| page.food)
            .map(OneOrMany::into_vec)
            .unwrap_or_default();

        debug!(result_count = hits.len(), "Decoded foods.search response");
        Ok(hits)
    }
}
