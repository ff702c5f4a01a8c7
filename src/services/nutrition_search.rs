// ABOUTME: Nutrition search business logic behind the /api/nutrition/search endpoint
// ABOUTME: Chooses search or barcode mode, calls FatSecret and shapes the hits into the response body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::constants::fatsecret::{MAX_RESULTS, SERVICE_NAME};
use crate::errors::{AppError, AppResult};
use crate::external::{FatSecretClient, FoodSearchHit};
use crate::nutrition::{BarcodeFood, FoodRecord, FoodSearchResponse, FoodSummary};

/// Body of a nutrition search request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NutritionSearchRequest {
    /// Product barcode; takes precedence over `search`
    #[serde(default)]
    pub barcode: Option<String>,
    /// Free-text search expression
    #[serde(default)]
    pub search: Option<String>,
}

/// Which lookup the caller asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Barcode lookup, answered with a single flat record
    Barcode(String),
    /// Text search, answered with a list of summaries
    Text(String),
}

impl SearchQuery {
    /// Expression sent to `foods.search`
    ///
    /// Barcode mode sends the digits as a plain text search; `FatSecret` has a
    /// dedicated barcode method that is not used here, so a barcode lookup
    /// may not find the intended product.
    #[must_use]
    pub fn expression(&self) -> &str {
        match self {
            Self::Barcode(code) | Self::Text(code) => code,
        }
    }

    /// Mode name for logs
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::Barcode(_) => "barcode",
            Self::Text(_) => "search",
        }
    }
}

impl NutritionSearchRequest {
    /// Resolve the lookup mode
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when neither field holds a non-blank value
    pub fn query(&self) -> AppResult<SearchQuery> {
        let non_blank = |field: &Option<String>| {
            field
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        };

        non_blank(&self.barcode)
            .map(SearchQuery::Barcode)
            .or_else(|| non_blank(&self.search).map(SearchQuery::Text))
            .ok_or_else(|| AppError::invalid_input("Barcode or search query is required"))
    }
}

/// Response body, shape depends on the lookup mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NutritionSearchResponse {
    /// `{"foods": [...]}`
    Foods(FoodSearchResponse),
    /// Flat barcode record
    Barcode(BarcodeFood),
}

fn to_record(hit: &FoodSearchHit) -> FoodRecord {
    FoodRecord::from_search_hit(
        hit.food_id.as_str(),
        hit.food_name.as_str(),
        hit.brand_name.as_deref(),
        hit.food_description.as_deref(),
    )
}

/// Shape upstream hits for the given mode
///
/// Search mode keeps at most `MAX_RESULTS` summaries in upstream order.
///
/// # Errors
///
/// Returns `ResourceNotFound` when there are no hits
pub fn shape_results(
    query: &SearchQuery,
    hits: &[FoodSearchHit],
) -> AppResult<NutritionSearchResponse> {
    let first = hits
        .first()
        .ok_or_else(|| AppError::not_found("Food"))?;

    Ok(match query {
        SearchQuery::Barcode(code) => {
            NutritionSearchResponse::Barcode(BarcodeFood::from_record(code.as_str(), &to_record(first)))
        }
        SearchQuery::Text(_) => NutritionSearchResponse::Foods(FoodSearchResponse {
            foods: hits
                .iter()
                .take(MAX_RESULTS as usize)
                .map(|hit| FoodSummary::from(&to_record(hit)))
                .collect(),
        }),
    })
}

/// Run a nutrition search end to end
///
/// Validation happens before the configuration check, and no outbound call
/// is made unless both succeed.
///
/// # Errors
///
/// - `InvalidInput` when no query was supplied
/// - `ConfigMissing` when `FatSecret` credentials are absent
/// - `ExternalServiceError` when the upstream call fails
/// - `ResourceNotFound` when the search has no hits
#[instrument(skip_all)]
pub async fn search_nutrition(
    client: Option<&FatSecretClient>,
    request: &NutritionSearchRequest,
) -> AppResult<NutritionSearchResponse> {
    let query = request.query()?;
    let client = client.ok_or_else(|| AppError::config_missing(SERVICE_NAME))?;

    let hits = client.search_foods(query.expression()).await?;
    info!(
        mode = query.mode(),
        query = query.expression(),
        result_count = hits.len(),
        "Nutrition search completed"
    );

    shape_results(&query, &hits)
}
