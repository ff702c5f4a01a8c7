// ABOUTME: Normalized food records and the two response shapes returned by nutrition search
// ABOUTME: Applies rounding rules (integer calories, one-decimal macros) when shaping output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::description::{parse_description, ParsedNutrition};
use crate::constants::fatsecret::{GENERIC_BRAND, SOURCE};
use serde::{Deserialize, Serialize};

/// A food normalized from one upstream search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Upstream food identifier
    pub id: String,
    /// Food name
    pub name: String,
    /// Brand name, `Generic` for unbranded foods
    pub brand: String,
    /// Energy per serving in kcal
    pub calories_per_serving: f64,
    /// Protein per serving in grams
    pub protein_grams: f64,
    /// Carbohydrates per serving in grams
    pub carb_grams: f64,
    /// Fat per serving in grams
    pub fat_grams: f64,
    /// Serving amount as written upstream
    pub serving_size_value: String,
    /// Serving unit as written upstream
    pub serving_size_unit: String,
}

impl FoodRecord {
    /// Build a record from raw hit fields, parsing nutrition out of the description
    #[must_use]
    pub fn from_search_hit(
        id: impl Into<String>,
        name: impl Into<String>,
        brand: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        let ParsedNutrition {
            serving_size,
            serving_unit,
            calories,
            fat,
            carbs,
            protein,
        } = parse_description(description);

        Self {
            id: id.into(),
            name: name.into(),
            brand: brand
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .unwrap_or(GENERIC_BRAND)
                .to_owned(),
            calories_per_serving: calories,
            protein_grams: protein,
            carb_grams: carbs,
            fat_grams: fat,
            serving_size_value: serving_size,
            serving_size_unit: serving_unit,
        }
    }

    /// Serving size and unit as one display string, e.g. `100g` or `1 cup`
    #[must_use]
    pub fn serving_label(&self) -> String {
        let unit = self.serving_size_unit.as_str();
        if matches!(unit, "g" | "mg" | "kg" | "ml" | "l" | "oz") {
            format!("{}{unit}", self.serving_size_value)
        } else {
            format!("{} {unit}", self.serving_size_value)
        }
    }
}

/// Round calories to a whole number
#[must_use]
pub fn round_calories(value: f64) -> i64 {
    value.round() as i64
}

/// Round a macronutrient to one decimal place
#[must_use]
pub fn round_macro(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Search-mode entry in `{"foods": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSummary {
    /// Upstream food identifier
    pub food_id: String,
    /// Food name
    pub food_name: String,
    /// Brand name
    pub brand_name: String,
    /// Calories, whole number
    pub calories: i64,
    /// Protein grams, one decimal
    pub protein: f64,
    /// Carbohydrate grams, one decimal
    pub carbohydrate: f64,
    /// Fat grams, one decimal
    pub fat: f64,
    /// Serving amount
    pub serving_size: String,
    /// Serving unit
    pub serving_unit: String,
}

impl From<&FoodRecord> for FoodSummary {
    fn from(record: &FoodRecord) -> Self {
        Self {
            food_id: record.id.clone(),
            food_name: record.name.clone(),
            brand_name: record.brand.clone(),
            calories: round_calories(record.calories_per_serving),
            protein: round_macro(record.protein_grams),
            carbohydrate: round_macro(record.carb_grams),
            fat: round_macro(record.fat_grams),
            serving_size: record.serving_size_value.clone(),
            serving_unit: record.serving_size_unit.clone(),
        }
    }
}

/// Search-mode response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSearchResponse {
    /// Shaped hits in upstream order
    pub foods: Vec<FoodSummary>,
}

/// Barcode-mode response body, kept flat for older clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeFood {
    /// Barcode as supplied by the caller
    pub barcode: String,
    /// Food name
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Calories, whole number
    pub calories: i64,
    /// Protein grams, one decimal
    pub protein: f64,
    /// Carbohydrate grams, one decimal
    pub carbohydrates: f64,
    /// Fat grams, one decimal
    pub fat: f64,
    /// Serving label, e.g. `100g`
    pub serving_size: String,
    /// Always `fatsecret`
    pub source: String,
}

impl BarcodeFood {
    /// Shape a record for the barcode response
    #[must_use]
    pub fn from_record(barcode: impl Into<String>, record: &FoodRecord) -> Self {
        Self {
            barcode: barcode.into(),
            name: record.name.clone(),
            brand: record.brand.clone(),
            calories: round_calories(record.calories_per_serving),
            protein: round_macro(record.protein_grams),
            carbohydrates: round_macro(record.carb_grams),
            fat: round_macro(record.fat_grams),
            serving_size: record.serving_label(),
            source: SOURCE.to_owned(),
        }
    }
}
