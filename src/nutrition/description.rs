// ABOUTME: Best-effort parser for FatSecret free-text nutrition descriptions
// ABOUTME: Extracts serving size, calories, fat, carbs and protein with safe defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition description parsing
//!
//! `FatSecret` search hits carry their nutrition facts only as a summary line:
//!
//! ```text
//! Per 100g - Calories: 165kcal | Fat: 3.6g | Carbs: 0g | Protein: 31g
//! ```
//!
//! Each field is located independently by its label, so field order and
//! separators do not matter. Anything missing or unparseable falls back to a
//! default; parsing never fails.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Serving size reported when the description has no `Per ...` prefix
pub const DEFAULT_SERVING_SIZE: &str = "100";
/// Serving unit reported when the description has no `Per ...` prefix
pub const DEFAULT_SERVING_UNIT: &str = "g";

static SERVING_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\bper\s+(\d+(?:[.,/]\d+)*)\s*([^-|]*?)\s*(?:-|\||$)").ok()
});

// A label only counts at the start of the line or right after a separator,
// so qualified labels such as `Saturated Fat` are skipped. Values may carry
// thousands separators.
fn field_pattern(label: &str) -> Option<Regex> {
    Regex::new(&format!(
        r"(?i)(?:^|[-|,;]\s*){label}\s*:?\s*(\d{{1,3}}(?:,\d{{3}})+(?:\.\d+)?|\d+(?:\.\d+)?|\.\d+)"
    ))
    .ok()
}

static CALORIES_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| field_pattern("calories"));

static FAT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| field_pattern("fat"));

// Carb, Carbs, Carbohydrate and Carbohydrates are the same field
static CARBS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| field_pattern("carb(?:ohydrate)?s?"));

static PROTEIN_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| field_pattern("protein"));

/// Nutrition values extracted from a description line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedNutrition {
    /// Serving amount as written, e.g. `"100"` or `"1/2"`
    pub serving_size: String,
    /// Serving unit as written, e.g. `"g"` or `"cup"`
    pub serving_unit: String,
    /// Energy in kcal
    pub calories: f64,
    /// Fat in grams
    pub fat: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Protein in grams
    pub protein: f64,
}

impl Default for ParsedNutrition {
    fn default() -> Self {
        Self {
            serving_size: DEFAULT_SERVING_SIZE.to_owned(),
            serving_unit: DEFAULT_SERVING_UNIT.to_owned(),
            calories: 0.0,
            fat: 0.0,
            carbs: 0.0,
            protein: 0.0,
        }
    }
}

/// Parse a nutrition description, falling back to defaults field by field
#[must_use]
pub fn parse_description(description: Option<&str>) -> ParsedNutrition {
    let Some(text) = description.map(str::trim).filter(|t| !t.is_empty()) else {
        return ParsedNutrition::default();
    };

    let mut parsed = ParsedNutrition::default();

    if let Some((size, unit)) = extract_serving(text) {
        parsed.serving_size = size;
        if !unit.is_empty() {
            parsed.serving_unit = unit;
        }
    }

    parsed.calories = extract_number(&CALORIES_PATTERN, text).unwrap_or(0.0);
    parsed.fat = extract_number(&FAT_PATTERN, text).unwrap_or(0.0);
    parsed.carbs = extract_number(&CARBS_PATTERN, text).unwrap_or(0.0);
    parsed.protein = extract_number(&PROTEIN_PATTERN, text).unwrap_or(0.0);

    parsed
}

fn extract_serving(text: &str) -> Option<(String, String)> {
    let captures = SERVING_PATTERN.as_ref()?.captures(text)?;
    let size = captures.get(1)?.as_str().to_owned();
    let unit = captures
        .get(2)
        .map(|m| m.as_str().trim().to_owned())
        .unwrap_or_default();
    Some((size, unit))
}

fn extract_number(pattern: &LazyLock<Option<Regex>>, text: &str) -> Option<f64> {
    pattern
        .as_ref()?
        .captures(text)?
        .get(1)?
        .as_str()
        .replace(',', "")
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_description() {
        let parsed = parse_description(Some(
            "Per 100g - Calories: 165kcal | Fat: 3.6g | Carbs: 0g | Protein: 31g",
        ));
        assert_eq!(
            parsed,
            ParsedNutrition {
                serving_size: "100".to_owned(),
                serving_unit: "g".to_owned(),
                calories: 165.0,
                fat: 3.6,
                carbs: 0.0,
                protein: 31.0,
            }
        );
    }

    #[test]
    fn test_empty_and_missing_yield_defaults() {
        assert_eq!(parse_description(Some("")), ParsedNutrition::default());
        assert_eq!(parse_description(Some("   ")), ParsedNutrition::default());
        assert_eq!(parse_description(None), ParsedNutrition::default());
    }

    #[test]
    fn test_calories_only() {
        let parsed = parse_description(Some("Calories: 50"));
        assert_eq!(parsed.serving_size, "100");
        assert_eq!(parsed.serving_unit, "g");
        assert!((parsed.calories - 50.0).abs() < f64::EPSILON);
        assert!(parsed.fat.abs() < f64::EPSILON);
        assert!(parsed.carbs.abs() < f64::EPSILON);
        assert!(parsed.protein.abs() < f64::EPSILON);
    }

    #[test]
    fn test_field_order_and_case_do_not_matter() {
        let parsed = parse_description(Some(
            "protein: 4g, CALORIES: 120 kcal; carbohydrates: 22.5g, FAT: 1.2g",
        ));
        assert!((parsed.calories - 120.0).abs() < f64::EPSILON);
        assert!((parsed.protein - 4.0).abs() < f64::EPSILON);
        assert!((parsed.carbs - 22.5).abs() < f64::EPSILON);
        assert!((parsed.fat - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_carb_label_variants() {
        for label in ["Carb", "Carbs", "Carbohydrate", "Carbohydrates", "carbs"] {
            let parsed = parse_description(Some(&format!("{label}: 12g")));
            assert!(
                (parsed.carbs - 12.0).abs() < f64::EPSILON,
                "label {label} should parse"
            );
        }
    }

    #[test]
    fn test_serving_with_spaced_unit() {
        let parsed = parse_description(Some(
            "Per 1 cup - Calories: 103kcal | Fat: 2.37g | Carbs: 12.18g | Protein: 8.22g",
        ));
        assert_eq!(parsed.serving_size, "1");
        assert_eq!(parsed.serving_unit, "cup");
        assert!((parsed.fat - 2.37).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serving_without_unit_keeps_default_unit() {
        let parsed = parse_description(Some("Per 2 - Calories: 10kcal"));
        assert_eq!(parsed.serving_size, "2");
        assert_eq!(parsed.serving_unit, "g");
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let parsed = parse_description(Some("Calories: lots | Fat: ?g | Protein: 7g"));
        assert!(parsed.calories.abs() < f64::EPSILON);
        assert!(parsed.fat.abs() < f64::EPSILON);
        assert!((parsed.protein - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_qualified_fat_label_is_skipped() {
        let parsed = parse_description(Some(
            "Per 100g - Calories: 165kcal | Saturated Fat: 1g | Fat: 3.6g | Carbs: 0g | Protein: 31g",
        ));
        assert!((parsed.fat - 3.6).abs() < f64::EPSILON);
        assert!((parsed.calories - 165.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_thousands_separator_in_value() {
        let parsed = parse_description(Some(
            "Per 1 pizza - Calories: 1,250kcal | Fat: 52g | Carbs: 140.5g | Protein: 1,020.5g",
        ));
        assert!((parsed.calories - 1250.0).abs() < f64::EPSILON);
        assert!((parsed.fat - 52.0).abs() < f64::EPSILON);
        assert!((parsed.protein - 1020.5).abs() < f64::EPSILON);
    }
}
