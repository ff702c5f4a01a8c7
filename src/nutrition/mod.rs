// ABOUTME: Nutrition domain types: description parsing and food record shaping
// ABOUTME: Turns raw FatSecret search hits into the search and barcode response shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition domain
//!
//! - [`description`]: best-effort extraction of numbers from description lines
//! - [`food`]: normalized [`FoodRecord`] plus the wire shapes built from it

/// Free-text nutrition description parsing
pub mod description;
/// Food records and response shapes
pub mod food;

pub use description::{parse_description, ParsedNutrition};
pub use food::{BarcodeFood, FoodRecord, FoodSearchResponse, FoodSummary};
