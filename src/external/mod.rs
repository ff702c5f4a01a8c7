// ABOUTME: External API client modules (FatSecret Platform API)
// ABOUTME: Signed nutrition database lookups consumed as a black box
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! This module contains clients for third-party data APIs used by the gateway.

pub mod fatsecret_client;

// Re-export commonly used types
pub use fatsecret_client::{FatSecretClient, FatSecretClientConfig, FoodSearchHit};
