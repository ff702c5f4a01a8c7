// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Nutrition search and AI guidance flows, independent of the HTTP layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers only extract the request and hand it to these functions,
//! which own validation order, configuration checks and response shaping.

/// AI guidance: prompt selection and LLM relay
pub mod guidance;

/// Nutrition search: mode selection, upstream call and shaping
pub mod nutrition_search;
