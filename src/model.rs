// Copyright 2025 Motordex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Wire types for the remote catalog API and the local content shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vehicle manufacturer entity in the remote catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
}

/// A vehicle model entity, scoped to a brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub average_price: Option<f64>,
    pub brand_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateBrandRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateModelRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_price: Option<f64>,
}

/// Optional price bounds for the flat model listing. A bound set to zero is
/// still sent; only `None` is omitted from the query string.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelsFilter {
    pub greater: Option<f64>,
    pub lower: Option<f64>,
}

/// AI-generated text tied to a brand or brand+model pair.
///
/// The generate endpoints return the text under `recommendation`, the fetch
/// endpoints under `content`; both stay optional here and each call site
/// reads the field its endpoint produces.
#[derive(Debug, Clone, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub brand_id: Option<i64>,
    #[serde(default)]
    pub model_id: Option<i64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Recommendation>,
}

/// Local content record derived from a recommendation plus the
/// caller-supplied brand/model names and year. Never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarContent {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub content: String,
    pub generated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Transient answer to "does content exist"; constructed fresh per call.
#[derive(Debug, Clone, Serialize)]
pub struct ContentCheckResult {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<CarContent>,
}

impl ContentCheckResult {
    pub fn miss() -> Self {
        Self {
            exists: false,
            content: None,
        }
    }

    pub fn hit(content: CarContent) -> Self {
        Self {
            exists: true,
            content: Some(content),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckContentQuery {
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct CheckContentResponse {
    pub exists: bool,
    pub content: Option<CarContent>,
    pub brand: String,
    pub model: String,
    pub year: i32,
}
