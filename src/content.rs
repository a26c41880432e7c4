// Copyright 2025 Motordex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Content lookup service.
//!
//! Composes catalog client calls to translate brand/model names into
//! resolved ids and recommendation content. Two error-handling modes apply:
//! the existence check is fail-open (remote status failures degrade to a
//! negative result so a display page never crashes), the save path is
//! fail-closed (every failure is logged and returned, since silently
//! dropping a write would hide it).

use std::sync::Arc;

use chrono::Utc;

use crate::client::CatalogApi;
use crate::error::{ApiError, ContentError};
use crate::model::{Brand, CarContent, ContentCheckResult, Model, Recommendation};

/// Year assumed when the caller does not supply one.
pub const DEFAULT_YEAR: i32 = 2025;

#[derive(Clone)]
pub struct ContentService {
    api: Arc<dyn CatalogApi>,
}

impl ContentService {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// Answer whether recommendation content exists for a brand/model pair.
    ///
    /// Fail-open mode: a non-2xx from the catalog at any step is logged and
    /// reported as `exists: false`. Transport faults still propagate so an
    /// outage is distinguishable from genuinely missing content.
    pub async fn check_content_exists(
        &self,
        brand: &str,
        model: &str,
        year: i32,
    ) -> Result<ContentCheckResult, ContentError> {
        let Some(brands) = soften(self.api.get_brands().await, "list brands")? else {
            return Ok(ContentCheckResult::miss());
        };
        let Some(brand_entry) = find_brand(&brands, brand) else {
            return Ok(ContentCheckResult::miss());
        };

        let Some(models) = soften(
            self.api.get_models_by_brand(brand_entry.id).await,
            "list models",
        )?
        else {
            return Ok(ContentCheckResult::miss());
        };
        let Some(model_entry) = find_model(&models, model) else {
            return Ok(ContentCheckResult::miss());
        };

        let Some(response) = soften(
            self.api
                .get_model_recommendation(brand_entry.id, model_entry.id)
                .await,
            "fetch recommendation",
        )?
        else {
            return Ok(ContentCheckResult::miss());
        };

        if response.success {
            if let Some(data) = response.data {
                let text = data.content.clone().unwrap_or_default();
                return Ok(ContentCheckResult::hit(build_content(
                    &data, brand, model, year, text,
                )));
            }
        }

        Ok(ContentCheckResult::miss())
    }

    /// Generate and persist recommendation content for a brand/model pair.
    ///
    /// Fail-closed mode: a missing brand or model is a hard error naming the
    /// missing entity, and every failure is logged and returned.
    pub async fn save_content(
        &self,
        brand: &str,
        model: &str,
        year: i32,
        content: &str,
    ) -> Result<CarContent, ContentError> {
        let result = self.save_inner(brand, model, year, content).await;
        if let Err(err) = &result {
            tracing::error!(brand, model, year, %err, "failed to save content");
        }
        result
    }

    async fn save_inner(
        &self,
        brand: &str,
        model: &str,
        year: i32,
        content: &str,
    ) -> Result<CarContent, ContentError> {
        let brands = self.api.get_brands().await?;
        let brand_entry = find_brand(&brands, brand)
            .ok_or_else(|| ContentError::BrandNotFound(brand.to_string()))?;

        let models = self.api.get_models_by_brand(brand_entry.id).await?;
        let model_entry = find_model(&models, model).ok_or_else(|| ContentError::ModelNotFound {
            brand: brand.to_string(),
            model: model.to_string(),
        })?;

        let response = self
            .api
            .generate_model_recommendation(brand_entry.id, model_entry.id)
            .await?;

        let data = if response.success { response.data } else { None };
        let Some(data) = data else {
            return Err(ContentError::GenerationFailed);
        };

        let text = data
            .recommendation
            .clone()
            .unwrap_or_else(|| content.to_string());
        Ok(build_content(&data, brand, model, year, text))
    }

    /// Existing content for the pair, or `None` when the check misses.
    pub async fn get_content(
        &self,
        brand: &str,
        model: &str,
        year: i32,
    ) -> Result<Option<CarContent>, ContentError> {
        let result = self.check_content_exists(brand, model, year).await?;
        Ok(result.content)
    }
}

/// Fail-open mapping for the existence check: status failures become a
/// miss, transport faults propagate.
fn soften<T>(result: Result<T, ApiError>, operation: &str) -> Result<Option<T>, ContentError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ApiError::Status(code)) => {
            tracing::warn!(status = code, operation, "catalog error treated as missing content");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

// Name matching is a linear scan with Unicode lowercasing on both sides,
// exact match only.
fn find_brand<'a>(brands: &'a [Brand], name: &str) -> Option<&'a Brand> {
    let wanted = name.to_lowercase();
    brands.iter().find(|b| b.name.to_lowercase() == wanted)
}

fn find_model<'a>(models: &'a [Model], name: &str) -> Option<&'a Model> {
    let wanted = name.to_lowercase();
    models.iter().find(|m| m.name.to_lowercase() == wanted)
}

fn build_content(
    data: &Recommendation,
    brand: &str,
    model: &str,
    year: i32,
    text: String,
) -> CarContent {
    let created_at = data.created_at.unwrap_or_else(Utc::now);
    CarContent {
        id: data
            .id
            .clone()
            .unwrap_or_else(|| slug_id(brand, model, year)),
        brand: brand.to_string(),
        model: model.to_string(),
        year,
        content: text,
        generated_at: created_at,
        updated_at: created_at,
    }
}

fn slug_id(brand: &str, model: &str, year: i32) -> String {
    format!("{brand}-{model}-{year}")
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
