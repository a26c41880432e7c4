// Copyright 2025 Motordex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Resource client for the remote cars catalog API.
//!
//! One method per remote action; every call issues exactly one outbound
//! request and routes its response through [`decode_response`], the single
//! chokepoint that turns non-2xx statuses into [`ApiError::Status`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::model::{
    Brand, CreateBrandRequest, CreateModelRequest, Model, ModelsFilter, RecommendationResponse,
    UpdateModelRequest,
};

/// The catalog transport seam. Production uses [`HttpCatalogClient`]; tests
/// substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn get_brands(&self) -> Result<Vec<Brand>, ApiError>;
    async fn create_brand(&self, brand: CreateBrandRequest) -> Result<Brand, ApiError>;
    async fn get_models_by_brand(&self, brand_id: i64) -> Result<Vec<Model>, ApiError>;
    async fn create_model(
        &self,
        brand_id: i64,
        model: CreateModelRequest,
    ) -> Result<Model, ApiError>;
    async fn update_model(
        &self,
        model_id: i64,
        model: UpdateModelRequest,
    ) -> Result<Model, ApiError>;
    async fn get_models(&self, filter: ModelsFilter) -> Result<Vec<Model>, ApiError>;
    async fn generate_brand_recommendation(
        &self,
        brand_id: i64,
    ) -> Result<RecommendationResponse, ApiError>;
    async fn generate_model_recommendation(
        &self,
        brand_id: i64,
        model_id: i64,
    ) -> Result<RecommendationResponse, ApiError>;
    async fn get_brand_recommendations(
        &self,
        brand_id: i64,
    ) -> Result<RecommendationResponse, ApiError>;
    async fn get_model_recommendation(
        &self,
        brand_id: i64,
        model_id: i64,
    ) -> Result<RecommendationResponse, ApiError>;
}

/// HTTP client wrapper for the cars catalog service.
#[derive(Clone)]
pub struct HttpCatalogClient {
    base_url: String,
    client: Client,
}

impl HttpCatalogClient {
    /// No explicit timeout is set; the transport defaults apply.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn get_brands(&self) -> Result<Vec<Brand>, ApiError> {
        let response = self.client.get(self.url("/brands")).send().await?;
        decode_response(response).await
    }

    async fn create_brand(&self, brand: CreateBrandRequest) -> Result<Brand, ApiError> {
        let response = self
            .client
            .post(self.url("/brands"))
            .json(&brand)
            .send()
            .await?;
        decode_response(response).await
    }

    async fn get_models_by_brand(&self, brand_id: i64) -> Result<Vec<Model>, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/brands/{brand_id}/models")))
            .send()
            .await?;
        decode_response(response).await
    }

    async fn create_model(
        &self,
        brand_id: i64,
        model: CreateModelRequest,
    ) -> Result<Model, ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/brands/{brand_id}/models")))
            .json(&model)
            .send()
            .await?;
        decode_response(response).await
    }

    async fn update_model(
        &self,
        model_id: i64,
        model: UpdateModelRequest,
    ) -> Result<Model, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/models/{model_id}")))
            .json(&model)
            .send()
            .await?;
        decode_response(response).await
    }

    async fn get_models(&self, filter: ModelsFilter) -> Result<Vec<Model>, ApiError> {
        let response = self
            .client
            .get(self.url("/models"))
            .query(&filter_params(&filter))
            .send()
            .await?;
        decode_response(response).await
    }

    async fn generate_brand_recommendation(
        &self,
        brand_id: i64,
    ) -> Result<RecommendationResponse, ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/api/brands/{brand_id}/recommendation")))
            .send()
            .await?;
        decode_response(response).await
    }

    async fn generate_model_recommendation(
        &self,
        brand_id: i64,
        model_id: i64,
    ) -> Result<RecommendationResponse, ApiError> {
        let response = self
            .client
            .post(self.url(&format!(
                "/api/brands/{brand_id}/models/{model_id}/recommendation"
            )))
            .send()
            .await?;
        decode_response(response).await
    }

    async fn get_brand_recommendations(
        &self,
        brand_id: i64,
    ) -> Result<RecommendationResponse, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/api/brands/{brand_id}/recommendations")))
            .send()
            .await?;
        decode_response(response).await
    }

    async fn get_model_recommendation(
        &self,
        brand_id: i64,
        model_id: i64,
    ) -> Result<RecommendationResponse, ApiError> {
        let response = self
            .client
            .get(self.url(&format!(
                "/api/brands/{brand_id}/models/{model_id}/recommendation"
            )))
            .send()
            .await?;
        decode_response(response).await
    }
}

/// Decode chokepoint: non-2xx becomes a status error, otherwise the JSON
/// body is parsed into the caller's expected shape.
async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    Ok(response.json::<T>().await?)
}

/// Bounds are serialized only when present; `Some(0)` still produces a
/// parameter, absence does not.
fn filter_params(filter: &ModelsFilter) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(greater) = filter.greater {
        params.push(("greater", format_bound(greater)));
    }
    if let Some(lower) = filter.lower {
        params.push(("lower", format_bound(lower)));
    }
    params
}

fn format_bound(bound: f64) -> String {
    if bound.fract() == 0.0 {
        format!("{}", bound as i64)
    } else {
        bound.to_string()
    }
}
