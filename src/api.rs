// Copyright 2025 Motordex Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HTTP API handlers.
//!
//! - `GET /healthz` - Service health check
//! - `GET /api/check-content` - Report whether recommendation content
//!   exists for a brand/model pair

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::content::{ContentService, DEFAULT_YEAR};
use crate::error::AppError;
use crate::model::{CheckContentQuery, CheckContentResponse};

#[derive(Clone)]
pub struct AppState {
    pub content: ContentService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/api/check-content", get(handle_check_content))
        .with_state(state)
}

/// Health check endpoint
pub async fn health() -> Result<Json<serde_json::Value>, AppError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "service": "motordex",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Check whether recommendation content exists for a brand/model pair.
pub async fn handle_check_content(
    State(state): State<AppState>,
    Query(query): Query<CheckContentQuery>,
) -> Result<Json<CheckContentResponse>, AppError> {
    let brand = query.brand.unwrap_or_default();
    let model = query.model.unwrap_or_default();

    if brand.trim().is_empty() || model.trim().is_empty() {
        return Err(AppError::bad_request("Brand and model are required"));
    }

    let year = query.year.unwrap_or(DEFAULT_YEAR);

    let result = state
        .content
        .check_content_exists(&brand, &model, year)
        .await
        .map_err(|err| {
            tracing::error!(%err, brand, model, "content check failed");
            AppError::from(err)
        })?;

    Ok(Json(CheckContentResponse {
        exists: result.exists,
        content: result.content,
        brand,
        model,
        year,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use tower::ServiceExt;

    use super::*;
    use crate::client::MockCatalogApi;
    use crate::error::ApiError;
    use crate::model::{Brand, Model, Recommendation, RecommendationResponse};

    fn app(mock: MockCatalogApi) -> Router {
        router(AppState {
            content: ContentService::new(Arc::new(mock)),
        })
    }

    fn resolving_mock() -> MockCatalogApi {
        let mut mock = MockCatalogApi::new();
        mock.expect_get_brands().returning(|| {
            Ok(vec![Brand {
                id: 1,
                name: "Toyota".to_string(),
            }])
        });
        mock.expect_get_models_by_brand().returning(|_| {
            Ok(vec![Model {
                id: 10,
                name: "Corolla".to_string(),
                average_price: None,
                brand_id: 1,
            }])
        });
        mock
    }

    // A real reqwest error with no I/O: the empty-host URL fails at request
    // build time.
    async fn transport_error() -> ApiError {
        let err = reqwest::Client::new()
            .get("http://")
            .send()
            .await
            .unwrap_err();
        ApiError::Transport(err)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_brand_param_is_a_400() {
        let (status, body) = get_json(
            app(MockCatalogApi::new()),
            "/api/check-content?model=Corolla",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Brand and model are required");
    }

    #[tokio::test]
    async fn missing_both_params_is_a_400() {
        let (status, body) = get_json(app(MockCatalogApi::new()), "/api/check-content").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Brand and model are required");
    }

    #[tokio::test]
    async fn existing_content_yields_200_with_echoed_fields() {
        let mut mock = resolving_mock();
        mock.expect_get_model_recommendation().returning(|_, _| {
            Ok(RecommendationResponse {
                success: true,
                data: Some(Recommendation {
                    id: Some("rec-1".to_string()),
                    brand_id: Some(1),
                    model_id: Some(10),
                    content: Some("A reliable sedan.".to_string()),
                    recommendation: None,
                    created_at: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
                }),
            })
        });

        let (status, body) = get_json(
            app(mock),
            "/api/check-content?brand=Toyota&model=Corolla",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["exists"], true);
        assert_eq!(body["brand"], "Toyota");
        assert_eq!(body["model"], "Corolla");
        assert_eq!(body["year"], 2025);
        assert_eq!(body["content"]["brand"], "Toyota");
        assert_eq!(body["content"]["model"], "Corolla");
        assert_eq!(body["content"]["year"], 2025);
        assert_eq!(body["content"]["content"], "A reliable sedan.");
    }

    #[tokio::test]
    async fn missing_content_yields_200_with_exists_false() {
        let mut mock = resolving_mock();
        mock.expect_get_model_recommendation()
            .returning(|_, _| Err(ApiError::Status(404)));

        let (status, body) = get_json(
            app(mock),
            "/api/check-content?brand=toyota&model=corolla&year=2023",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["exists"], false);
        assert!(body["content"].is_null());
        assert_eq!(body["year"], 2023);
    }

    #[tokio::test]
    async fn transport_failure_yields_500_with_the_error_message() {
        let err = transport_error().await;
        let mut mock = resolving_mock();
        mock.expect_get_model_recommendation()
            .return_once(move |_, _| Err(err));

        let (status, body) = get_json(
            app(mock),
            "/api/check-content?brand=Toyota&model=Corolla",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("catalog request failed"));
    }

    #[tokio::test]
    async fn health_reports_the_service_name() {
        let (status, body) = get_json(app(MockCatalogApi::new()), "/healthz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "motordex");
    }
}
