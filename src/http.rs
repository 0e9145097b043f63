//! REST adapter for the blog tools.
//!
//! Mirrors the tool operations as plain JSON routes under `/api/blog` so
//! non-MCP clients can drive the generator. The handlers delegate to the
//! same functions the MCP router calls, so request metrics and invocation
//! counters are recorded on this path too.

use crate::error::BlogError;
use crate::model::{BlogPost, Outline, ValidationReport};
use crate::state::AppState;
use crate::tools;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate-outline", post(generate_outline_handler))
        .route("/generate-complete", post(generate_complete_handler))
        .route("/validate", post(validate_handler))
        .route("/business-rules", get(business_rules_handler))
        .with_state(state)
}

/// JSON error body in the `{"error": message}` shape every route uses.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast_ref::<BlogError>() {
            Some(BlogError::InvalidArgument(_)) => Self::bad_request(error.to_string()),
            _ => Self::internal(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

async fn generate_outline_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Outline>, ApiError> {
    if body.get("topic").is_none() {
        return Err(ApiError::bad_request("Topic is required"));
    }
    let params: tools::GenerateBlogOutlineParams =
        serde_json::from_value(body).map_err(|error| ApiError::bad_request(error.to_string()))?;

    let outline = tools::generate_blog_outline(state, params).await?;
    Ok(Json(outline))
}

async fn generate_complete_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<BlogPost>, ApiError> {
    if body.get("topic").is_none() {
        return Err(ApiError::bad_request("Topic is required"));
    }
    let params: tools::GenerateCompleteBlogParams =
        serde_json::from_value(body).map_err(|error| ApiError::bad_request(error.to_string()))?;

    let post = tools::generate_complete_blog(state, params).await?;
    Ok(Json(post))
}

async fn validate_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<ValidationReport>, ApiError> {
    if body.get("blog_post").is_none() {
        return Err(ApiError::bad_request("Blog post data is required"));
    }
    let params: tools::ValidateBlogPostParams =
        serde_json::from_value(body).map_err(|error| ApiError::bad_request(error.to_string()))?;

    let report = tools::validate_blog_post_tool(state, params).await?;
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
struct BusinessRulesQuery {
    section: Option<String>,
}

async fn business_rules_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BusinessRulesQuery>,
) -> Result<Json<Value>, ApiError> {
    let params = tools::GetBusinessRulesParams {
        section: query.section,
    };
    let rules = tools::get_business_rules(state, params).await?;
    Ok(Json(rules))
}
