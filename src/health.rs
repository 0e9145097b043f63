use crate::config::ServerConfig;
use crate::content::generate_complete_blog_post;
use crate::model::{AudienceLevel, BlogPostFields, DesiredLength};
use crate::outline::build_outline;
use crate::state::AppState;
use crate::tools::TOOL_NAMES;
use crate::validator::validate_blog_post;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

/// Health status for a component or the overall system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with degraded performance or partial failures
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

impl HealthStatus {
    /// Returns the HTTP status code for this health status
    pub fn status_code(&self) -> StatusCode {
        match self {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Degraded => StatusCode::OK, // Still serve traffic but indicate degradation
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Combines two health statuses, returning the worse of the two
    pub fn combine(self, other: Self) -> Self {
        match (self, other) {
            (HealthStatus::Unhealthy, _) | (_, HealthStatus::Unhealthy) => HealthStatus::Unhealthy,
            (HealthStatus::Degraded, _) | (_, HealthStatus::Degraded) => HealthStatus::Degraded,
            _ => HealthStatus::Healthy,
        }
    }
}

/// Health check result for a component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component name
    pub component: String,
    /// Health status
    pub status: HealthStatus,
    /// Optional error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Timestamp of the check
    pub timestamp: i64,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ComponentHealth {
    /// Creates a healthy component health check
    pub fn healthy(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            status: HealthStatus::Healthy,
            error: None,
            timestamp: Self::now(),
            details: None,
        }
    }

    /// Creates a healthy component health check with details
    pub fn healthy_with_details(component: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            component: component.into(),
            status: HealthStatus::Healthy,
            error: None,
            timestamp: Self::now(),
            details: Some(details),
        }
    }

    /// Creates a degraded component health check
    pub fn degraded(component: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            status: HealthStatus::Degraded,
            error: Some(error.into()),
            timestamp: Self::now(),
            details: None,
        }
    }

    /// Creates an unhealthy component health check
    pub fn unhealthy(component: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            status: HealthStatus::Unhealthy,
            error: Some(error.into()),
            timestamp: Self::now(),
            details: None,
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

/// Overall health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Timestamp of the check
    pub timestamp: i64,
    /// Server version
    pub version: String,
}

impl IntoResponse for HealthResponse {
    fn into_response(self) -> Response {
        let status = self.status.status_code();
        (status, Json(self)).into_response()
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Readiness status
    pub ready: bool,
    /// Overall health status
    pub status: HealthStatus,
    /// Timestamp of the check
    pub timestamp: i64,
    /// Components that are not ready
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub not_ready: Vec<String>,
}

impl IntoResponse for ReadinessResponse {
    fn into_response(self) -> Response {
        let status = if self.ready {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        (status, Json(self)).into_response()
    }
}

/// Detailed component health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Timestamp of the check
    pub timestamp: i64,
    /// Individual component health checks
    pub components: HashMap<String, ComponentHealth>,
}

impl IntoResponse for ComponentHealthResponse {
    fn into_response(self) -> Response {
        let status = self.status.status_code();
        (status, Json(self)).into_response()
    }
}

/// Main health checker coordinator
#[derive(Clone)]
pub struct HealthChecker {
    config: Arc<ServerConfig>,
    state: Arc<AppState>,
}

impl HealthChecker {
    /// Creates a new health checker
    pub fn new(config: Arc<ServerConfig>, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Performs a liveness check - returns healthy if server is running
    pub fn liveness(&self) -> HealthResponse {
        HealthResponse {
            status: HealthStatus::Healthy,
            timestamp: Self::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Performs a readiness check - returns ready if server can accept requests
    pub async fn readiness(&self) -> ReadinessResponse {
        let components = self.check_all_components().await;
        let mut overall = HealthStatus::Healthy;
        let mut not_ready = Vec::new();

        for (name, health) in &components {
            overall = overall.combine(health.status);
            if health.status == HealthStatus::Unhealthy {
                not_ready.push(name.clone());
            }
        }

        ReadinessResponse {
            ready: overall != HealthStatus::Unhealthy,
            status: overall,
            timestamp: Self::now(),
            not_ready,
        }
    }

    /// Performs detailed component health checks
    pub async fn components(&self) -> ComponentHealthResponse {
        let components = self.check_all_components().await;
        let mut overall = HealthStatus::Healthy;

        for health in components.values() {
            overall = overall.combine(health.status);
        }

        ComponentHealthResponse {
            status: overall,
            timestamp: Self::now(),
            components,
        }
    }

    /// Checks all components and returns their health status
    async fn check_all_components(&self) -> HashMap<String, ComponentHealth> {
        let mut components = HashMap::new();

        components.insert("config".to_string(), self.check_config());
        components.insert("generator".to_string(), self.check_generator());
        components.insert("validator".to_string(), self.check_validator());
        components.insert("activity".to_string(), self.check_activity());

        components
    }

    /// Checks the tool configuration for obvious misconfiguration
    fn check_config(&self) -> ComponentHealth {
        if let Some(enabled) = &self.config.enabled_tools {
            let known = TOOL_NAMES
                .iter()
                .filter(|tool| enabled.contains(**tool))
                .count();
            if known == 0 {
                return ComponentHealth::degraded(
                    "config",
                    "enabled_tools does not match any known tool name",
                );
            }
            let details = serde_json::json!({
                "transport": self.config.transport.to_string(),
                "enabled_tools": known,
            });
            return ComponentHealth::healthy_with_details("config", details);
        }

        let details = serde_json::json!({
            "transport": self.config.transport.to_string(),
            "enabled_tools": "all",
        });
        ComponentHealth::healthy_with_details("config", details)
    }

    /// Smoke-tests the generation pipeline end to end
    fn check_generator(&self) -> ComponentHealth {
        let outline = match build_outline(
            "health check",
            AudienceLevel::Intermediate,
            Vec::new(),
            DesiredLength::Medium,
        ) {
            Ok(outline) => outline,
            Err(e) => {
                return ComponentHealth::unhealthy(
                    "generator",
                    format!("outline generation failed: {}", e),
                );
            }
        };

        let mut rng = StdRng::seed_from_u64(0);
        match generate_complete_blog_post(&outline, None, &mut rng) {
            Ok(post) => {
                let details = serde_json::json!({
                    "sections": post.sections.len(),
                    "word_count": post.word_count,
                });
                ComponentHealth::healthy_with_details("generator", details)
            }
            Err(e) => ComponentHealth::unhealthy(
                "generator",
                format!("post generation failed: {}", e),
            ),
        }
    }

    /// Runs the validator against a known-good fixture
    fn check_validator(&self) -> ComponentHealth {
        let fields = BlogPostFields {
            title: Some("Health Check: Validator Fixture For Component Probes".to_string()),
            introduction: Some("word ".repeat(150).trim_end().to_string()),
            conclusion: Some("word ".repeat(100).trim_end().to_string()),
            content: Some(
                "## First\n\nSee [one](https://example.com/one).\n\n\
                 ## Second\n\nSee [two](https://example.com/two).\n\n\
                 ## Third\n\nSee [three](https://example.com/three).\n"
                    .to_string(),
            ),
        };

        let report = validate_blog_post(&fields);
        if report.overall_valid {
            let details = serde_json::json!({
                "errors": report.summary.total_errors,
                "warnings": report.summary.total_warnings,
            });
            ComponentHealth::healthy_with_details("validator", details)
        } else {
            ComponentHealth::unhealthy(
                "validator",
                format!(
                    "validator rejected known-good fixture ({} errors)",
                    report.summary.total_errors
                ),
            )
        }
    }

    /// Reports request activity counters
    fn check_activity(&self) -> ComponentHealth {
        let stats = self.state.generation_stats();
        let details = serde_json::json!({
            "outlines_generated": stats.outlines_generated,
            "posts_generated": stats.posts_generated,
            "validations_run": stats.validations_run,
        });
        ComponentHealth::healthy_with_details("activity", details)
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

/// Axum handler for liveness endpoint
pub async fn liveness_handler(State(checker): State<Arc<HealthChecker>>) -> impl IntoResponse {
    checker.liveness()
}

/// Axum handler for readiness endpoint
pub async fn readiness_handler(State(checker): State<Arc<HealthChecker>>) -> impl IntoResponse {
    checker.readiness().await
}

/// Axum handler for components endpoint
pub async fn components_handler(State(checker): State<Arc<HealthChecker>>) -> impl IntoResponse {
    checker.components().await
}
