/// Prometheus metrics for production observability
///
/// This module provides comprehensive metrics collection for monitoring
/// the MCP server in production environments.
use crate::error::BlogError;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use prometheus_client::encoding::{EncodeLabelSet, text::encode};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::metrics::histogram::{Histogram, exponential_buckets};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use std::time::Instant;

/// Global metrics registry instance
pub static METRICS: Lazy<Arc<MetricsCollector>> = Lazy::new(|| Arc::new(MetricsCollector::new()));

/// Labels for MCP request metrics
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct RequestLabels {
    /// Tool name (e.g., "generate_blog_outline", "validate_blog_post")
    pub tool: String,
    /// Request status ("success", "error")
    pub status: String,
}

/// Labels for error metrics
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct ErrorLabels {
    /// Tool name
    pub tool: String,
    /// Error type classification
    pub error_type: String,
}

/// Labels for tool-specific metrics
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct ToolLabels {
    /// Tool name
    pub tool: String,
}

/// Central metrics collector with Prometheus registry
pub struct MetricsCollector {
    /// The Prometheus registry
    registry: RwLock<Registry>,

    // Request metrics
    /// Total requests by tool and status (exposed as blog_requests_total)
    pub blog_requests: Family<RequestLabels, Counter>,

    /// Request duration in seconds by tool
    pub blog_request_duration_seconds: Family<ToolLabels, Histogram>,

    /// Currently active requests by tool
    pub blog_active_requests: Family<ToolLabels, Gauge>,

    // Generation metrics
    /// Total outlines generated
    pub blog_outlines_generated: Counter,

    /// Total complete posts generated
    pub blog_posts_generated: Counter,

    /// Total validation runs
    pub blog_validations: Counter,

    /// Validation runs that produced at least one error
    pub blog_validation_failures: Counter,

    // Error metrics
    /// Total errors by tool and error type
    pub blog_errors: Family<ErrorLabels, Counter>,
}

impl MetricsCollector {
    /// Create a new metrics collector with all metrics registered
    pub fn new() -> Self {
        let mut registry = Registry::default();

        // Request metrics
        let blog_requests = Family::<RequestLabels, Counter>::default();
        registry.register(
            "blog_requests",
            "Total number of tool requests",
            blog_requests.clone(),
        );

        let blog_request_duration_seconds =
            Family::<ToolLabels, Histogram>::new_with_constructor(|| {
                // Buckets: 10ms, 25ms, 62.5ms, ... up to ~38s
                Histogram::new(exponential_buckets(0.01, 2.5, 10))
            });
        registry.register(
            "blog_request_duration_seconds",
            "Request latency histogram in seconds",
            blog_request_duration_seconds.clone(),
        );

        let blog_active_requests = Family::<ToolLabels, Gauge>::default();
        registry.register(
            "blog_active_requests",
            "Number of requests currently being processed",
            blog_active_requests.clone(),
        );

        // Generation metrics
        let blog_outlines_generated = Counter::default();
        registry.register(
            "blog_outlines_generated",
            "Total number of outlines generated",
            blog_outlines_generated.clone(),
        );

        let blog_posts_generated = Counter::default();
        registry.register(
            "blog_posts_generated",
            "Total number of complete posts generated",
            blog_posts_generated.clone(),
        );

        let blog_validations = Counter::default();
        registry.register(
            "blog_validations",
            "Total number of validation runs",
            blog_validations.clone(),
        );

        let blog_validation_failures = Counter::default();
        registry.register(
            "blog_validation_failures",
            "Validation runs that reported at least one error",
            blog_validation_failures.clone(),
        );

        // Error metrics
        let blog_errors = Family::<ErrorLabels, Counter>::default();
        registry.register(
            "blog_errors",
            "Total number of errors by tool and error type",
            blog_errors.clone(),
        );

        Self {
            registry: RwLock::new(registry),
            blog_requests,
            blog_request_duration_seconds,
            blog_active_requests,
            blog_outlines_generated,
            blog_posts_generated,
            blog_validations,
            blog_validation_failures,
            blog_errors,
        }
    }

    /// Encode metrics in Prometheus text format
    pub fn encode(&self) -> String {
        let mut buffer = String::new();
        let registry = self.registry.read();
        encode(&mut buffer, &registry).expect("encoding metrics should succeed");
        buffer
    }

    /// Record a successful request
    pub fn record_request_success(&self, tool: &str, duration: std::time::Duration) {
        self.blog_requests
            .get_or_create(&RequestLabels {
                tool: tool.to_string(),
                status: "success".to_string(),
            })
            .inc();

        self.blog_request_duration_seconds
            .get_or_create(&ToolLabels {
                tool: tool.to_string(),
            })
            .observe(duration.as_secs_f64());
    }

    /// Record a failed request
    pub fn record_request_error(
        &self,
        tool: &str,
        duration: std::time::Duration,
        error_type: &str,
    ) {
        self.blog_requests
            .get_or_create(&RequestLabels {
                tool: tool.to_string(),
                status: "error".to_string(),
            })
            .inc();

        self.blog_request_duration_seconds
            .get_or_create(&ToolLabels {
                tool: tool.to_string(),
            })
            .observe(duration.as_secs_f64());

        self.blog_errors
            .get_or_create(&ErrorLabels {
                tool: tool.to_string(),
                error_type: error_type.to_string(),
            })
            .inc();
    }

    /// Record a generated outline
    pub fn record_outline_generated(&self) {
        self.blog_outlines_generated.inc();
    }

    /// Record a generated complete post
    pub fn record_post_generated(&self) {
        self.blog_posts_generated.inc();
    }

    /// Record a validation run and whether it passed
    pub fn record_validation(&self, valid: bool) {
        self.blog_validations.inc();
        if !valid {
            self.blog_validation_failures.inc();
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard for automatic request timing and metric recording
///
/// This guard automatically records request metrics when dropped,
/// including duration and success/failure status.
///
/// # Example
///
/// ```no_run
/// use blogsmith_mcp::metrics::RequestMetrics;
///
/// async fn handle_request(tool: &str) -> anyhow::Result<()> {
///     let _metrics = RequestMetrics::new(tool);
///     // Your request handling logic here
///     Ok(())
/// }
/// ```
pub struct RequestMetrics {
    tool: String,
    start: Instant,
    completed: bool,
}

impl RequestMetrics {
    /// Create a new request metrics guard
    ///
    /// Increments the active requests counter and starts timing.
    pub fn new(tool: &str) -> Self {
        METRICS
            .blog_active_requests
            .get_or_create(&ToolLabels {
                tool: tool.to_string(),
            })
            .inc();

        Self {
            tool: tool.to_string(),
            start: Instant::now(),
            completed: false,
        }
    }

    /// Mark the request as successful
    ///
    /// Records success metrics immediately. Call this before dropping the guard
    /// to ensure success is recorded even if the guard is dropped during cleanup.
    pub fn success(mut self) {
        let duration = self.start.elapsed();
        METRICS.record_request_success(&self.tool, duration);
        self.completed = true;

        METRICS
            .blog_active_requests
            .get_or_create(&ToolLabels {
                tool: self.tool.clone(),
            })
            .dec();
    }

    /// Mark the request as failed
    ///
    /// Records error metrics immediately with the provided error type.
    pub fn error(mut self, error_type: &str) {
        let duration = self.start.elapsed();
        METRICS.record_request_error(&self.tool, duration, error_type);
        self.completed = true;

        METRICS
            .blog_active_requests
            .get_or_create(&ToolLabels {
                tool: self.tool.clone(),
            })
            .dec();
    }
}

impl Drop for RequestMetrics {
    fn drop(&mut self) {
        if !self.completed {
            // If not explicitly marked as success/error, treat as error
            let duration = self.start.elapsed();
            METRICS.record_request_error(&self.tool, duration, "unknown");

            METRICS
                .blog_active_requests
                .get_or_create(&ToolLabels {
                    tool: self.tool.clone(),
                })
                .dec();
        }
    }
}

/// Helper macro for instrumenting tool handlers
///
/// Automatically wraps a function with metrics collection.
///
/// # Example
///
/// ```no_run
/// use blogsmith_mcp::with_metrics;
///
/// async fn my_tool_handler() -> anyhow::Result<String> {
///     with_metrics!("my_tool", {
///         // Your tool logic here
///         Ok("result".to_string())
///     })
/// }
/// ```
#[macro_export]
macro_rules! with_metrics {
    ($tool:expr, $body:expr) => {{
        let _metrics = $crate::metrics::RequestMetrics::new($tool);
        let result = $body;
        match &result {
            Ok(_) => _metrics.success(),
            Err(error) => _metrics.error($crate::metrics::classify_error(error)),
        }
        result
    }};
}

/// Classify error type for metrics
///
/// Domain errors carry their own label; anything else is unexpected.
pub fn classify_error(error: &anyhow::Error) -> &'static str {
    match error.downcast_ref::<BlogError>() {
        Some(blog_error) => blog_error.metric_label(),
        None => "unexpected",
    }
}
