use crate::content::generate_complete_blog_post;
use crate::logging::mcp_tool_span;
use crate::metrics::METRICS;
use crate::model::{
    AudienceLevel, BlogPost, BlogPostFields, DesiredLength, Outline, ValidationReport,
};
use crate::outline::build_outline;
use crate::rules::rules_document;
use crate::state::AppState;
use crate::validator::validate_blog_post;
use crate::with_metrics;
use anyhow::Result;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

pub const TOOL_GENERATE_BLOG_OUTLINE: &str = "generate_blog_outline";
pub const TOOL_GENERATE_COMPLETE_BLOG: &str = "generate_complete_blog";
pub const TOOL_VALIDATE_BLOG_POST: &str = "validate_blog_post";
pub const TOOL_GET_BUSINESS_RULES: &str = "get_business_rules";

/// Every tool the server exposes, in schema order.
pub const TOOL_NAMES: [&str; 4] = [
    TOOL_GENERATE_BLOG_OUTLINE,
    TOOL_GENERATE_COMPLETE_BLOG,
    TOOL_VALIDATE_BLOG_POST,
    TOOL_GET_BUSINESS_RULES,
];

/// Keywords arrive either as a JSON array or a comma separated string.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum KeywordsInput {
    List(Vec<String>),
    Csv(String),
}

impl Default for KeywordsInput {
    fn default() -> Self {
        KeywordsInput::List(Vec::new())
    }
}

impl KeywordsInput {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            KeywordsInput::List(items) => items,
            KeywordsInput::Csv(raw) => raw
                .split(',')
                .map(|keyword| keyword.trim().to_string())
                .filter(|keyword| !keyword.is_empty())
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GenerateBlogOutlineParams {
    /// Subject the outline is planned around
    pub topic: String,
    #[serde(default)]
    pub target_audience: AudienceLevel,
    #[serde(default)]
    pub keywords: KeywordsInput,
    #[serde(default)]
    pub desired_length: DesiredLength,
}

pub async fn generate_blog_outline(
    state: Arc<AppState>,
    params: GenerateBlogOutlineParams,
) -> Result<Outline> {
    let _span = mcp_tool_span(TOOL_GENERATE_BLOG_OUTLINE).entered();
    with_metrics!(
        TOOL_GENERATE_BLOG_OUTLINE,
        run_generate_blog_outline(&state, params)
    )
}

fn run_generate_blog_outline(
    state: &AppState,
    params: GenerateBlogOutlineParams,
) -> Result<Outline> {
    let outline = build_outline(
        &params.topic,
        params.target_audience,
        params.keywords.into_vec(),
        params.desired_length,
    )?;

    state.record_outline();
    METRICS.record_outline_generated();
    tracing::info!(
        topic = %outline.topic,
        sections = outline.sections.len(),
        estimated_words = outline.estimated_total_words,
        "blog outline generated"
    );

    Ok(outline)
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GenerateCompleteBlogParams {
    /// Subject the post is written about
    pub topic: String,
    #[serde(default)]
    pub target_audience: AudienceLevel,
    #[serde(default)]
    pub keywords: KeywordsInput,
    #[serde(default)]
    pub desired_length: DesiredLength,
    /// Reserved for callers that pass extra drafting constraints. Must be a
    /// JSON object when present.
    #[serde(default)]
    pub custom_requirements: Option<serde_json::Value>,
}

pub async fn generate_complete_blog(
    state: Arc<AppState>,
    params: GenerateCompleteBlogParams,
) -> Result<BlogPost> {
    let _span = mcp_tool_span(TOOL_GENERATE_COMPLETE_BLOG).entered();
    with_metrics!(
        TOOL_GENERATE_COMPLETE_BLOG,
        run_generate_complete_blog(&state, params)
    )
}

fn run_generate_complete_blog(
    state: &AppState,
    params: GenerateCompleteBlogParams,
) -> Result<BlogPost> {
    let outline = build_outline(
        &params.topic,
        params.target_audience,
        params.keywords.into_vec(),
        params.desired_length,
    )?;

    let mut rng = state.make_rng();
    let mut post =
        generate_complete_blog_post(&outline, params.custom_requirements.as_ref(), &mut rng)?;

    // Self-validation rides along so callers see structural gaps immediately.
    let report = validate_blog_post(&BlogPostFields::from(&post));
    post.validation = Some(report);

    state.record_post();
    METRICS.record_post_generated();
    tracing::info!(
        topic = %post.metadata.topic,
        word_count = post.word_count,
        reading_minutes = post.estimated_reading_time,
        "complete blog post generated"
    );

    Ok(post)
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ValidateBlogPostParams {
    /// Post fields to check. Absent fields are skipped.
    pub blog_post: BlogPostFields,
}

pub async fn validate_blog_post_tool(
    state: Arc<AppState>,
    params: ValidateBlogPostParams,
) -> Result<ValidationReport> {
    let _span = mcp_tool_span(TOOL_VALIDATE_BLOG_POST).entered();
    with_metrics!(
        TOOL_VALIDATE_BLOG_POST,
        run_validate_blog_post(&state, params)
    )
}

fn run_validate_blog_post(
    state: &AppState,
    params: ValidateBlogPostParams,
) -> Result<ValidationReport> {
    let report = validate_blog_post(&params.blog_post);

    state.record_validation();
    METRICS.record_validation(report.overall_valid);
    tracing::info!(
        valid = report.overall_valid,
        errors = report.summary.total_errors,
        warnings = report.summary.total_warnings,
        "blog post validated"
    );

    Ok(report)
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetBusinessRulesParams {
    /// Rules section to return: "all", "structure", "quality", "seo", or
    /// "validation". Defaults to the full document.
    #[serde(default)]
    pub section: Option<String>,
}

pub async fn get_business_rules(
    _state: Arc<AppState>,
    params: GetBusinessRulesParams,
) -> Result<serde_json::Value> {
    let _span = mcp_tool_span(TOOL_GET_BUSINESS_RULES).entered();
    with_metrics!(
        TOOL_GET_BUSINESS_RULES,
        Ok(rules_document(params.section.as_deref()))
    )
}
