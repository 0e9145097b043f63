use crate::config::ServerConfig;
use crate::error::BlogError;
use crate::model::{BlogPost, Outline, ValidationReport};
use crate::state::AppState;
use crate::tools;
use anyhow::Result;
use rmcp::{
    ErrorData as McpError, Json, ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    transport::stdio,
};
use std::sync::Arc;
use thiserror::Error;

const INSTRUCTIONS: &str = "\
Blog content MCP: drafts and validates structured technical blog posts.

WORKFLOW:
1) generate_blog_outline for a section plan (topic, audience, keywords, length)
2) generate_complete_blog to draft the full post from the same inputs
3) validate_blog_post to check any draft against the publication rules
4) get_business_rules for the rule catalog behind the validator

TOOL SELECTION:
- generate_blog_outline: Cheap planning call. Returns ordered sections with \
target word counts plus title suggestions; no body text is drafted.
- generate_complete_blog: Full markdown draft with metadata and a \
self-validation report attached. desired_length short|medium|long controls \
the section count (4/6/8).
- validate_blog_post: Checks only the fields present (title, introduction, \
conclusion, content). Absent fields are skipped, so partial drafts validate.
- get_business_rules: Pass section=structure|quality|seo|validation to scope \
the response to one rule group.

VALIDATION THRESHOLDS:
- Titles must be 40-80 characters; a '?' or ':' is recommended.
- Introductions need 150-300 words, conclusions 100-200.
- Bodies need at least 3 '## ' sections and balanced ``` fences; fewer than \
3 external links is a warning, not an error.

KEYWORDS: Accepts a JSON array of strings or one comma-separated string.";

#[derive(Clone)]
pub struct BlogServer {
    state: Arc<AppState>,
    tool_router: ToolRouter<BlogServer>,
}

impl BlogServer {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self::from_state(Arc::new(AppState::new(config)))
    }

    pub fn from_state(state: Arc<AppState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    pub async fn run_stdio(self) -> Result<()> {
        let service = self
            .serve(stdio())
            .await
            .inspect_err(|error| tracing::error!("serving error: {:?}", error))?;
        service.waiting().await?;
        Ok(())
    }

    fn ensure_tool_enabled(&self, tool: &str) -> Result<()> {
        tracing::info!(tool = tool, "tool invocation requested");
        if self.state.config().is_tool_enabled(tool) {
            Ok(())
        } else {
            Err(ToolDisabledError::new(tool).into())
        }
    }
}

#[tool_router]
impl BlogServer {
    #[tool(
        name = "generate_blog_outline",
        description = "Generate a structured outline for a technical blog post. \
        Returns ordered sections with descriptions and target word counts, \
        plus title suggestions and an estimated total length."
    )]
    pub async fn generate_blog_outline(
        &self,
        Parameters(params): Parameters<tools::GenerateBlogOutlineParams>,
    ) -> Result<Json<Outline>, McpError> {
        self.ensure_tool_enabled(tools::TOOL_GENERATE_BLOG_OUTLINE)
            .map_err(to_mcp_error)?;
        tools::generate_blog_outline(self.state.clone(), params)
            .await
            .map(Json)
            .map_err(to_mcp_error)
    }

    #[tool(
        name = "generate_complete_blog",
        description = "Generate a complete technical blog post: outline, drafted \
        markdown content, metadata, and a self-validation report. \
        desired_length short|medium|long controls the section count."
    )]
    pub async fn generate_complete_blog(
        &self,
        Parameters(params): Parameters<tools::GenerateCompleteBlogParams>,
    ) -> Result<Json<BlogPost>, McpError> {
        self.ensure_tool_enabled(tools::TOOL_GENERATE_COMPLETE_BLOG)
            .map_err(to_mcp_error)?;
        tools::generate_complete_blog(self.state.clone(), params)
            .await
            .map(Json)
            .map_err(to_mcp_error)
    }

    #[tool(
        name = "validate_blog_post",
        description = "Validate blog post fields against the publication rules. \
        Only the fields present are checked, so partial drafts can be \
        validated incrementally."
    )]
    pub async fn validate_blog_post(
        &self,
        Parameters(params): Parameters<tools::ValidateBlogPostParams>,
    ) -> Result<Json<ValidationReport>, McpError> {
        self.ensure_tool_enabled(tools::TOOL_VALIDATE_BLOG_POST)
            .map_err(to_mcp_error)?;
        tools::validate_blog_post_tool(self.state.clone(), params)
            .await
            .map(Json)
            .map_err(to_mcp_error)
    }

    #[tool(
        name = "get_business_rules",
        description = "Return the blog publication rule catalog. Optional \
        section parameter (structure, quality, seo, validation) scopes the \
        response to one rule group."
    )]
    pub async fn get_business_rules(
        &self,
        Parameters(params): Parameters<tools::GetBusinessRulesParams>,
    ) -> Result<Json<serde_json::Value>, McpError> {
        self.ensure_tool_enabled(tools::TOOL_GET_BUSINESS_RULES)
            .map_err(to_mcp_error)?;
        tools::get_business_rules(self.state.clone(), params)
            .await
            .map(Json)
            .map_err(to_mcp_error)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BlogServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..ServerInfo::default()
        }
    }
}

fn to_mcp_error(error: anyhow::Error) -> McpError {
    if error.downcast_ref::<ToolDisabledError>().is_some() {
        McpError::invalid_request(error.to_string(), None)
    } else if matches!(
        error.downcast_ref::<BlogError>(),
        Some(BlogError::InvalidArgument(_))
    ) {
        McpError::invalid_params(error.to_string(), None)
    } else {
        McpError::internal_error(error.to_string(), None)
    }
}

#[derive(Debug, Error)]
#[error("tool '{tool_name}' is disabled by server configuration")]
struct ToolDisabledError {
    tool_name: String,
}

impl ToolDisabledError {
    fn new(tool_name: &str) -> Self {
        Self {
            tool_name: tool_name.to_ascii_lowercase(),
        }
    }
}
