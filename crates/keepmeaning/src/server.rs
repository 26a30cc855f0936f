//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the two core analyses to AI assistants over stdio. The server is a
//! presentation layer: each `#[tool]` method delegates to `keepmeaning_core`
//! and returns the result as pretty-printed JSON text.
//!
//! # Tools
//!
//! - `get_info`: package name, version and description
//! - `scan_text`: findings for a text (weasel words, passive voice, long sentences)
//! - `compute_flow`: flow score, metrics and recommendations for a text

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use keepmeaning_core::{
    Category, FlowOptions, Linter, MetricsModel, RecommendationPolicy, markdown,
    sort_by_position,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `scan_text` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ScanTextParams {
    /// The text to scan. Span offsets in the result are UTF-8 byte offsets
    /// into this string.
    pub text: String,
    /// Order findings by position instead of by detection pass.
    #[serde(default)]
    pub sort: bool,
    /// Only return findings in this category ("style" or "syntax").
    pub category: Option<Category>,
}

/// Parameters for the `compute_flow` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ComputeFlowParams {
    /// The text to analyze.
    pub text: String,
    /// Reduce markdown to prose before scoring.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Secondary metrics model ("baseline" or "computed").
    pub metrics: Option<MetricsModel>,
    /// Recommendation policy ("fixed" or "gated").
    pub recommendations: Option<RecommendationPolicy>,
}

#[derive(Serialize)]
struct PackageSummary {
    name: &'static str,
    version: &'static str,
    description: &'static str,
}

/// MCP server exposing the lint engine and flow calculator.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    linter: Arc<Linter>,
    flow: FlowOptions,
    max_input: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(
            Linter::builtin().clone(),
            FlowOptions::default(),
            Some(keepmeaning_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with a configured linter, default flow options and an
    /// input size cap.
    pub fn new(linter: Linter, flow: FlowOptions, max_input: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            linter: Arc::new(linter),
            flow,
            max_input,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let summary = PackageSummary {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
        };
        let text = if params.format == "json" {
            to_json(&summary)?
        } else {
            format!(
                "{} v{}\n{}",
                summary.name, summary.version, summary.description
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Scan text for weak wording and overlong sentences.
    #[tool(
        description = "Scan text for weasel words, passive voice, and sentences over the word limit. Returns located findings with explanations."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn scan_text(
        &self,
        Parameters(params): Parameters<ScanTextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;

        let mut findings = self.linter.scan(&params.text);
        if let Some(category) = params.category {
            findings.retain(|f| f.category == category);
        }
        if params.sort {
            sort_by_position(&mut findings);
        }

        tracing::info!(tool = "scan_text", findings = findings.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &findings,
        )?)]))
    }

    /// Score the flow of a text.
    #[tool(
        description = "Compute a 0-100 flow score from average sentence length, plus sentence variety, transition density, passive ratio, reading grade, and recommendations."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn compute_flow(
        &self,
        Parameters(params): Parameters<ComputeFlowParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;

        let options = FlowOptions {
            metrics: params.metrics.unwrap_or(self.flow.metrics),
            recommendations: params.recommendations.unwrap_or(self.flow.recommendations),
        };
        let report = if params.strip_markdown {
            self.linter
                .compute_flow(&markdown::strip_to_prose(&params.text), &options)
        } else {
            self.linter.compute_flow(&params.text, &options)
        };

        tracing::info!(
            tool = "compute_flow",
            flow_score = report.flow_score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &report,
        )?)]))
    }
}

impl ProjectServer {
    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use scan_text to find weak wording in a draft and \
                 compute_flow to score how it reads.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
