//! Core traits for MCP tool implementations

use async_trait::async_trait;

use crate::{McpResult, ToolDefinition, ToolResult};

/// Trait for MCP tool implementations
///
/// Tools are the way an MCP server exposes functionality to clients. Each
/// tool advertises a definition (name, description, input schema) and can be
/// invoked with JSON parameters.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool definition
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with the given parameters
    async fn execute(&self, params: serde_json::Value) -> McpResult<ToolResult>;
}
