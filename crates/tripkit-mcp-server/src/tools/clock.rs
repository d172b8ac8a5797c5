//! Current-date tool

use async_trait::async_trait;
use chrono::Local;
use tripkit_mcp_core::{McpResult, McpTool, ToolDefinition, ToolResult};

/// Today's local date as `YYYY-MM-DD`.
pub fn current_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// MCP tool exposing [`current_date`]
pub struct GetCurrentDateTool;

impl GetCurrentDateTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GetCurrentDateTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl McpTool for GetCurrentDateTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_current_date",
            "Gets the current date from the system and returns it as a string in format YYYY-MM-DD",
        )
    }

    async fn execute(&self, _params: serde_json::Value) -> McpResult<ToolResult> {
        Ok(ToolResult::text(current_date()))
    }
}
