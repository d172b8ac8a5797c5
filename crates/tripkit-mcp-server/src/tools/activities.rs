//! Mock activities tool
//!
//! Returns a fixed set of activities, each located in the requested city.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tripkit_mcp_core::{McpError, McpResult, McpTool, ToolDefinition, ToolResult};

const ACTIVITY_NAMES: [&str; 3] = ["Hiking", "Beach", "Museum"];

/// A fabricated activity suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub location: String,
}

/// List the canned activities for a city.
pub fn activities_for(city: &str) -> Vec<Activity> {
    ACTIVITY_NAMES
        .iter()
        .map(|name| Activity {
            name: name.to_string(),
            location: city.to_string(),
        })
        .collect()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetActivitiesArgs {
    pub city: String,
    pub date: String,
}

/// MCP tool wrapper around [`activities_for`]
pub struct GetActivitiesTool;

impl GetActivitiesTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GetActivitiesTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl McpTool for GetActivitiesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_activities",
            "Returns a list of activities for a given city and date",
        )
        .with_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City to list activities for"
                },
                "date": {
                    "type": "string",
                    "description": "Date of the visit in ISO format (YYYY-MM-DD)"
                }
            },
            "required": ["city", "date"]
        }))
    }

    async fn execute(&self, params: serde_json::Value) -> McpResult<ToolResult> {
        let args: GetActivitiesArgs = serde_json::from_value(params)
            .map_err(|e| McpError::InvalidParameters(e.to_string()))?;
        log::info!("Getting activities for {} on {}", args.city, args.date);

        let activities = activities_for(&args.city);
        Ok(ToolResult::text(serde_json::to_string(&activities)?))
    }
}
