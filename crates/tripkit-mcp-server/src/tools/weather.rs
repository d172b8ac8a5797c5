//! Mock weather tool
//!
//! Returns a canned forecast: mostly rainy, occasionally sunny. The constants
//! mirror the travel-demo scripts this server backs.

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tripkit_mcp_core::{McpError, McpResult, McpTool, ToolDefinition, ToolResult};

const SUNNY_CHANCE: f64 = 0.05;

/// A fabricated forecast for a city and date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub temperature: i32,
    pub description: String,
}

/// Produce the mock forecast. Draws one sample from `rng`.
pub fn mock_forecast(rng: &mut impl Rng) -> Forecast {
    if rng.gen::<f64>() < SUNNY_CHANCE {
        Forecast {
            temperature: 72,
            description: "Sunny".to_string(),
        }
    } else {
        Forecast {
            temperature: 60,
            description: "Rainy".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetWeatherArgs {
    pub city: String,
    pub date: String,
}

/// MCP tool wrapper around [`mock_forecast`]
pub struct GetWeatherTool;

impl GetWeatherTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GetWeatherTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl McpTool for GetWeatherTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_weather", "Returns weather data for a given city and date")
            .with_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "city": {
                        "type": "string",
                        "description": "City to get the forecast for"
                    },
                    "date": {
                        "type": "string",
                        "description": "Date of the forecast in ISO format (YYYY-MM-DD)"
                    }
                },
                "required": ["city", "date"]
            }))
    }

    async fn execute(&self, params: serde_json::Value) -> McpResult<ToolResult> {
        let args: GetWeatherArgs = serde_json::from_value(params)
            .map_err(|e| McpError::InvalidParameters(e.to_string()))?;
        log::info!("Getting weather for {} on {}", args.city, args.date);

        let forecast = mock_forecast(&mut rand::thread_rng());
        Ok(ToolResult::text(serde_json::to_string(&forecast)?))
    }
}
