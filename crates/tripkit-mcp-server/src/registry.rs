//! Tool registry keyed by tool name

use std::collections::HashMap;

use tripkit_mcp_core::{McpTool, ToolDefinition};

use crate::config::ToolsConfig;
use crate::tools::{
    CheckFridgeTool, FindRecipesTool, GetActivitiesTool, GetCurrentDateTool, GetWeatherTool,
    SuggestHotelsTool,
};

/// Registry of the tools this server exposes
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(&mut self, tool: Box<dyn McpTool>) {
        self.tools.insert(tool.definition().name, tool);
    }

    pub fn get(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Build a registry with the tools enabled in the configuration
    pub fn from_config(config: &ToolsConfig) -> Self {
        let mut registry = Self::new();

        if config.hotels {
            registry.register(Box::new(SuggestHotelsTool::new()));
        }
        if config.weather {
            registry.register(Box::new(GetWeatherTool::new()));
        }
        if config.activities {
            registry.register(Box::new(GetActivitiesTool::new()));
        }
        if config.current_date {
            registry.register(Box::new(GetCurrentDateTool::new()));
        }
        if config.recipes {
            registry.register(Box::new(FindRecipesTool::new()));
        }
        if config.fridge {
            registry.register(Box::new(CheckFridgeTool::new()));
        }

        registry
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
