//! Mock recipe-planning tools
//!
//! `find_recipes` keyword-matches a query against a tiny canned cookbook;
//! `check_fridge` returns one of two fabricated ingredient lists.

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tripkit_mcp_core::{McpError, McpResult, McpTool, ToolDefinition, ToolResult};

/// A canned recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

fn recipe(title: &str, ingredients: &[&str], steps: &[&str]) -> Recipe {
    Recipe {
        title: title.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

/// Look up recipes for a query. Matching is keyword-based; anything without
/// a known keyword gets the grilled cheese fallback.
pub fn find_recipes(query: &str) -> Vec<Recipe> {
    let query = query.to_lowercase();
    if query.contains("pasta") {
        vec![recipe(
            "Pasta Primavera",
            &["pasta", "vegetables", "olive oil"],
            &["Cook pasta.", "Sauté vegetables."],
        )]
    } else if query.contains("tofu") {
        vec![recipe(
            "Tofu Stir Fry",
            &["tofu", "soy sauce", "vegetables"],
            &["Cube tofu.", "Stir fry veggies."],
        )]
    } else {
        vec![recipe(
            "Grilled Cheese Sandwich",
            &["bread", "cheese", "butter"],
            &[
                "Butter bread.",
                "Place cheese between slices.",
                "Grill until golden brown.",
            ],
        )]
    }
}

/// What is currently in the (fictional) fridge. Draws one sample from `rng`.
pub fn fridge_contents(rng: &mut impl Rng) -> Vec<String> {
    let contents: &[&str] = if rng.gen::<f64>() < 0.5 {
        &["pasta", "tomato sauce", "bell peppers", "olive oil"]
    } else {
        &["tofu", "soy sauce", "broccoli", "carrots"]
    };
    contents.iter().map(|i| i.to_string()).collect()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FindRecipesArgs {
    pub query: String,
}

/// MCP tool wrapper around [`find_recipes`]
pub struct FindRecipesTool;

impl FindRecipesTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FindRecipesTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl McpTool for FindRecipesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("find_recipes", "Returns recipes based on a query").with_schema(
            serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Dish or ingredient to find recipes for"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    async fn execute(&self, params: serde_json::Value) -> McpResult<ToolResult> {
        let args: FindRecipesArgs = serde_json::from_value(params)
            .map_err(|e| McpError::InvalidParameters(e.to_string()))?;
        log::info!("Finding recipes for '{}'", args.query);

        let recipes = find_recipes(&args.query);
        Ok(ToolResult::text(serde_json::to_string(&recipes)?))
    }
}

/// MCP tool wrapper around [`fridge_contents`]
pub struct CheckFridgeTool;

impl CheckFridgeTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CheckFridgeTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl McpTool for CheckFridgeTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "check_fridge",
            "Returns a list of ingredients currently in the fridge",
        )
    }

    async fn execute(&self, _params: serde_json::Value) -> McpResult<ToolResult> {
        log::info!("Checking fridge for current ingredients");

        let contents = fridge_contents(&mut rand::thread_rng());
        Ok(ToolResult::text(serde_json::to_string(&contents)?))
    }
}
