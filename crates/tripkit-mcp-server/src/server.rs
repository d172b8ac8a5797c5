//! JSON-RPC surface of the MCP server
//!
//! Methods: `initialize`, `tools/list`, `tools/call`, `ping`. Transport is
//! HTTP, provided by `jsonrpc-http-server`.

use anyhow::Result;
use jsonrpc_core::{IoHandler, Params, Value};
use jsonrpc_http_server::ServerBuilder;
use log::{debug, error, info};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tripkit_mcp_core::{
    ClientInfo, McpTool, ServerCapabilities, ServerInfo, ToolResult, ToolsCapability,
    PROTOCOL_VERSION,
};

use crate::{Config, ToolRegistry};

pub struct McpServer {
    config: Config,
    tools: Arc<RwLock<ToolRegistry>>,
    handler: IoHandler,
}

impl McpServer {
    pub fn new(config: Config) -> Result<Self> {
        let tools = Arc::new(RwLock::new(ToolRegistry::from_config(&config.tools)));
        let mut handler = IoHandler::new();

        // Initialize method
        handler.add_method("initialize", move |params: Params| {
            Box::pin(async move {
                debug!("Received initialize request: {:?}", params);

                if let Ok(value) = params.parse::<serde_json::Value>() {
                    if let Some(client) = value.get("clientInfo") {
                        if let Ok(client) = serde_json::from_value::<ClientInfo>(client.clone()) {
                            info!("Client connected: {} v{}", client.name, client.version);
                        }
                    }
                }

                let server_info = ServerInfo {
                    name: "tripkit-mcp".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                };
                let capabilities = ServerCapabilities {
                    tools: Some(ToolsCapability::default()),
                };

                Ok(json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "serverInfo": server_info,
                    "capabilities": capabilities,
                }))
            })
        });

        // List tools method
        let tools_clone = tools.clone();
        handler.add_method("tools/list", move |_params: Params| {
            let tools = tools_clone.clone();
            Box::pin(async move {
                let tools = tools.read().await;
                Ok(json!({ "tools": tools.definitions() }))
            })
        });

        // Call tool method
        let tools_clone = tools.clone();
        handler.add_method("tools/call", move |params: Params| {
            let tools = tools_clone.clone();
            Box::pin(async move {
                let params = params
                    .parse::<serde_json::Value>()
                    .map_err(|e| jsonrpc_core::Error::invalid_params(e.to_string()))?;

                let tool_name = params["name"]
                    .as_str()
                    .ok_or_else(|| jsonrpc_core::Error::invalid_params("Missing tool name"))?;

                let tool_params = params.get("arguments").cloned().unwrap_or(json!({}));

                let tools = tools.read().await;
                let tool = tools.get(tool_name).ok_or_else(|| {
                    jsonrpc_core::Error::invalid_params(format!("Unknown tool: {}", tool_name))
                })?;

                let result = match tool.execute(tool_params).await {
                    Ok(result) => result,
                    Err(e) => {
                        error!("Tool {} failed: {}", tool_name, e);
                        ToolResult::error(format!("Error: {}", e))
                    }
                };

                serde_json::to_value(&result).map_err(|_| jsonrpc_core::Error::internal_error())
            })
        });

        // Ping method for health checks
        handler.add_method("ping", |_params: Params| {
            Box::pin(async move { Ok(Value::String("pong".to_string())) })
        });

        Ok(Self {
            config,
            tools,
            handler,
        })
    }

    /// Register an extra tool after construction
    pub async fn add_tool(&self, tool: Box<dyn McpTool>) {
        let mut tools = self.tools.write().await;
        tools.register(tool);
    }

    /// Names of the currently registered tools
    pub async fn tool_names(&self) -> Vec<String> {
        self.tools.read().await.names()
    }

    pub async fn run(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let server = ServerBuilder::new(self.handler)
            .start_http(&addr.parse()?)
            .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

        info!("MCP server running on http://{}", addr);

        // Keep server running
        server.wait();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolsConfig;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    async fn call(server: &McpServer, request: &str) -> serde_json::Value {
        let response = server
            .handler
            .handle_request(request)
            .await
            .expect("a response");
        serde_json::from_str(&response).unwrap()
    }

    #[tokio::test]
    async fn test_initialize() {
        let server = server();
        let response = call(
            &server,
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        )
        .await;
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], "tripkit-mcp");
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = server();
        let response = call(
            &server,
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}}"#,
        )
        .await;
        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 6);
        assert!(tools
            .iter()
            .any(|t| t["name"] == "suggest_hotels" && t["inputSchema"]["required"].is_array()));
    }

    #[tokio::test]
    async fn test_tools_call_success() {
        let server = server();
        let request = r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"suggest_hotels","arguments":{"location":"Tokyo","check_in":"2024-06-01","check_out":"2024-06-03"}}}"#;
        let response = call(&server, request).await;
        assert_eq!(response["result"]["isError"], false);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        let payload: serde_json::Value = serde_json::from_str(text).unwrap();
        assert!(payload["hotels"].as_array().unwrap().len() >= 3);
    }

    #[tokio::test]
    async fn test_tools_call_validation_error_is_tool_error() {
        let server = server();
        let request = r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"suggest_hotels","arguments":{"location":"Paris","check_in":"2024-05-10","check_out":"2024-05-08"}}}"#;
        let response = call(&server, request).await;
        assert_eq!(response["result"]["isError"], true);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("check_out"), "message was {}", text);
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let server = server();
        let request =
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"nope","arguments":{}}}"#;
        let response = call(&server, request).await;
        assert!(response["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_ping() {
        let server = server();
        let response = call(&server, r#"{"jsonrpc":"2.0","id":6,"method":"ping"}"#).await;
        assert_eq!(response["result"], "pong");
    }

    #[tokio::test]
    async fn test_disabled_tool_not_listed() {
        let config = Config {
            tools: ToolsConfig {
                hotels: true,
                weather: false,
                activities: false,
                current_date: false,
                recipes: false,
                fridge: false,
            },
            ..Config::default()
        };
        let server = McpServer::new(config).unwrap();
        assert_eq!(server.tool_names().await, vec!["suggest_hotels"]);
    }

    #[tokio::test]
    async fn test_add_tool_after_construction() {
        let config = Config {
            tools: ToolsConfig {
                hotels: true,
                weather: false,
                activities: false,
                current_date: false,
                recipes: false,
                fridge: false,
            },
            ..Config::default()
        };
        let server = McpServer::new(config).unwrap();
        server
            .add_tool(Box::new(crate::tools::GetWeatherTool::new()))
            .await;

        let response = call(
            &server,
            r#"{"jsonrpc":"2.0","id":7,"method":"tools/list","params":{}}"#,
        )
        .await;
        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);
        assert!(tools.iter().any(|t| t["name"] == "get_weather"));

        let request = r#"{"jsonrpc":"2.0","id":8,"method":"tools/call","params":{"name":"get_weather","arguments":{"city":"Oslo","date":"2024-06-01"}}}"#;
        let response = call(&server, request).await;
        assert_eq!(response["result"]["isError"], false);
    }
}
