//! TripKit MCP Core - Shared traits and types for the Model Context Protocol
//!
//! This crate provides the foundational abstractions used by
//! `tripkit-mcp-server`: the [`McpTool`] trait that every tool implements,
//! the wire-facing definition/result types, and the [`McpError`] taxonomy.
//!
//! # Overview
//!
//! The Model Context Protocol (MCP) lets an LLM-driven agent call out to
//! external tools. A tool is anything implementing [`McpTool`]: it advertises
//! a [`ToolDefinition`] (name, description, JSON Schema for its parameters)
//! and executes with JSON arguments, producing a [`ToolResult`] made of
//! [`ContentBlock`]s.
//!
//! ```rust
//! use tripkit_mcp_core::{McpResult, McpTool, ToolDefinition, ToolResult};
//!
//! struct Echo;
//!
//! #[async_trait::async_trait]
//! impl McpTool for Echo {
//!     fn definition(&self) -> ToolDefinition {
//!         ToolDefinition::new("echo", "Echoes its input back")
//!     }
//!
//!     async fn execute(&self, params: serde_json::Value) -> McpResult<ToolResult> {
//!         Ok(ToolResult::text(params.to_string()))
//!     }
//! }
//! ```

mod error;
mod traits;
mod types;

pub use error::*;
pub use traits::*;
pub use types::*;
