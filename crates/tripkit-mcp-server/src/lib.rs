//! TripKit MCP Server - mock travel tools over JSON-RPC
//!
//! Exposes a small set of fabricated travel tools to MCP clients:
//! hotel suggestions (the interesting one - validated dates, randomized
//! listings), a mock weather lookup, a mock activity list, and the current
//! date. Transport is plain JSON-RPC over HTTP, provided by
//! `jsonrpc-http-server`.

pub mod config;
pub mod registry;
pub mod server;
pub mod tools;

pub use config::Config;
pub use registry::ToolRegistry;
pub use server::McpServer;
