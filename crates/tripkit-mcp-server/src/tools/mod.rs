//! Tools exposed by the TripKit MCP server

pub mod activities;
pub mod clock;
pub mod hotels;
pub mod recipes;
pub mod weather;

pub use activities::GetActivitiesTool;
pub use clock::GetCurrentDateTool;
pub use hotels::SuggestHotelsTool;
pub use recipes::{CheckFridgeTool, FindRecipesTool};
pub use weather::GetWeatherTool;
