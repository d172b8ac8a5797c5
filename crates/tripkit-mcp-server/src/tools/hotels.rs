//! Hotel suggestion tool
//!
//! Validates a check-in/check-out date pair and fabricates a ranked list of
//! hotel listings for a location. All data is synthetic; the price bands and
//! amenity catalog are illustrative constants, not business rules.

use std::cmp::Ordering;
use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tripkit_mcp_core::{McpError, McpResult, McpTool, ToolDefinition, ToolResult};

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid ISO date pattern"));

const VENUES: [&str; 5] = ["Hotel", "Inn", "Suites", "Resort", "Plaza"];

const NEIGHBORHOODS: [&str; 6] = [
    "Downtown",
    "Historic District",
    "Waterfront",
    "Business District",
    "Arts District",
    "University Area",
];

const AMENITIES: [&str; 8] = [
    "Free WiFi",
    "Pool",
    "Spa",
    "Gym",
    "Restaurant",
    "Bar",
    "Room Service",
    "Parking",
];

const STREET_NAMES: [&str; 10] = [
    "Maple", "Oak", "Cedar", "Harbor", "Market", "Sunset", "Hillcrest", "Willow", "Granite",
    "Juniper",
];

const STREET_SUFFIXES: [&str; 5] = ["St", "Ave", "Blvd", "Ln", "Dr"];

/// Category of a generated hotel; determines its nightly price band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HotelType {
    Luxury,
    Boutique,
    Budget,
    Business,
}

impl HotelType {
    const ALL: [HotelType; 4] = [
        HotelType::Luxury,
        HotelType::Boutique,
        HotelType::Budget,
        HotelType::Business,
    ];

    /// Nightly price band (min, max) for this hotel type.
    fn price_band(&self) -> (f64, f64) {
        match self {
            HotelType::Luxury => (250.0, 600.0),
            HotelType::Boutique => (180.0, 350.0),
            HotelType::Budget => (80.0, 150.0),
            HotelType::Business => (150.0, 300.0),
        }
    }
}

impl fmt::Display for HotelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HotelType::Luxury => "Luxury",
            HotelType::Boutique => "Boutique",
            HotelType::Budget => "Budget",
            HotelType::Business => "Business",
        };
        write!(f, "{}", name)
    }
}

/// A single fabricated hotel listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub address: String,
    pub location: String,
    pub rating: f64,
    pub price_per_night: f64,
    pub hotel_type: HotelType,
    pub amenities: Vec<String>,
    pub available_rooms: u32,
}

/// Ranked hotel listings, best rating first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSuggestions {
    pub hotels: Vec<Hotel>,
}

/// Date-validation failures for `suggest_hotels`
#[derive(Debug, Error)]
pub enum HotelDateError {
    #[error("{param} must be in ISO format (YYYY-MM-DD), got: {value}")]
    InvalidDateFormat { param: &'static str, value: String },

    #[error("{param} is not a valid calendar date: {value}")]
    InvalidDateValue { param: &'static str, value: String },

    #[error("check_out date ({check_out}) must be after check_in date ({check_in})")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

/// Validate that a string is an ISO date (YYYY-MM-DD) naming a real calendar
/// day, and return the parsed date.
fn validate_iso_date(value: &str, param: &'static str) -> Result<NaiveDate, HotelDateError> {
    if !ISO_DATE.is_match(value) {
        return Err(HotelDateError::InvalidDateFormat {
            param,
            value: value.to_string(),
        });
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| HotelDateError::InvalidDateValue {
        param,
        value: value.to_string(),
    })
}

fn pick<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn street_address(rng: &mut impl Rng) -> String {
    format!(
        "{} {} {}",
        rng.gen_range(100..=9999),
        pick(rng, &STREET_NAMES),
        pick(rng, &STREET_SUFFIXES)
    )
}

/// Suggest hotels for a location and date range.
///
/// Validates both dates before generating anything; a failed validation is
/// terminal and produces no partial result. Generation draws only from `rng`,
/// so output is deterministic for a seeded generator.
pub fn suggest_hotels(
    location: &str,
    check_in: &str,
    check_out: &str,
    rng: &mut impl Rng,
) -> Result<HotelSuggestions, HotelDateError> {
    let check_in_date = validate_iso_date(check_in, "check_in")?;
    let check_out_date = validate_iso_date(check_out, "check_out")?;
    if check_out_date <= check_in_date {
        return Err(HotelDateError::InvalidDateRange {
            check_in: check_in_date,
            check_out: check_out_date,
        });
    }

    let count = rng.gen_range(3..=8);
    let mut hotels = Vec::with_capacity(count);

    for _ in 0..count {
        let hotel_type = *pick(rng, &HotelType::ALL);
        let (min_price, max_price) = hotel_type.price_band();
        let amenity_count = rng.gen_range(3..=6);

        hotels.push(Hotel {
            name: format!("{} {}", hotel_type, pick(rng, &VENUES)),
            address: street_address(rng),
            location: format!("{}, {}", pick(rng, &NEIGHBORHOODS), location),
            rating: (rng.gen_range(3.0..=5.0f64) * 10.0).round() / 10.0,
            price_per_night: rng.gen_range(min_price..=max_price).round(),
            hotel_type,
            amenities: AMENITIES
                .choose_multiple(rng, amenity_count)
                .map(|a| a.to_string())
                .collect(),
            available_rooms: rng.gen_range(1..=15),
        });
    }

    // Best-rated first; stable sort keeps tie order deterministic under a seed
    hotels.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));

    Ok(HotelSuggestions { hotels })
}

/// Arguments accepted by the `suggest_hotels` tool
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestHotelsArgs {
    pub location: String,
    pub check_in: String,
    pub check_out: String,
}

/// MCP tool wrapper around [`suggest_hotels`]
pub struct SuggestHotelsTool;

impl SuggestHotelsTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SuggestHotelsTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl McpTool for SuggestHotelsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "suggest_hotels",
            "Suggest hotels based on location and dates",
        )
        .with_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "Location (city or area) to search for hotels"
                },
                "check_in": {
                    "type": "string",
                    "description": "Check-in date in ISO format (YYYY-MM-DD)"
                },
                "check_out": {
                    "type": "string",
                    "description": "Check-out date in ISO format (YYYY-MM-DD)"
                }
            },
            "required": ["location", "check_in", "check_out"]
        }))
    }

    async fn execute(&self, params: serde_json::Value) -> McpResult<ToolResult> {
        let args: SuggestHotelsArgs = serde_json::from_value(params)
            .map_err(|e| McpError::InvalidParameters(e.to_string()))?;

        let suggestions = suggest_hotels(
            &args.location,
            &args.check_in,
            &args.check_out,
            &mut rand::thread_rng(),
        )
        .map_err(|e| McpError::InvalidParameters(e.to_string()))?;

        Ok(ToolResult::text(serde_json::to_string(&suggestions)?))
    }
}
