use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A property listing as submitted for analysis. Immutable once validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub address: String,
    /// Listing price in whole dollars.
    pub price: u64,
    /// Interior square footage.
    pub sqft: u32,
    pub bedrooms: u8,
    /// Half steps allowed (e.g. 2.5).
    pub bathrooms: f64,
    pub year_built: u16,
    #[serde(default)]
    pub property_type: PropertyType,
}

/// Property categories the valuation model was fit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PropertyType {
    #[default]
    House,
    Condo,
    Townhouse,
}

impl PropertyType {
    pub const fn label(self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
        }
    }
}

/// Output of the valuation model for a single property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Model-estimated value in dollars.
    pub predicted_value: f64,
    /// `predicted_value / sqft`.
    pub predicted_price_per_sqft: f64,
}

impl ValuationResult {
    pub fn from_value(predicted_value: f64, sqft: u32) -> Self {
        let predicted_price_per_sqft = if sqft == 0 {
            0.0
        } else {
            predicted_value / sqft as f64
        };
        Self {
            predicted_value,
            predicted_price_per_sqft,
        }
    }
}

/// A nearby recent sale, displayed alongside the analysis. Display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableSale {
    pub address: String,
    pub sale_price: u64,
    pub sale_date: NaiveDate,
    pub sqft: u32,
    pub bedrooms: u8,
    pub bathrooms: f64,
}

/// Evaluation-time inputs that are not attributes of the property itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketContext {
    /// Reference date for recency judgments (condition, construction age).
    pub as_of: NaiveDate,
    /// Count of recent comparable sales; `None` means no velocity signal.
    pub recent_sales: Option<u32>,
}

impl MarketContext {
    pub fn neutral(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            recent_sales: None,
        }
    }

    pub fn with_recent_sales(as_of: NaiveDate, recent_sales: u32) -> Self {
        Self {
            as_of,
            recent_sales: Some(recent_sales),
        }
    }
}

/// Tagged request body for the analyze endpoint. A listing URL wins when both
/// forms are present, matching the historical endpoint behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnalyzeRequest {
    ZillowUrl { zillow_url: String },
    Property(PropertyRecord),
}

/// Caller-correctable input failures. Messages are surfaced verbatim.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("address must not be empty")]
    EmptyAddress,
    #[error("price must be between {min} and {max} dollars (got {found})")]
    PriceOutOfRange { found: u64, min: u64, max: u64 },
    #[error("interior square footage must be between {min} and {max} (got {found})")]
    SqftOutOfRange { found: u32, min: u32, max: u32 },
    #[error("bathrooms must be a non-negative half step (got {found})")]
    InvalidBathrooms { found: f64 },
    #[error("year built must be between {min} and {max} (got {found})")]
    YearBuiltOutOfRange { found: u16, min: u16, max: u16 },
    #[error("listing price must be positive")]
    NonPositivePrice,
    #[error("predicted value must be positive")]
    NonPositivePrediction,
    #[error("square footage must be positive")]
    NonPositiveSqft,
}

/// Six-month market snapshot for a neighborhood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodTrends {
    pub location: String,
    pub average_price: u64,
    pub price_trend: Vec<TrendPoint>,
    pub days_on_market: u32,
    pub price_per_sqft: u32,
    pub market_status: MarketStatus,
    pub total_sales: u32,
}

/// One month of the neighborhood price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// `YYYY-MM`.
    pub month: String,
    pub price: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketStatus {
    Buyer,
    Seller,
}

impl MarketStatus {
    pub const fn label(self) -> &'static str {
        match self {
            MarketStatus::Buyer => "buyer",
            MarketStatus::Seller => "seller",
        }
    }
}
