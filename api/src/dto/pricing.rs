//! Pricing request and response bodies

use serde::{Deserialize, Serialize};

use rb_core::domain::value_objects::fare::lenient_amount;
use rb_core::domain::value_objects::{CountyInfo, DistanceInfo, FareSummary, PricingBreakdownLine};

/// Body of `POST /api/v1/pricing/breakdown`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownRequest {
    #[serde(default)]
    pub pricing: FareSummary,

    #[serde(default)]
    pub county_info: Option<CountyInfo>,

    #[serde(default)]
    pub distance_info: Option<DistanceInfo>,

    #[serde(default, deserialize_with = "lenient_amount")]
    pub dead_mileage_distance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownResponse {
    pub lines: Vec<PricingBreakdownLine>,
}

/// Body of a successful `POST /api/v1/pricing/quote`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub pricing: FareSummary,
    pub lines: Vec<PricingBreakdownLine>,
}
