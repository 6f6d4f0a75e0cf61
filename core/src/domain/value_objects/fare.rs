//! Fare inputs and the computed fare summary.
//!
//! Wire names are camelCase to match what booking clients send. Numeric fields
//! of [`FareSummary`] are read leniently: a missing, null, non-numeric or
//! non-finite value becomes zero so that rendering never fails on bad data.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Computed fare for one booking, as produced by the fare calculator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FareSummary {
    #[serde(deserialize_with = "lenient_count")]
    pub legs: u32,
    #[serde(deserialize_with = "lenient_amount")]
    pub base_rate_per_leg: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub base_price: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub trip_distance_price: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub dead_mileage_price: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub county_surcharge: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub weekend_surcharge: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub after_hours_surcharge: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub emergency_surcharge: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub holiday_surcharge: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub veteran_discount: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub total: f64,
    #[serde(deserialize_with = "lenient_flag")]
    pub is_bariatric: bool,
}

/// Where the trip sits relative to the home county
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountyInfo {
    #[serde(deserialize_with = "lenient_flag_default_true")]
    pub is_in_franklin_county: bool,
    #[serde(deserialize_with = "lenient_count")]
    pub counties_out: u32,
}

impl Default for CountyInfo {
    fn default() -> Self {
        Self {
            is_in_franklin_county: true,
            counties_out: 0,
        }
    }
}

/// Routed distance for the trip, as reported by the mapping service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistanceInfo {
    /// Miles per leg
    #[serde(deserialize_with = "lenient_amount")]
    pub distance: f64,

    /// Minutes per leg, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// Trip facts the fare calculator prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareRequest {
    /// 1 for one-way, 2 for a round trip
    #[serde(default = "default_legs")]
    pub legs: u32,

    #[serde(default)]
    pub is_bariatric: bool,

    /// Routed miles per leg
    pub trip_distance_miles: f64,

    /// Miles driven from the office to pickup without a passenger
    #[serde(default)]
    pub dead_mileage_miles: f64,

    #[serde(default)]
    pub county_info: CountyInfo,

    /// Local wall-clock pickup time
    pub pickup_time: NaiveDateTime,

    #[serde(default)]
    pub is_emergency: bool,

    #[serde(default)]
    pub is_holiday: bool,

    #[serde(default)]
    pub is_veteran: bool,
}

fn default_legs() -> u32 {
    1
}

fn number_from(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Reads any JSON value as a finite amount, falling back to zero
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from(&value).unwrap_or(0.0))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from(&value)
        .filter(|n| *n >= 0.0)
        .map(|n| n.min(u32::MAX as f64) as u32)
        .unwrap_or(0))
}

fn flag_from(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|n| n != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(flag_from(&value).unwrap_or(false))
}

fn lenient_flag_default_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(flag_from(&value).unwrap_or(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_reads_camel_case() {
        let summary: FareSummary = serde_json::from_value(json!({
            "legs": 2,
            "baseRatePerLeg": 50,
            "basePrice": 100,
            "tripDistancePrice": 60,
            "total": 160,
            "isBariatric": true
        }))
        .unwrap();

        assert_eq!(summary.legs, 2);
        assert_eq!(summary.base_price, 100.0);
        assert_eq!(summary.trip_distance_price, 60.0);
        assert_eq!(summary.weekend_surcharge, 0.0);
        assert!(summary.is_bariatric);
    }

    #[test]
    fn test_summary_tolerates_malformed_numbers() {
        let summary: FareSummary = serde_json::from_value(json!({
            "legs": "1",
            "basePrice": "50",
            "countySurcharge": null,
            "weekendSurcharge": "n/a",
            "holidaySurcharge": {"amount": 10},
            "total": 50
        }))
        .unwrap();

        assert_eq!(summary.legs, 1);
        assert_eq!(summary.base_price, 50.0);
        assert_eq!(summary.county_surcharge, 0.0);
        assert_eq!(summary.weekend_surcharge, 0.0);
        assert_eq!(summary.holiday_surcharge, 0.0);
    }

    #[test]
    fn test_county_info_defaults_to_home_county() {
        let info: CountyInfo = serde_json::from_value(json!({})).unwrap();
        assert!(info.is_in_franklin_county);
        assert_eq!(info.counties_out, 0);

        let info: CountyInfo =
            serde_json::from_value(json!({"isInFranklinCounty": false, "countiesOut": 2}))
                .unwrap();
        assert!(!info.is_in_franklin_county);
        assert_eq!(info.counties_out, 2);
    }

    #[test]
    fn test_fare_request_defaults() {
        let request: FareRequest = serde_json::from_value(json!({
            "tripDistanceMiles": 12.5,
            "pickupTime": "2026-03-14T09:30:00"
        }))
        .unwrap();

        assert_eq!(request.legs, 1);
        assert!(!request.is_bariatric);
        assert_eq!(request.dead_mileage_miles, 0.0);
        assert!(request.county_info.is_in_franklin_county);
    }
}
