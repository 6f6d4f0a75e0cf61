//! Display lines of an itemized fare.

use serde::{Deserialize, Serialize};

/// Category of a breakdown line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Base,
    Distance,
    Surcharge,
    Discount,
    Total,
}

/// One displayed charge, discount or total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdownLine {
    /// Description including the sub-values it was derived from
    pub label: String,

    /// Signed amount in dollars; discounts are negative
    pub amount: f64,

    pub kind: LineKind,
}

impl PricingBreakdownLine {
    pub fn new(label: impl Into<String>, amount: f64, kind: LineKind) -> Self {
        Self {
            label: label.into(),
            amount,
            kind,
        }
    }
}
