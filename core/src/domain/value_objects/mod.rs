//! Value objects representing immutable domain concepts.

pub mod breakdown;
pub mod fare;

// Re-export commonly used types
pub use breakdown::{LineKind, PricingBreakdownLine};
pub use fare::{CountyInfo, DistanceInfo, FareRequest, FareSummary};
