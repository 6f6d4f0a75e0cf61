//! Fare pricing
//!
//! This module provides:
//! - The published rate card
//! - A fare calculator turning trip facts into a [`FareSummary`](crate::domain::value_objects::FareSummary)
//! - The breakdown engine rendering a summary as ordered display lines

mod breakdown;
mod calculator;
pub mod rates;

#[cfg(test)]
mod tests;

pub use breakdown::{build_breakdown, build_breakdown_with_rates};
pub use calculator::{FareCalculator, FareRates};
