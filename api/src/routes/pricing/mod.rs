//! Fare pricing route handlers
//!
//! - `POST /api/v1/pricing/breakdown`
//! - `POST /api/v1/pricing/quote`

pub mod breakdown;
pub mod quote;

pub use breakdown::breakdown;
pub use quote::quote;
