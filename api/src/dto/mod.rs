//! Request and response bodies

pub mod auth;
pub mod pricing;

pub use rb_shared::errors::ErrorResponse;
