//! # RideBook Core
//!
//! Core business logic and domain layer for the RideBook backend.
//! This crate contains domain entities and value objects, the email
//! verification and fare pricing services, and the error types that form the
//! foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
