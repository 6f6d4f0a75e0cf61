//! Shared handler helpers

pub mod error;
pub mod health;
