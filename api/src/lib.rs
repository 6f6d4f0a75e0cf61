//! # RideBook API
//!
//! HTTP surface for email verification and fare pricing. The binary in
//! `main.rs` wires configuration, logging and infrastructure into
//! [`app::create_app`]; everything here is exported so tests can build the
//! same router.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
