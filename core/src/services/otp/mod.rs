//! Email verification codes
//!
//! This module provides the one-time passcode workflow:
//! - Code issuance keyed by (email, verification id)
//! - Verification with expiry and attempt limiting
//! - An in-memory store and its explicitly owned background sweeper
//! - Email dispatch through an injected delivery service

mod clock;
mod service;
mod store;
mod sweeper;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use rb_shared::config::OtpConfig;
pub use service::OtpService;
pub use store::InMemoryOtpStore;
pub use sweeper::{OtpSweeper, SweeperHandle, MIN_SWEEP_INTERVAL};
pub use traits::{EmailServiceTrait, OtpStore};
pub use types::SendCodeResult;
