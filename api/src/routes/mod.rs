//! Route handlers and the state they share

use std::sync::Arc;

use rb_core::services::otp::{EmailServiceTrait, OtpService, OtpStore};
use rb_core::services::pricing::FareCalculator;

pub mod auth;
pub mod pricing;

/// Application state that holds shared services
pub struct AppState<E, S>
where
    E: EmailServiceTrait + ?Sized,
    S: OtpStore + ?Sized,
{
    pub otp_service: Arc<OtpService<E, S>>,
    pub fare_calculator: FareCalculator,
}

impl<E, S> AppState<E, S>
where
    E: EmailServiceTrait + ?Sized,
    S: OtpStore + ?Sized,
{
    pub fn new(otp_service: Arc<OtpService<E, S>>, fare_calculator: FareCalculator) -> Self {
        Self {
            otp_service,
            fare_calculator,
        }
    }
}
