//! Business services containing domain logic and use cases.

pub mod otp;
pub mod pricing;

// Re-export commonly used types
pub use otp::{
    Clock, EmailServiceTrait, InMemoryOtpStore, ManualClock, OtpService, OtpStore, OtpSweeper,
    SendCodeResult, SweeperHandle, SystemClock,
};
pub use pricing::{build_breakdown, build_breakdown_with_rates, FareCalculator, FareRates};
