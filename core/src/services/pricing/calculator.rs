//! Fare calculation from trip facts.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::domain::value_objects::{FareRequest, FareSummary};
use crate::errors::{DomainError, DomainResult};

use super::rates;

/// Largest number of legs a single booking may price
pub const MAX_LEGS: u32 = 2;

/// Rate card used by [`FareCalculator`]
#[derive(Debug, Clone, PartialEq)]
pub struct FareRates {
    pub base_rate_per_leg: f64,
    pub bariatric_rate_per_leg: f64,
    pub in_county_rate_per_mile: f64,
    pub out_of_county_rate_per_mile: f64,
    pub dead_mileage_rate_per_mile: f64,
    pub county_surcharge_per_county: f64,
    pub weekend_surcharge: f64,
    pub after_hours_surcharge: f64,
    pub emergency_surcharge: f64,
    pub holiday_surcharge: f64,
    pub veteran_discount_percent: f64,
    pub business_hours_open: u32,
    pub business_hours_close: u32,
}

impl Default for FareRates {
    fn default() -> Self {
        Self {
            base_rate_per_leg: rates::BASE_RATE_PER_LEG,
            bariatric_rate_per_leg: rates::BARIATRIC_RATE_PER_LEG,
            in_county_rate_per_mile: rates::IN_COUNTY_RATE_PER_MILE,
            out_of_county_rate_per_mile: rates::OUT_OF_COUNTY_RATE_PER_MILE,
            dead_mileage_rate_per_mile: rates::DEAD_MILEAGE_RATE_PER_MILE,
            county_surcharge_per_county: rates::COUNTY_SURCHARGE_PER_COUNTY,
            weekend_surcharge: rates::WEEKEND_SURCHARGE,
            after_hours_surcharge: rates::AFTER_HOURS_SURCHARGE,
            emergency_surcharge: rates::EMERGENCY_SURCHARGE,
            holiday_surcharge: rates::HOLIDAY_SURCHARGE,
            veteran_discount_percent: rates::VETERAN_DISCOUNT_PERCENT,
            business_hours_open: rates::BUSINESS_HOURS_OPEN,
            business_hours_close: rates::BUSINESS_HOURS_CLOSE,
        }
    }
}

/// Prices a trip against a rate card
#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    rates: FareRates,
}

impl FareCalculator {
    pub fn new(rates: FareRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &FareRates {
        &self.rates
    }

    /// Saturday or Sunday pickup
    pub fn is_weekend(pickup: &NaiveDateTime) -> bool {
        matches!(pickup.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Pickup outside business hours
    pub fn is_after_hours(&self, pickup: &NaiveDateTime) -> bool {
        let hour = pickup.hour();
        hour < self.rates.business_hours_open || hour >= self.rates.business_hours_close
    }

    /// Compute the fare for a trip.
    ///
    /// Distance is priced per leg at the in-county or out-of-county rate.
    /// The veteran discount applies to the subtotal of every other charge.
    /// Every amount is rounded to cents.
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` if `legs` is outside `1..=2` or a mileage is
    /// negative or not finite.
    pub fn calculate(&self, request: &FareRequest) -> DomainResult<FareSummary> {
        validate(request)?;

        let r = &self.rates;
        let legs = request.legs as f64;

        let base_rate_per_leg = if request.is_bariatric {
            r.bariatric_rate_per_leg
        } else {
            r.base_rate_per_leg
        };
        let base_price = round_cents(base_rate_per_leg * legs);

        let per_mile = if request.county_info.is_in_franklin_county {
            r.in_county_rate_per_mile
        } else {
            r.out_of_county_rate_per_mile
        };
        let trip_distance_price = round_cents(request.trip_distance_miles * per_mile * legs);
        let dead_mileage_price = round_cents(request.dead_mileage_miles * r.dead_mileage_rate_per_mile);
        let county_surcharge =
            round_cents(request.county_info.counties_out as f64 * r.county_surcharge_per_county);

        let weekend_surcharge = flat(Self::is_weekend(&request.pickup_time), r.weekend_surcharge);
        let after_hours_surcharge = flat(self.is_after_hours(&request.pickup_time), r.after_hours_surcharge);
        let emergency_surcharge = flat(request.is_emergency, r.emergency_surcharge);
        let holiday_surcharge = flat(request.is_holiday, r.holiday_surcharge);

        let subtotal = base_price
            + trip_distance_price
            + dead_mileage_price
            + county_surcharge
            + weekend_surcharge
            + after_hours_surcharge
            + emergency_surcharge
            + holiday_surcharge;

        let veteran_discount = if request.is_veteran {
            round_cents(subtotal * r.veteran_discount_percent / 100.0)
        } else {
            0.0
        };

        let summary = FareSummary {
            legs: request.legs,
            base_rate_per_leg,
            base_price,
            trip_distance_price,
            dead_mileage_price,
            county_surcharge,
            weekend_surcharge,
            after_hours_surcharge,
            emergency_surcharge,
            holiday_surcharge,
            veteran_discount,
            total: round_cents(subtotal - veteran_discount),
            is_bariatric: request.is_bariatric,
        };

        tracing::debug!(
            legs = summary.legs,
            total = summary.total,
            event = "fare_calculated",
            "Calculated fare"
        );

        Ok(summary)
    }
}

fn validate(request: &FareRequest) -> DomainResult<()> {
    if request.legs == 0 || request.legs > MAX_LEGS {
        return Err(DomainError::validation(format!(
            "legs must be between 1 and {}",
            MAX_LEGS
        )));
    }
    if !request.trip_distance_miles.is_finite() || request.trip_distance_miles < 0.0 {
        return Err(DomainError::validation("tripDistanceMiles must be a non-negative number"));
    }
    if !request.dead_mileage_miles.is_finite() || request.dead_mileage_miles < 0.0 {
        return Err(DomainError::validation("deadMileageMiles must be a non-negative number"));
    }
    Ok(())
}

fn flat(applies: bool, amount: f64) -> f64 {
    if applies {
        amount
    } else {
        0.0
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
