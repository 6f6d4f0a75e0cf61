//! Itemized fare rendering.

use crate::domain::value_objects::{
    CountyInfo, DistanceInfo, FareSummary, LineKind, PricingBreakdownLine,
};

use super::calculator::FareRates;
use super::rates::format_dollars;

/// Non-finite and non-positive amounts are treated as absent
fn positive(amount: f64) -> Option<f64> {
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

fn finite_or_zero(amount: f64) -> f64 {
    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}

fn plural(count: u32, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

/// Render a computed fare as ordered display lines.
///
/// Lines appear in a fixed order: base, distance, dead mileage, county,
/// weekend/after-hours, emergency, holiday, veteran discount, total. Base and
/// total are always present; every other line is omitted when its amount is
/// not positive. Weekend and after-hours charges merge into one line when both
/// apply. The total is copied from `pricing` and never recomputed.
///
/// Rendering never fails. Rates quoted in labels come from the published
/// rate card; use [`build_breakdown_with_rates`] for a fare priced otherwise.
pub fn build_breakdown(
    pricing: &FareSummary,
    county_info: Option<&CountyInfo>,
    distance_info: Option<&DistanceInfo>,
    dead_mileage_distance: f64,
) -> Vec<PricingBreakdownLine> {
    build_breakdown_with_rates(
        pricing,
        county_info,
        distance_info,
        dead_mileage_distance,
        &FareRates::default(),
    )
}

/// [`build_breakdown`] with labels quoting `rates`
pub fn build_breakdown_with_rates(
    pricing: &FareSummary,
    county_info: Option<&CountyInfo>,
    distance_info: Option<&DistanceInfo>,
    dead_mileage_distance: f64,
    rates: &FareRates,
) -> Vec<PricingBreakdownLine> {
    let county = county_info.cloned().unwrap_or_default();
    // Mileage back-derivation only; labels show the legs as given
    let mileage_legs = pricing.legs.max(1);
    let mut lines = Vec::with_capacity(9);

    // Base
    let rate_per_leg = positive(pricing.base_rate_per_leg).unwrap_or(if pricing.is_bariatric {
        rates.bariatric_rate_per_leg
    } else {
        rates.base_rate_per_leg
    });
    let mut base_label = format!(
        "Base fare ({} @ {}/leg)",
        plural(pricing.legs, "leg", "legs"),
        format_dollars(rate_per_leg)
    );
    if pricing.is_bariatric {
        base_label.push_str(" (Bariatric rate)");
    }
    lines.push(PricingBreakdownLine::new(
        base_label,
        finite_or_zero(pricing.base_price),
        LineKind::Base,
    ));

    // Distance
    if let Some(amount) = positive(pricing.trip_distance_price) {
        let (rate, area) = if county.is_in_franklin_county {
            (rates.in_county_rate_per_mile, "Franklin County")
        } else {
            (rates.out_of_county_rate_per_mile, "outside Franklin County")
        };
        let label = match distance_info {
            Some(_) => {
                let miles = amount / (rate * mileage_legs as f64);
                format!(
                    "Distance charge ({:.1} miles @ {}/mile ({}))",
                    miles,
                    format_dollars(rate),
                    area
                )
            }
            None => format!("Distance charge ({}/mile ({}))", format_dollars(rate), area),
        };
        lines.push(PricingBreakdownLine::new(label, amount, LineKind::Distance));
    }

    // Dead mileage
    if let Some(amount) = positive(pricing.dead_mileage_price) {
        let rate = format_dollars(rates.dead_mileage_rate_per_mile);
        let label = match positive(dead_mileage_distance) {
            Some(miles) => format!("Dead mileage ({:.1} miles @ {}/mile)", miles, rate),
            None => format!("Dead mileage (office travel @ {}/mile)", rate),
        };
        lines.push(PricingBreakdownLine::new(label, amount, LineKind::Distance));
    }

    // County
    if let Some(amount) = positive(pricing.county_surcharge) {
        let label = if county.counties_out > 0 {
            format!(
                "County surcharge ({} @ {}/county)",
                plural(county.counties_out, "county", "counties"),
                format_dollars(rates.county_surcharge_per_county)
            )
        } else {
            tracing::warn!(
                county_surcharge = amount,
                event = "county_count_missing",
                "County surcharge present without a county count"
            );
            "County surcharge (2+ counties)".to_string()
        };
        lines.push(PricingBreakdownLine::new(label, amount, LineKind::Surcharge));
    }

    // Weekend / after-hours
    match (
        positive(pricing.weekend_surcharge),
        positive(pricing.after_hours_surcharge),
    ) {
        (Some(weekend), Some(after_hours)) => lines.push(PricingBreakdownLine::new(
            "Weekend/After-hours surcharge",
            weekend + after_hours,
            LineKind::Surcharge,
        )),
        (weekend, after_hours) => {
            if let Some(amount) = weekend {
                lines.push(PricingBreakdownLine::new(
                    "Weekend surcharge",
                    amount,
                    LineKind::Surcharge,
                ));
            }
            if let Some(amount) = after_hours {
                lines.push(PricingBreakdownLine::new(
                    "After-hours surcharge",
                    amount,
                    LineKind::Surcharge,
                ));
            }
        }
    }

    if let Some(amount) = positive(pricing.emergency_surcharge) {
        lines.push(PricingBreakdownLine::new(
            "Emergency surcharge",
            amount,
            LineKind::Surcharge,
        ));
    }

    if let Some(amount) = positive(pricing.holiday_surcharge) {
        lines.push(PricingBreakdownLine::new(
            "Holiday surcharge",
            amount,
            LineKind::Surcharge,
        ));
    }

    if let Some(amount) = positive(pricing.veteran_discount) {
        lines.push(PricingBreakdownLine::new(
            format!("Veteran discount ({}%)", rates.veteran_discount_percent),
            -amount,
            LineKind::Discount,
        ));
    }

    lines.push(PricingBreakdownLine::new(
        "Total",
        finite_or_zero(pricing.total),
        LineKind::Total,
    ));

    lines
}
