//! Published rate card, in dollars

/// Per leg, standard vehicle
pub const BASE_RATE_PER_LEG: f64 = 50.0;

/// Per leg, bariatric vehicle
pub const BARIATRIC_RATE_PER_LEG: f64 = 150.0;

/// Per mile while the trip stays in Franklin County
pub const IN_COUNTY_RATE_PER_MILE: f64 = 3.0;

/// Per mile once the trip leaves Franklin County
pub const OUT_OF_COUNTY_RATE_PER_MILE: f64 = 4.0;

/// Per mile driven from the office to pickup
pub const DEAD_MILEAGE_RATE_PER_MILE: f64 = 4.0;

/// Per county crossed beyond the home county
pub const COUNTY_SURCHARGE_PER_COUNTY: f64 = 50.0;

pub const WEEKEND_SURCHARGE: f64 = 40.0;
pub const AFTER_HOURS_SURCHARGE: f64 = 40.0;
pub const EMERGENCY_SURCHARGE: f64 = 40.0;
pub const HOLIDAY_SURCHARGE: f64 = 100.0;

/// Veteran discount as a percentage of the pre-discount subtotal
pub const VETERAN_DISCOUNT_PERCENT: f64 = 20.0;

/// Business hours are [OPEN, CLOSE) in local pickup time
pub const BUSINESS_HOURS_OPEN: u32 = 8;
pub const BUSINESS_HOURS_CLOSE: u32 = 18;

/// Renders a dollar amount the way labels show it: `$50`, `$12.50`
pub fn format_dollars(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}
