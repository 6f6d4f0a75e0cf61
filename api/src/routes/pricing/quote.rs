use actix_web::{web, HttpResponse};

use rb_core::domain::value_objects::{DistanceInfo, FareRequest};
use rb_core::services::otp::{EmailServiceTrait, OtpStore};
use rb_core::services::pricing::build_breakdown_with_rates;

use crate::dto::pricing::QuoteResponse;
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

/// Handler for POST /api/v1/pricing/quote
///
/// Prices a trip and returns both the fare and its itemized lines.
pub async fn quote<E, S>(
    state: web::Data<AppState<E, S>>,
    request: web::Json<FareRequest>,
) -> HttpResponse
where
    E: EmailServiceTrait + ?Sized + 'static,
    S: OtpStore + ?Sized + 'static,
{
    match state.fare_calculator.calculate(&request) {
        Ok(pricing) => {
            let distance = DistanceInfo {
                distance: request.trip_distance_miles,
                duration: None,
            };
            let lines = build_breakdown_with_rates(
                &pricing,
                Some(&request.county_info),
                Some(&distance),
                request.dead_mileage_miles,
                state.fare_calculator.rates(),
            );
            HttpResponse::Ok().json(QuoteResponse { pricing, lines })
        }
        Err(error) => domain_error_response(&error),
    }
}
