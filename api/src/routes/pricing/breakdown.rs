use actix_web::{web, HttpResponse};

use rb_core::services::pricing::build_breakdown;

use crate::dto::pricing::{BreakdownRequest, BreakdownResponse};

/// Handler for POST /api/v1/pricing/breakdown
///
/// Renders an already computed fare as display lines. Missing or malformed
/// amounts are treated as zero, so this never rejects a well-formed JSON body.
pub async fn breakdown(request: web::Json<BreakdownRequest>) -> HttpResponse {
    let request = request.into_inner();
    let lines = build_breakdown(
        &request.pricing,
        request.county_info.as_ref(),
        request.distance_info.as_ref(),
        request.dead_mileage_distance,
    );

    HttpResponse::Ok().json(BreakdownResponse { lines })
}
