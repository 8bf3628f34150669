//! Service health endpoint.

use actix_web::HttpResponse;

use crate::constants::MSG_SERVER_RUNNING;
use crate::models::HealthResponse;

/// Report service liveness
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}
