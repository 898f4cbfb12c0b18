use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{AppState, database, errors::AppError};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: &'static str,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 500, description = "Database unreachable")
    )
)]
#[get("/health")]
pub async fn health(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    database::ping(&data.db).await?;
    Ok(HttpResponse::Ok().json(HealthResponse { status: "ok" }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
