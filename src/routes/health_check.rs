use actix_web::HttpResponse;

/// Liveness probe: a `200 OK` with no body.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
