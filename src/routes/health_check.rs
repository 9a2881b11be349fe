use actix_web::HttpResponse;
use uuid::Uuid;

pub async fn health_check() -> HttpResponse {
    let request_id = Uuid::new_v4();

    tracing::info_span!(
        "Health check",
        %request_id,
        version = env!("CARGO_PKG_VERSION")
    )
    .in_scope(|| HttpResponse::Ok().finish())
}
