use actix_web::{HttpResponse, Responder, Scope, get, web};

use crate::model::common::AppState;

#[get("/liveness")]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[get("/readiness")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    match data.database_connection.ping().await {
        Ok(_) => HttpResponse::Ok().body("OK"),
        Err(_) => HttpResponse::ServiceUnavailable().body("DOWN"),
    }
}

pub fn routers() -> Scope {
    web::scope("/health").service(liveness).service(readiness)
}
