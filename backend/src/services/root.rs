use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// `GET /` when no built frontend is being hosted.
pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Welcome to the Book Library App" }))
}
