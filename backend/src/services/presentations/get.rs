use crate::store::PresentationStore;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// `GET /api/presentations/{id}`: the full stored document.
pub async fn process(store: web::Data<PresentationStore>, id: web::Path<String>) -> impl Responder {
    match store.get(&id) {
        Ok(Some(presentation)) => HttpResponse::Ok().json(presentation),
        Ok(None) => HttpResponse::NotFound().json(json!({ "error": "Presentation not found" })),
        Err(e) => HttpResponse::InternalServerError().json(json!({ "error": e })),
    }
}
