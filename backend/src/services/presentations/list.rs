use crate::store::PresentationStore;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// `GET /api/presentations`: summaries of every stored presentation.
pub async fn process(store: web::Data<PresentationStore>) -> impl Responder {
    match store.list() {
        Ok(summaries) => HttpResponse::Ok().json(summaries),
        Err(e) => HttpResponse::InternalServerError().json(json!({ "error": e })),
    }
}
