use crate::store::PresentationStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::presentation::Presentation;
use serde_json::json;

/// `PUT /api/presentations/{id}`: full update; the original `createdAt`
/// survives and `updatedAt` is stamped.
pub async fn process(
    store: web::Data<PresentationStore>,
    id: web::Path<String>,
    payload: web::Json<Presentation>,
) -> impl Responder {
    match store.update(&id, payload.into_inner()) {
        Ok(true) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Presentation updated successfully"
        })),
        Ok(false) => HttpResponse::NotFound().json(json!({ "error": "Presentation not found" })),
        Err(e) => HttpResponse::InternalServerError().json(json!({ "error": e })),
    }
}
