use crate::store::PresentationStore;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// `DELETE /api/presentations/{id}`: removes the backing file.
pub async fn process(store: web::Data<PresentationStore>, id: web::Path<String>) -> impl Responder {
    match store.delete(&id) {
        Ok(true) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Presentation deleted successfully"
        })),
        Ok(false) => HttpResponse::NotFound().json(json!({ "error": "Presentation not found" })),
        Err(e) => HttpResponse::InternalServerError().json(json!({ "error": e })),
    }
}
