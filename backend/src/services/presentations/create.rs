use crate::store::PresentationStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::presentation::Presentation;
use common::requests::SavePresentationResponse;
use serde_json::json;

/// `POST /api/presentations`: persists a new presentation and returns the
/// generated id.
pub async fn process(
    store: web::Data<PresentationStore>,
    payload: web::Json<Presentation>,
) -> impl Responder {
    match store.create(payload.into_inner()) {
        Ok(id) => HttpResponse::Ok().json(SavePresentationResponse {
            success: true,
            presentation_id: id,
            message: "Presentation saved successfully".to_string(),
        }),
        Err(e) => HttpResponse::InternalServerError().json(json!({ "error": e })),
    }
}
