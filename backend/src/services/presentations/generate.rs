//! `POST /api/presentations/{id}/generate`: the standalone bundle export.
//!
//! The body carries the presentation document (the caller's current editing
//! state; the stored copy is not consulted). The response is the zip bundle
//! as an attachment. A malformed body is rejected by the JSON extractor; a
//! per-asset resolution failure only degrades the bundle; an assembly
//! failure is a 500 with no partial archive.

use crate::export::export_presentation;
use crate::store::UploadStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::presentation::Presentation;
use serde_json::json;

pub async fn process(
    uploads: web::Data<UploadStore>,
    id: web::Path<String>,
    payload: web::Json<Presentation>,
) -> impl Responder {
    match export_presentation(&payload, &uploads).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/zip")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"presentation-{id}.zip\""),
            ))
            .body(bytes),
        Err(e) => {
            log::error!("export of presentation {id} failed: {e}");
            HttpResponse::InternalServerError().json(json!({ "error": e.to_string() }))
        }
    }
}
