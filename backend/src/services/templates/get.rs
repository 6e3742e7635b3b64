use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use super::builtin_templates;

/// `GET /api/templates/{template_id}`: one template by id.
pub async fn process(template_id: web::Path<String>) -> impl Responder {
    match builtin_templates()
        .into_iter()
        .find(|t| t.id == *template_id)
    {
        Some(template) => HttpResponse::Ok().json(template),
        None => HttpResponse::NotFound().json(json!({ "error": "Template not found" })),
    }
}
