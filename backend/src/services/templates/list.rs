use actix_web::{HttpResponse, Responder};

use super::builtin_templates;

/// `GET /api/templates`: the built-in starter decks.
pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(builtin_templates())
}
