//! # Template Service Module
//!
//! Routes under `/api/templates`: the built-in starter-deck catalogue.
//!
//! - `GET /`: the full template list.
//! - `GET /{template_id}`: one template, 404 when unknown.

mod builtin;
mod get;
mod list;

pub use builtin::builtin_templates;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/templates";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{template_id}", get().to(get::process))
}
