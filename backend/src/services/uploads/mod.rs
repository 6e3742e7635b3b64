//! # Upload Service Module
//!
//! `POST /api/upload`: multipart upload of a single `file` field into the
//! uploads directory. Uploaded files are later referenced from slides via
//! the returned `/uploads/<filename>` URL and served statically.

mod upload;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/upload";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(upload::process))
}
