//! # Presentation Service Module
//!
//! Routes under `/api/presentations`, backed by the file-based
//! `PresentationStore`:
//!
//! - `GET    /`: listing summaries, newest first.
//! - `POST   /`: create; the server assigns the id.
//! - `GET    /{id}`: full document, 404 when absent.
//! - `PUT    /{id}`: full update preserving `createdAt`.
//! - `DELETE /{id}`: removes the backing file.
//! - `POST   /{id}/generate`: exports the presentation supplied in the
//!   request body (the caller's current in-memory state, not the stored
//!   copy) as a standalone zip bundle.

mod create;
mod delete;
mod generate;
mod get;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/presentations";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
        .route("/{id}/generate", post().to(generate::process))
}
