//! File-backed storage.
//!
//! Both stores are explicit, passed-around repository objects injected into
//! the Actix application state as `web::Data`, so tests can point them at a
//! temporary directory instead of the real one.
//!
//! - `PresentationStore`: one JSON file per presentation under the
//!   presentations directory, named `<id>.json`.
//! - `UploadStore`: one file per upload under the uploads directory, with
//!   collision-avoidant names assigned at upload time.

mod presentations;
mod uploads;

pub use presentations::PresentationStore;
pub use uploads::UploadStore;
