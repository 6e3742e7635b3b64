//! # Standalone Bundle Exporter
//!
//! Turns a presentation document into a self-contained zip that replays the
//! presentation offline: an HTML viewer, static CSS and player script, the
//! rewritten document as JSON, a README, and a `media/` folder holding every
//! media reference that could be resolved.
//!
//! Pipeline: collect the deduplicated reference set, resolve each reference
//! to bytes (reading uploads, downloading external URLs), rewrite the
//! document so resolved references point into `media/`, then assemble the
//! archive. Resolution and rewriting complete before any templating starts,
//! so `presentation.json` and `index.html` always reflect the rewritten
//! document.
//!
//! Per-asset failures degrade the bundle (the viewer shows a placeholder at
//! playback time); only serialization or zip failures abort the export.

pub mod archive;
pub mod collect;
pub mod resolve;
pub mod rewrite;
pub mod viewer;

use crate::store::UploadStore;
use archive::BundleWriter;
use common::model::presentation::Presentation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize presentation: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to assemble archive: {0}")]
    Archive(#[from] zip::result::ZipError),
}

/// Exports a presentation to zip bytes. The document comes straight from the
/// caller (request payload or store); the exporter is agnostic to its
/// provenance. A slide-less document still yields a complete, playable
/// bundle.
pub async fn export_presentation(
    presentation: &Presentation,
    uploads: &UploadStore,
) -> Result<Vec<u8>, ExportError> {
    let refs = collect::collect_media_refs(presentation);
    log::info!(
        "exporting '{}': {} slides, {} media reference(s)",
        presentation.title,
        presentation.slides.len(),
        refs.len()
    );

    let resolved = resolve::resolve_media_refs(&refs, uploads).await;
    if !resolved.missing.is_empty() {
        log::warn!(
            "{} media reference(s) could not be resolved and stay external: {:?}",
            resolved.missing.len(),
            resolved.missing
        );
    }

    let rewritten = rewrite::rewrite_media_refs(presentation, &resolved.map);

    let mut bundle = BundleWriter::new();
    bundle.add_file(
        "presentation.json",
        serde_json::to_string_pretty(&rewritten)?.as_bytes(),
    )?;
    bundle.add_file("index.html", viewer::render_index(&rewritten)?.as_bytes())?;
    bundle.add_file("styles.css", viewer::stylesheet())?;
    bundle.add_file("presentation.js", viewer::player_script())?;

    let archived_names: Vec<String> = resolved
        .files
        .iter()
        .map(|(name, _)| name.clone())
        .collect();
    bundle.add_file(
        "README.md",
        viewer::render_readme(&rewritten, &archived_names).as_bytes(),
    )?;

    bundle.add_directory("media")?;
    for (name, bytes) in &resolved.files {
        bundle.add_file(&format!("media/{name}"), bytes)?;
    }

    let bytes = bundle.finish()?;
    log::info!(
        "export finished: {} bundled, {} missing, {} bytes",
        resolved.files.len(),
        resolved.missing.len(),
        bytes.len()
    );
    Ok(bytes)
}
