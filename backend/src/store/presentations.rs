//! # Presentation Store
//!
//! Persists presentation documents as one pretty-printed JSON file per
//! presentation (`<id>.json`) in the configured directory. Identity is
//! assigned here on first save (UUID v4) and never changes afterwards.

use chrono::Utc;
use common::model::presentation::{Presentation, PresentationSummary};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct PresentationStore {
    dir: PathBuf,
}

impl PresentationStore {
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(PresentationStore { dir })
    }

    fn file_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Assigns a fresh id and `createdAt` timestamp, writes the document and
    /// returns the generated id.
    pub fn create(&self, mut presentation: Presentation) -> Result<String, String> {
        let id = Uuid::new_v4().to_string();
        presentation.id = Some(id.clone());
        presentation.created_at = Some(Utc::now());
        presentation.updated_at = None;

        self.write(&id, &presentation)?;
        Ok(id)
    }

    /// Lists summaries of every stored presentation, newest first.
    pub fn list(&self) -> Result<Vec<PresentationSummary>, String> {
        let mut summaries = Vec::new();

        for entry in fs::read_dir(&self.dir).map_err(|e| e.to_string())? {
            let entry = entry.map_err(|e| e.to_string())?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            // A single unreadable file must not break the listing.
            match read_presentation(&path) {
                Ok(presentation) => summaries.push(PresentationSummary {
                    id: id.to_string(),
                    title: if presentation.title.is_empty() {
                        "Untitled Presentation".to_string()
                    } else {
                        presentation.title.clone()
                    },
                    created_at: presentation.created_at,
                    slide_count: presentation.slides.len(),
                    has_media: presentation.has_media(),
                }),
                Err(e) => log::warn!("skipping unreadable presentation {}: {}", path.display(), e),
            }
        }

        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    /// Loads one presentation; `Ok(None)` when no file exists for the id.
    pub fn get(&self, id: &str) -> Result<Option<Presentation>, String> {
        let path = self.file_path(id);
        if !path.exists() {
            return Ok(None);
        }
        read_presentation(&path).map(Some)
    }

    /// Full update. Keeps the original id and `createdAt`, stamps
    /// `updatedAt`. `Ok(false)` when the presentation does not exist.
    pub fn update(&self, id: &str, mut presentation: Presentation) -> Result<bool, String> {
        let Some(existing) = self.get(id)? else {
            return Ok(false);
        };

        presentation.id = Some(id.to_string());
        presentation.created_at = existing.created_at;
        presentation.updated_at = Some(Utc::now());

        self.write(id, &presentation)?;
        Ok(true)
    }

    /// Removes the backing file. `Ok(false)` when the presentation does not
    /// exist.
    pub fn delete(&self, id: &str) -> Result<bool, String> {
        let path = self.file_path(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(|e| e.to_string())?;
        Ok(true)
    }

    fn write(&self, id: &str, presentation: &Presentation) -> Result<(), String> {
        let json = serde_json::to_string_pretty(presentation).map_err(|e| e.to_string())?;
        fs::write(self.file_path(id), json).map_err(|e| e.to_string())
    }
}

fn read_presentation(path: &Path) -> Result<Presentation, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    serde_json::from_slice(&bytes).map_err(|e| e.to_string())
}
