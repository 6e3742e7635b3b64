//! Streams the multipart `file` field to disk chunk by chunk, enforcing the
//! type allowlist and the size ceiling while writing. A rejected or failed
//! upload removes the partial file.

use crate::store::UploadStore;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::requests::{UploadResponse, UploadedFile};
use futures_util::StreamExt;
use serde_json::json;
use std::fs::{self, File};
use std::io::{BufWriter, Write};

/// 200 MB, matching the JSON body limit.
const MAX_FILE_SIZE: u64 = 200 * 1024 * 1024;

/// Images, videos, and documents.
const ALLOWED_EXTENSIONS: &[&str] = &[
    "jpeg", "jpg", "png", "gif", "svg", "webp", "mp4", "mov", "avi", "pdf", "doc", "docx", "ppt",
    "pptx",
];

pub async fn process(uploads: web::Data<UploadStore>, payload: Multipart) -> impl Responder {
    match save_upload(&uploads, payload).await {
        Ok(file) => {
            log::info!("file uploaded: {} ({} bytes)", file.originalname, file.size);
            HttpResponse::Ok().json(UploadResponse {
                success: true,
                file,
            })
        }
        Err(UploadError::TooLarge) => HttpResponse::PayloadTooLarge()
            .json(json!({ "error": "File too large. Maximum size is 200MB." })),
        Err(UploadError::DisallowedType) => HttpResponse::BadRequest()
            .json(json!({ "error": "Only image, video, and document files are allowed!" })),
        Err(UploadError::MissingFile) => {
            HttpResponse::BadRequest().json(json!({ "error": "No file uploaded" }))
        }
        Err(UploadError::Internal(e)) => {
            log::error!("upload failed: {e}");
            HttpResponse::InternalServerError().json(json!({ "error": e }))
        }
    }
}

enum UploadError {
    MissingFile,
    DisallowedType,
    TooLarge,
    Internal(String),
}

fn allowed(filename: &str) -> bool {
    let ext = filename.rsplit_once('.').map(|(_, ext)| ext.to_lowercase());
    matches!(ext, Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

async fn save_upload(
    uploads: &UploadStore,
    mut payload: Multipart,
) -> Result<UploadedFile, UploadError> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| UploadError::Internal(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if name.as_deref() != Some("file") {
            continue;
        }

        let original = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        if original.is_empty() {
            return Err(UploadError::MissingFile);
        }
        if !allowed(&original) {
            return Err(UploadError::DisallowedType);
        }

        let stored_name = uploads.unique_name(&original);
        let path = uploads
            .resolve(&stored_name)
            .ok_or_else(|| UploadError::Internal("invalid upload filename".to_string()))?;

        let file = File::create(&path).map_err(|e| UploadError::Internal(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        let mut size: u64 = 0;

        while let Some(chunk) = field.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    let _ = fs::remove_file(&path);
                    return Err(UploadError::Internal(e.to_string()));
                }
            };
            size += chunk.len() as u64;
            if size > MAX_FILE_SIZE {
                drop(writer);
                let _ = fs::remove_file(&path);
                return Err(UploadError::TooLarge);
            }
            if let Err(e) = writer.write_all(&chunk) {
                let _ = fs::remove_file(&path);
                return Err(UploadError::Internal(e.to_string()));
            }
        }
        writer
            .flush()
            .map_err(|e| UploadError::Internal(e.to_string()))?;

        let mimetype = mime_guess::from_path(&original)
            .first_or_octet_stream()
            .to_string();

        return Ok(UploadedFile {
            url: format!("/uploads/{stored_name}"),
            filename: stored_name,
            originalname: original,
            size,
            mimetype,
        });
    }

    Err(UploadError::MissingFile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_allowlist() {
        assert!(allowed("photo.PNG"));
        assert!(allowed("clip.mp4"));
        assert!(allowed("deck.pptx"));
        assert!(!allowed("script.exe"));
        assert!(!allowed("noextension"));
    }
}
