//! Request and response payload types shared with API clients.

use serde::{Deserialize, Serialize};

/// Response body for `POST /api/presentations`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePresentationResponse {
    pub success: bool,
    pub presentation_id: String,
    pub message: String,
}

/// Response body for `POST /api/upload`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub file: UploadedFile,
}

/// Metadata of a stored upload. `url` is the server-local reference slides
/// embed (`/uploads/<filename>`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadedFile {
    pub filename: String,
    pub originalname: String,
    pub url: String,
    pub size: u64,
    pub mimetype: String,
}
