//! # Presentation Model
//!
//! The persisted presentation document: a title, the template it started
//! from, the ordered slide list, and free-form viewer settings. The `id` is
//! absent until the server assigns one on first save and is immutable
//! afterwards.

use crate::model::slide::Slide;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub slides: Vec<Slide>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub settings: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Presentation {
    pub fn has_media(&self) -> bool {
        self.slides.iter().any(Slide::has_media)
    }
}

/// Listing entry returned by `GET /api/presentations`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationSummary {
    pub id: String,
    pub title: String,
    pub created_at: Option<DateTime<Utc>>,
    pub slide_count: usize,
    pub has_media: bool,
}
