//! # Media Reference Resolver
//!
//! Classifies each collected reference and obtains its bytes: local
//! `/uploads/` references are read from the upload store, external http(s)
//! references are downloaded once with a bounded timeout. Failures are
//! recorded as missing and never abort the export; the rewriter simply
//! leaves those references untouched so the viewer can still try the
//! original URL.

use crate::store::UploadStore;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Resolution table from original reference string to archived filename
/// under `media/`. References that failed to resolve are absent.
pub type MediaFileMap = HashMap<String, String>;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);
// Some origins reject default client identifiers, so downloads present a
// browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Outcome of resolving a presentation's media references.
#[derive(Debug, Default)]
pub struct ResolvedMedia {
    /// Archived filename and bytes, one entry per resolved reference.
    pub files: Vec<(String, Vec<u8>)>,
    pub map: MediaFileMap,
    /// References that were attempted but could not be obtained.
    pub missing: Vec<String>,
}

/// Classification of a single reference string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaRef {
    /// A file in the uploads directory; the payload is the stored filename.
    Local(String),
    /// An absolute http(s) URL.
    External(String),
    /// Not a resolvable media reference; neither attempted nor missing.
    Skipped,
}

impl MediaRef {
    /// The `/uploads/` test runs first so a full URL pointing back at this
    /// server's uploads is still treated as local.
    pub fn classify(reference: &str) -> MediaRef {
        if let Some(idx) = reference.rfind("/uploads/") {
            let filename = &reference[idx + "/uploads/".len()..];
            if filename.is_empty() {
                return MediaRef::Skipped;
            }
            return MediaRef::Local(filename.to_string());
        }
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return MediaRef::External(reference.to_string());
        }
        MediaRef::Skipped
    }
}

/// Resolves every reference in the deduplicated set. One attempt per
/// reference, no retries; each download carries its own timeout so a dead
/// origin cannot stall the export indefinitely.
pub async fn resolve_media_refs(refs: &BTreeSet<String>, uploads: &UploadStore) -> ResolvedMedia {
    let mut resolved = ResolvedMedia::default();
    let client = reqwest::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .ok();

    for reference in refs {
        match MediaRef::classify(reference) {
            MediaRef::Local(filename) => match uploads.read(&filename) {
                Ok(bytes) => {
                    log::info!("bundled local media {} ({} bytes)", filename, bytes.len());
                    resolved.map.insert(reference.clone(), filename.clone());
                    resolved.files.push((filename, bytes));
                }
                Err(e) => {
                    log::warn!("media file not found: {filename}: {e}");
                    resolved.missing.push(reference.clone());
                }
            },
            MediaRef::External(url) => {
                let Some(client) = client.as_ref() else {
                    resolved.missing.push(reference.clone());
                    continue;
                };
                match download(client, &url).await {
                    Ok(bytes) => {
                        let filename = external_filename(&url);
                        log::info!("downloaded {} -> {} ({} bytes)", url, filename, bytes.len());
                        resolved.map.insert(reference.clone(), filename.clone());
                        resolved.files.push((filename, bytes));
                    }
                    Err(e) => {
                        log::warn!("failed to download {url}: {e}");
                        resolved.missing.push(reference.clone());
                    }
                }
            }
            MediaRef::Skipped => {
                log::debug!("skipping non-media reference: {reference}");
            }
        }
    }

    resolved
}

async fn download(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, String> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(bytes.to_vec())
}

/// Synthesizes a collision-resistant archive filename for an external URL:
/// `<base>-<hash8>-<timestamp><ext>`, where `base` is the sanitized stem of
/// the final URL path segment, `hash8` the first 8 hex chars of the md5 of
/// the full URL, and `ext` the extension taken from the URL path when one is
/// present. Hash plus timestamp is not a guaranteed-unique key; collisions
/// are treated as negligible.
pub fn external_filename(url: &str) -> String {
    let path = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url)
        .split(['?', '#'])
        .next()
        .unwrap_or("");
    let last_segment = path.rsplit('/').next().unwrap_or("");

    let (stem, ext) = match last_segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            (stem.to_string(), format!(".{ext}"))
        }
        _ => (last_segment.to_string(), String::new()),
    };

    let sanitize = Regex::new(r"[^A-Za-z0-9._-]+").expect("static pattern");
    let base = sanitize.replace_all(&stem, "-").trim_matches('-').to_string();
    let base = if base.is_empty() {
        "external".to_string()
    } else {
        base
    };

    let hash = format!("{:x}", md5::compute(url.as_bytes()));
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    format!("{base}-{}-{timestamp}{ext}", &hash[..8])
}
