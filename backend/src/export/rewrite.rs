//! # URL Rewriter
//!
//! Produces a copy of the presentation in which every reference present in
//! the `MediaFileMap` points at `media/<archived-filename>`. References
//! absent from the map stay untouched so the exported viewer can still
//! attempt the original URL as a best-effort fallback. The traversal shape
//! mirrors the collector's; the input document is never mutated.
//!
//! Rewriting is idempotent: `media/...` paths contain neither `/uploads/`
//! nor a scheme, so they never appear as map keys and a second pass is a
//! no-op.

use crate::export::resolve::MediaFileMap;
use common::model::presentation::Presentation;
use common::model::slide::Slide;

pub fn rewrite_media_refs(presentation: &Presentation, map: &MediaFileMap) -> Presentation {
    let mut rewritten = presentation.clone();

    for slide in &mut rewritten.slides {
        match slide {
            Slide::Title { .. } | Slide::Content { .. } | Slide::Contact { .. } => {}
            Slide::Image { image_url, .. } => rewrite(image_url.as_mut(), map),
            Slide::Video { video_url, .. } => rewrite(video_url.as_mut(), map),
            Slide::MultiMedia { media_items, .. } => {
                for item in media_items {
                    if let Some(filename) = map.get(&item.url) {
                        item.url = format!("media/{filename}");
                    }
                }
            }
            Slide::CustomLayout { layout_slots, .. } => {
                for slot in layout_slots {
                    if slot.kind.is_media() {
                        rewrite(slot.content.as_mut(), map);
                    }
                }
            }
        }
    }

    rewritten
}

fn rewrite(reference: Option<&mut String>, map: &MediaFileMap) {
    if let Some(reference) = reference {
        if let Some(filename) = map.get(reference.as_str()) {
            *reference = format!("media/{filename}");
        }
    }
}
