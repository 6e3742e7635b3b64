//! # Media Reference Collector
//!
//! One pass over the slide list gathering every media reference string,
//! deduplicated. Every slide is inspected regardless of its kind: a
//! custom-layout slide carries its media in slots even though it has no
//! top-level image or video URL.

use common::model::presentation::Presentation;
use common::model::slide::Slide;
use std::collections::BTreeSet;

/// Collects the distinct media reference strings of a presentation. Empty
/// strings are not references and are ignored.
pub fn collect_media_refs(presentation: &Presentation) -> BTreeSet<String> {
    let mut refs = BTreeSet::new();

    for slide in &presentation.slides {
        match slide {
            Slide::Title { .. } | Slide::Content { .. } | Slide::Contact { .. } => {}
            Slide::Image { image_url, .. } => add_ref(&mut refs, image_url.as_deref()),
            Slide::Video { video_url, .. } => add_ref(&mut refs, video_url.as_deref()),
            Slide::MultiMedia { media_items, .. } => {
                for item in media_items {
                    add_ref(&mut refs, Some(&item.url));
                }
            }
            Slide::CustomLayout { layout_slots, .. } => {
                for slot in layout_slots {
                    if slot.kind.is_media() {
                        add_ref(&mut refs, slot.content.as_deref());
                    }
                }
            }
        }
    }

    refs
}

fn add_ref(refs: &mut BTreeSet<String>, candidate: Option<&str>) {
    if let Some(url) = candidate {
        if !url.is_empty() {
            refs.insert(url.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presentation(json: &str) -> Presentation {
        serde_json::from_str(json).expect("presentation json")
    }

    #[test]
    fn collects_from_every_reference_location() {
        let doc = presentation(
            r#"{
                "title": "T",
                "slides": [
                    { "id": "a", "type": "title", "title": "Cover" },
                    { "id": "b", "type": "image", "imageUrl": "/uploads/a.png" },
                    { "id": "c", "type": "video", "videoUrl": "https://cdn.example.com/v.mp4" },
                    { "id": "d", "type": "multi-media", "mediaItems": [
                        { "id": "m1", "type": "image", "url": "/uploads/b.jpg",
                          "position": { "x": 0, "y": 0, "width": 50, "height": 50 } },
                        { "id": "m2", "type": "video", "url": "https://cdn.example.com/w.mp4",
                          "position": { "x": 50, "y": 0, "width": 50, "height": 50 } }
                    ]},
                    { "id": "e", "type": "custom-layout", "layoutSlots": [
                        { "id": "s1", "type": "image", "content": "/uploads/c.gif",
                          "position": { "x": 0, "y": 0 }, "size": { "width": 100, "height": 100 } },
                        { "id": "s2", "type": "video", "content": "https://cdn.example.com/x.mp4",
                          "position": { "x": 100, "y": 0 }, "size": { "width": 100, "height": 100 } },
                        { "id": "s3", "type": "text", "content": "not a media reference",
                          "position": { "x": 0, "y": 100 }, "size": { "width": 200, "height": 40 } }
                    ]},
                    { "id": "f", "type": "contact", "email": "x@y.z" }
                ]
            }"#,
        );

        let refs = collect_media_refs(&doc);
        let expected: BTreeSet<String> = [
            "/uploads/a.png",
            "/uploads/b.jpg",
            "/uploads/c.gif",
            "https://cdn.example.com/v.mp4",
            "https://cdn.example.com/w.mp4",
            "https://cdn.example.com/x.mp4",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(refs, expected);
    }

    #[test]
    fn deduplicates_repeated_references() {
        let doc = presentation(
            r#"{
                "title": "T",
                "slides": [
                    { "id": "a", "type": "image", "imageUrl": "https://cdn.example.com/same.png" },
                    { "id": "b", "type": "image", "imageUrl": "https://cdn.example.com/same.png" }
                ]
            }"#,
        );
        assert_eq!(collect_media_refs(&doc).len(), 1);
    }

    #[test]
    fn skips_empty_and_absent_urls() {
        let doc = presentation(
            r#"{
                "title": "T",
                "slides": [
                    { "id": "a", "type": "image", "imageUrl": "" },
                    { "id": "b", "type": "video" }
                ]
            }"#,
        );
        assert!(collect_media_refs(&doc).is_empty());
    }
}
