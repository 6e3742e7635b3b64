//! # Slide Model
//!
//! One page of a presentation. The slide is a closed tagged union keyed by
//! the `type` field on the wire, with one variant per slide kind. Consumers
//! (the exported viewer, the media collector and the URL rewriter in the
//! backend) pattern-match exhaustively over this enum, so adding a slide kind
//! is a compile-time-checked change everywhere it matters.
//!
//! Media references live in four places:
//! - `Image::image_url` and `Video::video_url`,
//! - each `MediaItem::url` of a `MultiMedia` slide,
//! - each image/video `LayoutSlot::content` of a `CustomLayout` slide.
//!
//! A reference is either a server-local `/uploads/<filename>` path or an
//! absolute `http(s)://` URL.

use serde::{Deserialize, Serialize};

/// A slide, tagged by `type` on the wire (`title`, `content`, `image`,
/// `video`, `contact`, `multi-media`, `custom-layout`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Slide {
    #[serde(rename_all = "camelCase")]
    Title {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_color: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Content {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_color: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Image {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_color: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Video {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        video_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_color: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Contact {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        phone: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        website: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_color: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    MultiMedia {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default)]
        media_items: Vec<MediaItem>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_color: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    CustomLayout {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        layout_id: Option<String>,
        #[serde(default)]
        layout_slots: Vec<LayoutSlot>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_color: Option<String>,
    },
}

impl Slide {
    /// Stable identifier of the slide within its presentation.
    pub fn id(&self) -> &str {
        match self {
            Slide::Title { id, .. }
            | Slide::Content { id, .. }
            | Slide::Image { id, .. }
            | Slide::Video { id, .. }
            | Slide::Contact { id, .. }
            | Slide::MultiMedia { id, .. }
            | Slide::CustomLayout { id, .. } => id,
        }
    }

    /// Whether the slide carries any media reference (used for the
    /// `hasMedia` flag in presentation summaries).
    pub fn has_media(&self) -> bool {
        match self {
            Slide::Title { .. } | Slide::Content { .. } | Slide::Contact { .. } => false,
            Slide::Image { image_url, .. } => image_url.as_deref().is_some_and(|u| !u.is_empty()),
            Slide::Video { video_url, .. } => video_url.as_deref().is_some_and(|u| !u.is_empty()),
            Slide::MultiMedia { media_items, .. } => {
                media_items.iter().any(|item| !item.url.is_empty())
            }
            Slide::CustomLayout { layout_slots, .. } => layout_slots.iter().any(|slot| {
                slot.kind.is_media() && slot.content.as_deref().is_some_and(|c| !c.is_empty())
            }),
        }
    }
}

/// Kind of a media item on a multi-media slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// One positioned media region on a multi-media slide. Position and size are
/// percentages of the slide area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub url: String,
    pub position: MediaPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaPosition {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Kind of a slot on a custom-layout slide. Text slots carry their text in
/// `content`; image and video slots carry a media reference there instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Image,
    Video,
    Text,
}

impl SlotKind {
    pub fn is_media(&self) -> bool {
        matches!(self, SlotKind::Image | SlotKind::Video)
    }
}

/// A positioned content region on a custom-layout slide. Coordinates are
/// pixels on the 800x600 design canvas; the viewer scales them to the
/// rendered slide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSlot {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SlotKind,
    pub position: SlotPosition,
    pub size: SlotSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotSize {
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_type_tag_round_trip() {
        let json = r#"{
            "id": "demo",
            "type": "multi-media",
            "title": "Showcase",
            "mediaItems": [
                {
                    "id": "m1",
                    "type": "image",
                    "url": "/uploads/a.png",
                    "position": { "x": 5.0, "y": 15.0, "width": 40.0, "height": 35.0 },
                    "caption": "Interface"
                }
            ]
        }"#;

        let slide: Slide = serde_json::from_str(json).expect("deserialize");
        match &slide {
            Slide::MultiMedia { media_items, .. } => {
                assert_eq!(media_items.len(), 1);
                assert_eq!(media_items[0].kind, MediaKind::Image);
            }
            other => panic!("wrong variant: {other:?}"),
        }

        let back = serde_json::to_value(&slide).expect("serialize");
        assert_eq!(back["type"], "multi-media");
        assert_eq!(back["mediaItems"][0]["type"], "image");
    }

    #[test]
    fn custom_layout_slot_fields() {
        let json = r#"{
            "id": "layout-1",
            "type": "custom-layout",
            "layoutId": "two-up",
            "layoutSlots": [
                {
                    "id": "s1",
                    "type": "video",
                    "position": { "x": 40.0, "y": 30.0 },
                    "size": { "width": 320.0, "height": 240.0 },
                    "content": "https://example.com/clip.mp4",
                    "objectFit": "cover",
                    "autoplay": true
                },
                {
                    "id": "s2",
                    "type": "text",
                    "position": { "x": 0.0, "y": 0.0 },
                    "size": { "width": 800.0, "height": 80.0 },
                    "content": "Headline"
                }
            ]
        }"#;

        let slide: Slide = serde_json::from_str(json).expect("deserialize");
        let Slide::CustomLayout { layout_slots, .. } = &slide else {
            panic!("wrong variant");
        };
        assert_eq!(layout_slots[0].kind, SlotKind::Video);
        assert!(layout_slots[0].kind.is_media());
        assert_eq!(layout_slots[0].autoplay, Some(true));
        assert!(!layout_slots[1].kind.is_media());
        assert!(slide.has_media());
    }

    #[test]
    fn has_media_ignores_empty_urls() {
        let slide: Slide = serde_json::from_str(
            r#"{ "id": "s", "type": "image", "title": "T", "imageUrl": "" }"#,
        )
        .expect("deserialize");
        assert!(!slide.has_media());
    }
}
