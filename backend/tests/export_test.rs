//! End-to-end tests of the standalone bundle exporter: a presentation
//! document plus an uploads directory in, a zip archive out.

use backend::export::export_presentation;
use backend::store::UploadStore;
use common::model::presentation::Presentation;
use std::io::{Cursor, Read};
use zip::ZipArchive;

fn presentation(json: &str) -> Presentation {
    serde_json::from_str(json).expect("presentation json")
}

fn open_archive(bytes: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
    ZipArchive::new(Cursor::new(bytes)).expect("open archive")
}

fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Vec<u8> {
    let mut entry = archive.by_name(name).expect(name);
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).expect("read entry");
    bytes
}

fn media_entries(archive: &mut ZipArchive<Cursor<Vec<u8>>>) -> Vec<String> {
    (0..archive.len())
        .map(|i| archive.by_index(i).expect("entry").name().to_string())
        .filter(|name| name.starts_with("media/") && name != "media/")
        .collect()
}

#[tokio::test]
async fn local_upload_round_trips_into_the_bundle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let uploads = UploadStore::new(dir.path()).expect("store");
    let source_bytes = b"fake png bytes".to_vec();
    uploads.write("abc.png", &source_bytes).expect("write");

    let doc = presentation(
        r#"{
            "title": "T",
            "slides": [
                { "id": "1", "type": "image", "imageUrl": "/uploads/abc.png" }
            ]
        }"#,
    );

    let bytes = export_presentation(&doc, &uploads).await.expect("export");
    let mut archive = open_archive(bytes);

    let bundled = read_entry(&mut archive, "media/abc.png");
    assert_eq!(bundled, source_bytes);

    let json = read_entry(&mut archive, "presentation.json");
    let exported: serde_json::Value = serde_json::from_slice(&json).expect("json");
    assert_eq!(exported["slides"][0]["imageUrl"], "media/abc.png");

    let readme = String::from_utf8(read_entry(&mut archive, "README.md")).expect("utf8");
    assert!(readme.contains("- `media/abc.png`"));
}

#[tokio::test]
async fn partial_failure_keeps_the_export_alive() {
    let dir = tempfile::tempdir().expect("tempdir");
    let uploads = UploadStore::new(dir.path()).expect("store");
    uploads.write("abc.png", b"png").expect("write");

    // Port 1 refuses connections immediately; the reference stays external.
    let doc = presentation(
        r#"{
            "title": "T",
            "slides": [
                { "id": "1", "type": "image", "imageUrl": "/uploads/abc.png" },
                { "id": "2", "type": "video", "videoUrl": "http://127.0.0.1:1/clip.mp4" }
            ]
        }"#,
    );

    let bytes = export_presentation(&doc, &uploads).await.expect("export");
    let mut archive = open_archive(bytes);

    assert_eq!(media_entries(&mut archive), vec!["media/abc.png".to_string()]);

    let json = read_entry(&mut archive, "presentation.json");
    let exported: serde_json::Value = serde_json::from_slice(&json).expect("json");
    assert_eq!(exported["slides"][0]["imageUrl"], "media/abc.png");
    assert_eq!(exported["slides"][1]["videoUrl"], "http://127.0.0.1:1/clip.mp4");
}

#[tokio::test]
async fn repeated_reference_is_bundled_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let uploads = UploadStore::new(dir.path()).expect("store");
    uploads.write("shared.png", b"png").expect("write");

    let doc = presentation(
        r#"{
            "title": "T",
            "slides": [
                { "id": "1", "type": "image", "imageUrl": "/uploads/shared.png" },
                { "id": "2", "type": "image", "imageUrl": "/uploads/shared.png" }
            ]
        }"#,
    );

    let bytes = export_presentation(&doc, &uploads).await.expect("export");
    let mut archive = open_archive(bytes);

    assert_eq!(media_entries(&mut archive).len(), 1);

    let json = read_entry(&mut archive, "presentation.json");
    let exported: serde_json::Value = serde_json::from_slice(&json).expect("json");
    assert_eq!(exported["slides"][0]["imageUrl"], "media/shared.png");
    assert_eq!(exported["slides"][1]["imageUrl"], "media/shared.png");
}

#[tokio::test]
async fn export_without_media_still_yields_a_complete_bundle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let uploads = UploadStore::new(dir.path()).expect("store");

    let doc = presentation(
        r#"{
            "title": "T",
            "slides": [
                { "id": "1", "type": "title", "title": "Cover", "content": "Hello" },
                { "id": "2", "type": "content", "title": "Body", "content": "World" },
                { "id": "3", "type": "contact", "email": "a@b.c" }
            ]
        }"#,
    );

    let bytes = export_presentation(&doc, &uploads).await.expect("export");
    let mut archive = open_archive(bytes);

    for name in [
        "presentation.json",
        "index.html",
        "styles.css",
        "presentation.js",
        "README.md",
    ] {
        assert!(archive.by_name(name).is_ok(), "missing {name}");
    }
    assert!(archive.by_name("media/").is_ok());
    assert!(media_entries(&mut archive).is_empty());

    let readme = String::from_utf8(read_entry(&mut archive, "README.md")).expect("utf8");
    assert!(readme.contains("No media files included"));
}

#[tokio::test]
async fn custom_layout_slots_are_bundled_and_rewritten() {
    let dir = tempfile::tempdir().expect("tempdir");
    let uploads = UploadStore::new(dir.path()).expect("store");
    uploads.write("slot.png", b"png").expect("write");

    let doc = presentation(
        r#"{
            "title": "T",
            "slides": [
                { "id": "1", "type": "custom-layout", "layoutId": "grid", "layoutSlots": [
                    { "id": "s1", "type": "image", "content": "/uploads/slot.png",
                      "position": { "x": 40, "y": 30 }, "size": { "width": 320, "height": 240 } },
                    { "id": "s2", "type": "text", "content": "caption text",
                      "position": { "x": 0, "y": 500 }, "size": { "width": 800, "height": 100 } }
                ]}
            ]
        }"#,
    );

    let bytes = export_presentation(&doc, &uploads).await.expect("export");
    let mut archive = open_archive(bytes);

    assert_eq!(media_entries(&mut archive), vec!["media/slot.png".to_string()]);

    let json = read_entry(&mut archive, "presentation.json");
    let exported: serde_json::Value = serde_json::from_slice(&json).expect("json");
    let slots = &exported["slides"][0]["layoutSlots"];
    assert_eq!(slots[0]["content"], "media/slot.png");
    // Text slots are not media references and must stay untouched.
    assert_eq!(slots[1]["content"], "caption text");
}

#[tokio::test]
async fn slide_less_document_still_exports_a_complete_bundle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let uploads = UploadStore::new(dir.path()).expect("store");

    let doc = presentation(r#"{ "title": "T", "slides": [] }"#);
    let bytes = export_presentation(&doc, &uploads).await.expect("export");
    let mut archive = open_archive(bytes);

    for name in ["presentation.json", "index.html", "media/"] {
        assert!(archive.by_name(name).is_ok(), "missing {name}");
    }
    let json = read_entry(&mut archive, "presentation.json");
    let exported: serde_json::Value = serde_json::from_slice(&json).expect("json");
    assert_eq!(exported["slides"].as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn index_html_embeds_the_rewritten_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let uploads = UploadStore::new(dir.path()).expect("store");
    uploads.write("abc.png", b"png").expect("write");

    let doc = presentation(
        r#"{
            "title": "T",
            "slides": [
                { "id": "1", "type": "image", "imageUrl": "/uploads/abc.png" }
            ]
        }"#,
    );

    let bytes = export_presentation(&doc, &uploads).await.expect("export");
    let mut archive = open_archive(bytes);

    let html = String::from_utf8(read_entry(&mut archive, "index.html")).expect("utf8");
    let start = html.find("atob('").expect("data marker") + "atob('".len();
    let end = html[start..].find('\'').expect("close quote") + start;
    use base64::Engine;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(&html[start..end])
        .expect("base64");
    let embedded: serde_json::Value = serde_json::from_slice(&decoded).expect("json");
    assert_eq!(embedded["slides"][0]["imageUrl"], "media/abc.png");
}
