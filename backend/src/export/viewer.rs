//! # Viewer Shell Templating
//!
//! Builds the document-specific files of the bundle: `index.html` (embedding
//! the rewritten presentation as base64-encoded JSON with a plain-JSON
//! fallback) and `README.md`. The stylesheet and the player script are
//! static assets embedded in the binary: they are identical for every
//! export and only the embedded JSON varies.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use common::model::presentation::Presentation;
use include_dir::{include_dir, Dir};

static VIEWER_ASSETS: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets/viewer");

pub fn stylesheet() -> &'static [u8] {
    VIEWER_ASSETS
        .get_file("styles.css")
        .expect("styles.css embedded at build time")
        .contents()
}

pub fn player_script() -> &'static [u8] {
    VIEWER_ASSETS
        .get_file("presentation.js")
        .expect("presentation.js embedded at build time")
        .contents()
}

/// Renders the viewer shell around the (already rewritten) document. The
/// primary data path is base64 so the JSON can never terminate the script
/// block; the fallback embeds it directly with `<`/`>` escaped.
pub fn render_index(presentation: &Presentation) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(presentation)?;
    let encoded = BASE64.encode(json.as_bytes());
    let fallback = json.replace('<', "\\u003c").replace('>', "\\u003e");
    let title = escape_html(if presentation.title.is_empty() {
        "Presentation"
    } else {
        &presentation.title
    });

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <div id="presentation-container">
        <div id="presentation" class="presentation">
            <div id="slides-container"></div>
        </div>

        <div id="controls" class="controls">
            <button id="prev-btn" class="control-btn">&lsaquo;</button>
            <button id="play-btn" class="control-btn">&#9654;</button>
            <button id="next-btn" class="control-btn">&rsaquo;</button>
            <div id="slide-indicator" class="slide-indicator"></div>
        </div>

        <div id="fullscreen-btn" class="fullscreen-btn">&#x26F6;</div>
    </div>

    <script>
        try {{
            window.presentationData = JSON.parse(atob('{encoded}'));
        }} catch (e) {{
            console.error('Failed to decode embedded data, using fallback:', e);
            window.presentationData = {fallback};
        }}
    </script>
    <script src="presentation.js"></script>
</body>
</html>"#
    ))
}

/// Usage instructions shipped with the bundle, listing the media files by
/// their archived names.
pub fn render_readme(presentation: &Presentation, media_files: &[String]) -> String {
    let title = if presentation.title.is_empty() {
        "Presentation"
    } else {
        &presentation.title
    };

    let media_summary = if media_files.is_empty() {
        String::new()
    } else {
        format!(
            "- `media/` folder - Contains {} media file(s)\n",
            media_files.len()
        )
    };
    let media_list = if media_files.is_empty() {
        "No media files included in this presentation.".to_string()
    } else {
        media_files
            .iter()
            .map(|name| format!("- `media/{name}`"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "# {title}\n\
        \n\
        This is a standalone presentation that can run without an internet connection.\n\
        \n\
        ## How to Use\n\
        \n\
        1. **Open the presentation**: Double-click on `index.html` to open the presentation in your web browser\n\
        2. **Navigate**: Use the arrow keys, spacebar, or click the navigation buttons\n\
        3. **Fullscreen**: Click the fullscreen button for a better viewing experience\n\
        4. **Autoplay**: Click the play button to automatically advance through slides\n\
        \n\
        ## Keyboard Shortcuts\n\
        \n\
        - **Left Arrow / Up Arrow**: Previous slide\n\
        - **Right Arrow / Down Arrow / Spacebar**: Next slide\n\
        - **Escape**: Exit fullscreen\n\
        \n\
        ## Files Included\n\
        \n\
        - `index.html` - Main presentation file\n\
        - `styles.css` - Presentation styling\n\
        - `presentation.js` - Presentation logic\n\
        - `presentation.json` - Presentation data\n\
        {media_summary}\
        \n\
        ## Media Files\n\
        \n\
        {media_list}\n\
        \n\
        ## Requirements\n\
        \n\
        - Modern web browser (Chrome, Firefox, Safari, Edge)\n\
        - No internet connection required\n\
        \n\
        ## Troubleshooting\n\
        \n\
        If media files don't load:\n\
        1. Make sure all files are extracted from the ZIP\n\
        2. Check that the `media` folder contains the required files\n\
        3. Try opening `index.html` in a different browser\n\
        \n\
        ---\n\
        Generated on: {}\n",
        Utc::now().to_rfc3339()
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presentation(title: &str) -> Presentation {
        serde_json::from_str(&format!(
            r#"{{ "title": "{title}", "slides": [ {{ "id": "1", "type": "title" }} ] }}"#
        ))
        .expect("presentation json")
    }

    #[test]
    fn index_embeds_decodable_document() {
        let doc = presentation("My Deck");
        let html = render_index(&doc).expect("render");
        assert!(html.contains("<title>My Deck</title>"));

        let start = html.find("atob('").expect("marker") + "atob('".len();
        let end = html[start..].find('\'').expect("close") + start;
        let decoded = BASE64.decode(&html[start..end]).expect("base64");
        let embedded: Presentation = serde_json::from_slice(&decoded).expect("json");
        assert_eq!(embedded, doc);
    }

    #[test]
    fn index_escapes_title_and_fallback_json() {
        let doc = presentation("A <b> deck");
        let html = render_index(&doc).expect("render");
        assert!(html.contains("<title>A &lt;b&gt; deck</title>"));
        // The fallback must not contain a literal closing tag sequence.
        assert!(!html.contains(r#""title":"A <b> deck""#));
    }

    #[test]
    fn readme_lists_archived_media_names() {
        let doc = presentation("T");
        let files = vec!["abc.png".to_string(), "clip-1a2b3c4d-99.mp4".to_string()];
        let readme = render_readme(&doc, &files);
        assert!(readme.contains("- `media/abc.png`"));
        assert!(readme.contains("Contains 2 media file(s)"));

        let empty = render_readme(&doc, &[]);
        assert!(empty.contains("No media files included"));
    }

    #[test]
    fn static_assets_are_embedded() {
        assert!(!stylesheet().is_empty());
        assert!(!player_script().is_empty());
    }
}
