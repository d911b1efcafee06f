//! # Source Rendering
//!
//! Converts the inputs people actually keep next to their experiments into
//! the HTML the ELN's rich-text fields accept:
//!
//! * Markdown notes go through [`markdown::to_html`].
//! * JSON metadata is rendered as nested tables by [`json::to_html`].
//! * Anything else is embedded verbatim, matching how the ELN treats raw
//!   field content.

pub mod json;
pub mod markdown;

use std::fs;
use std::path::Path;

use anyhow::Context;

/// Converts a source file to HTML, dispatching on its extension.
pub fn file_to_html(path: &Path) -> anyhow::Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read source file {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    match ext {
        "md" | "markdown" => Ok(markdown::to_html(&text)),
        "json" => {
            let value: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("{} is not valid JSON", path.display()))?;
            Ok(json::to_html(&value))
        }
        _ => Ok(text),
    }
}

/// Minimal HTML escaping for text placed inside element bodies.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
