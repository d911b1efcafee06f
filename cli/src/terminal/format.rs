use colored::*;
use eln_common::document::DocumentInfo;

use crate::terminal::colors;

type Detail = (String, ColoredString);

/// Key/value rows for one document, ready for the tree printer.
pub fn document_details(doc: &DocumentInfo) -> Vec<Detail> {
    let mut details: Vec<Detail> = Vec::new();

    details.push(("ID".to_string(), doc.id.to_string().color(colors::ACCENT)));

    if let Some(global_id) = &doc.global_id {
        details.push(("Global".to_string(), global_id.clone().color(colors::ACCENT)));
    }

    if let Some(tags) = doc.tags.as_deref().filter(|t| !t.is_empty()) {
        details.push(("Tags".to_string(), tags.replace(',', ", ").normal()));
    }

    if let Some(created) = &doc.created {
        details.push(("Created".to_string(), short_date(created).normal()));
    }

    details
}

/// Trims an ISO-8601 timestamp like `2025-01-16T09:00:00.000Z` down to
/// `2025-01-16 09:00`. Anything unexpected is shown unchanged.
pub fn short_date(timestamp: &str) -> String {
    match timestamp.split_once('T') {
        Some((date, time)) if time.len() >= 5 => format!("{} {}", date, &time[..5]),
        _ => timestamp.to_string(),
    }
}

/// `1_204` -> `1.2 kB`, `3_500_000` -> `3.5 MB`.
pub fn human_size(bytes: u64) -> String {
    const UNITS: &[(f64, &str)] = &[(1e9, "GB"), (1e6, "MB"), (1e3, "kB")];
    for (scale, unit) in UNITS {
        if bytes as f64 >= *scale {
            return format!("{:.1} {}", bytes as f64 / scale, unit);
        }
    }
    format!("{} B", bytes)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
