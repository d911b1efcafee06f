//! JSON to HTML table conversion.
//!
//! Mirrors the layout conventions of the usual JSON-to-HTML converters:
//! objects become two-column key/value tables, uniform arrays of objects
//! become one table with a header row, and everything else degrades to
//! lists or escaped text.

use serde_json::Value;

use crate::render::escape_html;

/// Renders a JSON value as nested HTML tables.
pub fn to_html(value: &Value) -> String {
    let mut out = String::new();
    render(value, &mut out);
    out
}

fn render(value: &Value, out: &mut String) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&escape_html(s)),
        Value::Object(map) => {
            out.push_str("<table><tbody>");
            for (key, val) in map {
                out.push_str("<tr><th>");
                out.push_str(&escape_html(key));
                out.push_str("</th><td>");
                render(val, out);
                out.push_str("</td></tr>");
            }
            out.push_str("</tbody></table>");
        }
        Value::Array(items) => render_array(items, out),
    }
}

fn render_array(items: &[Value], out: &mut String) {
    if let Some(keys) = uniform_object_keys(items) {
        out.push_str("<table><thead><tr>");
        for key in &keys {
            out.push_str("<th>");
            out.push_str(&escape_html(key));
            out.push_str("</th>");
        }
        out.push_str("</tr></thead><tbody>");
        for item in items {
            out.push_str("<tr>");
            for key in &keys {
                out.push_str("<td>");
                if let Some(val) = item.get(key.as_str()) {
                    render(val, out);
                }
                out.push_str("</td>");
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table>");
        return;
    }

    out.push_str("<ul>");
    for item in items {
        out.push_str("<li>");
        render(item, out);
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

/// Returns the shared key list when every element is an object with the
/// same keys, which is the shape that reads best as a single table.
fn uniform_object_keys(items: &[Value]) -> Option<Vec<String>> {
    let first = items.first()?.as_object()?;
    let keys: Vec<String> = first.keys().cloned().collect();
    for item in items {
        let obj = item.as_object()?;
        if obj.len() != keys.len() || !keys.iter().all(|k| obj.contains_key(k)) {
            return None;
        }
    }
    Some(keys)
}
