//! Markdown to HTML conversion via pulldown-cmark.

use pulldown_cmark::{Options, Parser, html};

/// Renders a markdown document as HTML.
///
/// Tables, strikethrough, task lists and footnotes are enabled on top of
/// CommonMark; fenced code blocks are part of the core syntax.
pub fn to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, parser);
    out
}
