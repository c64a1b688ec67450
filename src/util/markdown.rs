//! Markdown rendering for long-text entry fields.
//!
//! Contentful `Text` fields are conventionally markdown; entries are
//! third-party content, so raw HTML events are dropped before rendering.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{html, Event, Options, Parser};

/// Render a markdown field value to HTML with raw HTML stripped.
#[must_use]
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
