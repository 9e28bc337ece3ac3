//! Allow-list HTML sanitizer for post previews.
//!
//! Preview content comes straight from the author's editor and is echoed
//! back as markup, so it must never reach a page unsanitized. Only basic
//! formatting, links and images survive; scripts, event handlers and
//! everything else is stripped.

use std::collections::HashSet;

use ammonia::Builder;
use once_cell::sync::Lazy;

static PREVIEW_CLEANER: Lazy<Builder<'static>> = Lazy::new(|| {
    let mut builder = Builder::default();
    builder
        .tags(HashSet::from([
            "a", "blockquote", "br", "code", "em", "h1", "h2", "h3", "h4", "hr", "img", "li",
            "ol", "p", "pre", "strong", "ul",
        ]))
        .link_rel(Some("noopener noreferrer"));
    builder
});

/// Sanitize author-supplied content for the preview pane.
pub fn clean_preview(content: &str) -> String {
    PREVIEW_CLEANER.clean(content).to_string()
}
