//! Shared test utilities for inspecting rendered HTML.
//!
//! Maud output is deterministic, so tests can locate elements by their exact
//! opening tag instead of pulling in a full HTML parser.
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let html = render_order_confirmation(&id, &config, "").into_string();
//! assert_eq!(element_text(&html, "span", "order-badge"), Some("ORD-1".into()));
//! assert_eq!(link_targets(&html), vec!["/catalogue", "/"]);
//! ```

use std::path::Path;

// =========================================================================
// Element lookups
// =========================================================================

/// Unescaped text content of the first `<tag class="class" ...>` element.
///
/// Only meant for leaf elements: the content runs up to the first closing
/// `</tag>`. Returns `None` when no such element exists.
pub fn element_text(html: &str, tag: &str, class: &str) -> Option<String> {
    let open = format!(r#"<{tag} class="{class}""#);
    let start = html.find(&open)?;
    let after_open = start + html[start..].find('>')? + 1;
    let close = format!("</{tag}>");
    let end = after_open + html[after_open..].find(&close)?;
    Some(unescape(&html[after_open..end]))
}

/// Number of elements opened with `<tag class="class"`.
pub fn count_elements(html: &str, tag: &str, class: &str) -> usize {
    html.matches(&format!(r#"<{tag} class="{class}""#)).count()
}

/// `href` values of every `<a>` element, in document order.
pub fn link_targets(html: &str) -> Vec<String> {
    html.match_indices("<a ")
        .filter_map(|(i, _)| {
            let tag = &html[i..i + html[i..].find('>')?];
            let href_start = tag.find(r#"href=""#)? + 6;
            let href_len = tag[href_start..].find('"')?;
            Some(unescape(&tag[href_start..href_start + href_len]))
        })
        .collect()
}

/// Reverse maud's text escaping.
pub fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

// =========================================================================
// Filesystem
// =========================================================================

/// Read a generated file, panicking with the path on failure.
pub fn read_output(dir: &Path, rel: &str) -> String {
    let path = dir.join(rel);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_text_finds_leaf() {
        let html = r#"<div><span class="badge">A &amp; B</span></div>"#;
        assert_eq!(element_text(html, "span", "badge"), Some("A & B".into()));
    }

    #[test]
    fn element_text_missing() {
        assert_eq!(element_text("<p>x</p>", "span", "badge"), None);
    }

    #[test]
    fn link_targets_in_order() {
        let html = r#"<a href="/x" class="a">1</a><p></p><a class="b" href="/">2</a>"#;
        assert_eq!(link_targets(html), vec!["/x", "/"]);
    }
}
