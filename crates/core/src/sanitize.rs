//! Input sanitization for user-supplied text.
//!
//! Uses ammonia with an empty tag allow-list: all markup is stripped and
//! script/style bodies are dropped entirely, leaving only text content.

use std::collections::HashSet;

use ammonia::Builder;

/// Strip HTML/script markup from `text`.
///
/// Pure and idempotent: sanitizing already-sanitized text yields the same
/// text.
pub fn sanitize(text: &str) -> String {
    Builder::default()
        .tags(HashSet::new())
        .clean(text)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_tags_and_their_content() {
        assert_eq!(sanitize("<script>alert(1)</script>"), "");
        assert_eq!(sanitize("Dune<script>alert(1)</script>"), "Dune");
    }

    #[test]
    fn strips_inline_markup_but_keeps_text() {
        assert_eq!(sanitize("A <b>classic</b> novel"), "A classic novel");
        assert_eq!(sanitize("<img src=x onerror=alert(1)>ok"), "ok");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(sanitize("Children of Dune"), "Children of Dune");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "plain text",
            "<script>alert(1)</script>",
            "a < b && b > c",
            "<div><p>nested</p></div>",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }
}
