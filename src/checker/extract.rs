// src/checker/extract.rs
// =============================================================================
// This module finds URL-like substrings in a plain text document.
//
// Unlike Markdown or HTML there's no structure to lean on, so we use one
// (admittedly hairy) regular expression. It matches three kinds of starts:
// - an explicit scheme:           http://... or https://...
// - a "www" host:                 www.example.com, www2.example.com
// - a bare host followed by '/':  example.org/path
//
// ...then keeps going until whitespace, allowing balanced parentheses
// (think Wikipedia links) and refusing to end on trailing punctuation.
//
// We work on bytes (regex::bytes) because the document is arbitrary bytes
// and may not be valid UTF-8. Unicode mode is off: \s and \b are ASCII
// only, and any other byte (non-breaking spaces, invalid UTF-8...) can be
// part of a URL.
//
// A bare host needs at least two characters after its '/', so
// "example.org/a" is not a URL but "example.org/ab" is.
// =============================================================================

use regex::bytes::Regex;
use std::sync::OnceLock;

const URL_PATTERN: &str = r#"(?i-u)\b((?:https?://|www\d{0,3}[.]|[a-z0-9.\-]+[.][a-z]{2,4}/)(?:[^\s()<>]+|\(([^\s()<>]+|(\([^\s()<>]+\)))*\))+(?:\(([^\s()<>]+|(\([^\s()<>]+\)))*\)|[^\s!()\[\]{};:'".,<>?]))"#;

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The pattern is a constant, so failing to compile it is a programmer error
    RE.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern must compile"))
}

// Extracts every URL-like substring from a document
//
// Returns the raw matches in document order. Duplicates are kept: if a URL
// appears twice, it gets checked twice.
//
// Example:
//   b"See http://ok.test and example.org/path."
//   -> [b"http://ok.test", b"example.org/path"]
pub fn extract_urls(document: &[u8]) -> Vec<Vec<u8>> {
    url_regex()
        .find_iter(document)
        .map(|m| m.as_bytes().to_vec())
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why OnceLock?
//    - Compiling a regex is slow compared to running it
//    - OnceLock compiles it the first time it's needed and keeps it around
//
// 2. Why Vec<Vec<u8>> and not Vec<String>?
//    - The document might not be valid UTF-8 (it's "just a file")
//    - We hand back raw bytes and let normalize.rs decide what's valid
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        extract_urls(text.as_bytes())
            .into_iter()
            .map(|url| String::from_utf8(url).unwrap())
            .collect()
    }

    #[test]
    fn test_extract_schemed_links() {
        let links = extract("See http://ok.test and http://down.test");
        assert_eq!(links, vec!["http://ok.test", "http://down.test"]);
    }

    #[test]
    fn test_extract_schemeless_link() {
        let links = extract("Visit example.org/path");
        assert_eq!(links, vec!["example.org/path"]);
    }

    #[test]
    fn test_bare_host_needs_two_chars_after_slash() {
        assert!(extract("see example.org/a here").is_empty());
        assert_eq!(extract("see example.org/ab here"), vec!["example.org/ab"]);
    }

    #[test]
    fn test_extract_www_link() {
        let links = extract("Homepage: www.rust-lang.org today");
        assert_eq!(links, vec!["www.rust-lang.org"]);
    }

    #[test]
    fn test_trailing_punctuation_is_dropped() {
        let links = extract("Go to https://example.com/docs. Or (https://example.com/faq)!");
        assert_eq!(
            links,
            vec!["https://example.com/docs", "https://example.com/faq"]
        );
    }

    #[test]
    fn test_balanced_parentheses_are_kept() {
        let links = extract("https://en.wikipedia.org/wiki/Rust_(programming_language) is long");
        assert_eq!(
            links,
            vec!["https://en.wikipedia.org/wiki/Rust_(programming_language)"]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let links = extract("http://a.test http://a.test");
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_no_urls() {
        assert!(extract("Just some plain prose, nothing to see here.").is_empty());
    }

    #[test]
    fn test_invalid_utf8_does_not_stop_extraction() {
        let mut document = b"\xff\xfe garbage then ".to_vec();
        document.extend_from_slice(b"https://example.com/ok");
        let links = extract_urls(&document);
        assert_eq!(links, vec![b"https://example.com/ok".to_vec()]);
    }

    #[test]
    fn test_only_ascii_whitespace_ends_a_url() {
        let links = extract("http://a.test/x\u{a0}y next");
        assert_eq!(links, vec!["http://a.test/x\u{a0}y"]);
    }

    #[test]
    fn test_invalid_utf8_inside_url_is_kept() {
        let links = extract_urls(b"http://a.test/x\xffy next");
        assert_eq!(links, vec![b"http://a.test/x\xffy".to_vec()]);
    }
}
