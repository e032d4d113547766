//! Tests for [`MimeBag`].

use super::*;

#[test]
fn test_set_text_replaces_no_break_space_only() {
    let mut bag = MimeBag::new();
    bag.set_text("a\u{a0}b\u{a0}\u{a0}c\td");

    assert_eq!(bag.text(), "a b  c\td");
    assert_eq!(bag.data("text/plain"), Some("a b  c\td".as_bytes()));
}

#[test]
fn test_formats_keep_insertion_order_without_duplicates() {
    let mut bag = MimeBag::new();
    bag.set_html("<b>x</b>");
    bag.set_text("x");
    bag.set_data("application/x-custom", vec![1, 2]);
    bag.set_text("y");

    let formats: Vec<String> = bag.formats().into_iter().map(|m| m.0).collect();
    assert_eq!(formats, vec!["text/html", "text/plain", "application/x-custom"]);
    assert_eq!(bag.text(), "y");
}

#[test]
fn test_removing_last_format_empties_bag() {
    let mut bag = MimeBag::new();
    bag.set_text("x");

    assert!(bag.remove_format("text/plain"));
    assert!(bag.is_empty());
    assert!(bag.formats().is_empty());
    assert!(!bag.remove_format("text/plain"));
}

#[test]
fn test_family_lookup_matches_parameterised_keys() {
    let mut bag = MimeBag::new();
    bag.set_data("text/plain;charset=utf-8", b"hi".to_vec());
    bag.set_data("text/html;charset=utf-8", b"<p>hi</p>".to_vec());

    assert!(bag.has_text());
    assert!(bag.has_html());
    assert!(bag.has_format("text/plain"));
    assert_eq!(bag.text(), "hi");
    assert_eq!(bag.html(), "<p>hi</p>");
    assert_eq!(bag.data("text/html"), Some("<p>hi</p>".as_bytes()));
}

#[test]
fn test_data_is_exact_for_other_types() {
    let mut bag = MimeBag::new();
    bag.set_data("application/json", b"{}".to_vec());

    assert_eq!(bag.data("application/json"), Some(&b"{}"[..]));
    assert_eq!(bag.data("application/json;charset=utf-8"), None);
}

#[test]
fn test_set_urls_fills_missing_text() {
    let mut bag = MimeBag::new();
    bag.set_urls(&["https://example.org/", "file:///tmp/a"]);

    assert_eq!(bag.urls(), vec!["https://example.org/", "file:///tmp/a"]);
    assert_eq!(bag.text(), "https://example.org/");
}

#[test]
fn test_set_urls_keeps_existing_text() {
    let mut bag = MimeBag::new();
    bag.set_text("caption");
    bag.set_urls(&["https://example.org/"]);

    assert_eq!(bag.text(), "caption");
}

#[test]
fn test_urls_skip_comments_and_blank_lines() {
    let mut bag = MimeBag::new();
    bag.set_data(
        "text/uri-list",
        b"# dropped from a file manager\r\nfile:///tmp/a\r\n\r\nhttps://x\n".to_vec(),
    );

    assert_eq!(bag.urls(), vec!["file:///tmp/a", "https://x"]);
}

#[test]
fn test_bag_serializes_with_entries() {
    let mut bag = MimeBag::new();
    bag.set_text("x");

    let json = serde_json::to_value(&bag).unwrap();
    assert_eq!(json["entries"][0]["mime"], "text/plain");
}
