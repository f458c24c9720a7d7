// Host-side tests for the pure link-classification helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod links {
    include!("../src/links.rs");
}

use links::*;

#[test]
fn relative_and_rooted_hrefs_are_internal() {
    assert!(is_internal_href("story.html"));
    assert!(is_internal_href("/gallery.html"));
    assert!(is_internal_href("./messages.html"));
    assert!(is_internal_href("../index.html"));
    assert!(is_internal_href("gallery.html?from=nav"));
}

#[test]
fn fragments_and_actions_are_not_internal() {
    assert!(!is_internal_href("#top"));
    assert!(!is_internal_href("#"));
    assert!(!is_internal_href("mailto:love@example.com"));
    assert!(!is_internal_href("tel:+15551234567"));
}

#[test]
fn absolute_and_protocol_relative_urls_are_not_internal() {
    assert!(!is_internal_href("https://example.com/page"));
    assert!(!is_internal_href("http://example.com"));
    assert!(!is_internal_href("ftp://example.com/file"));
    assert!(!is_internal_href("//cdn.example.com/script.js"));
}

#[test]
fn empty_href_is_not_internal() {
    assert!(!is_internal_href(""));
}

#[test]
fn page_name_takes_last_segment() {
    assert_eq!(page_name("/story.html"), "story.html");
    assert_eq!(page_name("/site/gallery.html"), "gallery.html");
    assert_eq!(page_name("index.html"), "index.html");
}

#[test]
fn page_name_defaults_to_index() {
    assert_eq!(page_name("/"), "index.html");
    assert_eq!(page_name(""), "index.html");
    assert_eq!(page_name("/site/"), "index.html");
}

#[test]
fn current_link_is_exact_match() {
    assert!(link_is_current("story.html", "story.html"));
    assert!(!link_is_current("story.html", "index.html"));
    assert!(!link_is_current("/story.html", "story.html"));
}
