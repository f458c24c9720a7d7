// Host-side tests for the pure lightbox state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod gallery {
    include!("../src/gallery.rs");
}

use gallery::*;

#[test]
fn starts_closed() {
    let s = LightboxState::new(5);
    assert!(!s.is_open());
    assert_eq!(s.current(), None);
}

#[test]
fn open_shows_requested_index() {
    let mut s = LightboxState::new(5);
    assert!(s.open(3));
    assert_eq!(s.current(), Some(3));
    assert!(s.is_open());
}

#[test]
fn open_rejects_out_of_range() {
    let mut s = LightboxState::new(3);
    assert!(!s.open(3));
    assert!(!s.is_open());

    let mut empty = LightboxState::new(0);
    assert!(!empty.open(0));
    assert!(!empty.is_open());
}

#[test]
fn next_and_prev_wrap_modulo_length() {
    let mut s = LightboxState::new(4);
    s.open(2);
    s.next();
    assert_eq!(s.current(), Some(3));
    s.next();
    assert_eq!(s.current(), Some(0)); // wrap forward

    s.prev();
    assert_eq!(s.current(), Some(3)); // wrap backward from 0
}

#[test]
fn prev_from_zero_lands_on_last() {
    let mut s = LightboxState::new(7);
    s.open(0);
    s.prev();
    assert_eq!(s.current(), Some(6));
}

#[test]
fn single_item_gallery_wraps_to_itself() {
    let mut s = LightboxState::new(1);
    s.open(0);
    s.next();
    assert_eq!(s.current(), Some(0));
    s.prev();
    assert_eq!(s.current(), Some(0));
}

#[test]
fn navigation_is_noop_while_closed() {
    let mut s = LightboxState::new(4);
    s.next();
    s.prev();
    s.close(); // escape while closed: no observable effect
    assert!(!s.is_open());
    assert_eq!(s.current(), None);
}

#[test]
fn three_item_walkthrough_wraps() {
    // [A, B, C]: open A, arrow right through B and C, then wrap back to A.
    let mut s = LightboxState::new(3);
    s.open(0);
    assert_eq!(s.current(), Some(0));
    s.apply(LightboxAction::Next);
    assert_eq!(s.current(), Some(1));
    s.apply(LightboxAction::Next);
    assert_eq!(s.current(), Some(2));
    s.apply(LightboxAction::Next);
    assert_eq!(s.current(), Some(0));
}

#[test]
fn escape_closes_and_reopens_indefinitely() {
    let mut s = LightboxState::new(2);
    for _ in 0..3 {
        s.open(1);
        assert!(s.is_open());
        s.apply(LightboxAction::Close);
        assert!(!s.is_open());
    }
}

#[test]
fn key_mapping() {
    assert_eq!(action_for_key("Escape"), Some(LightboxAction::Close));
    assert_eq!(action_for_key("ArrowLeft"), Some(LightboxAction::Prev));
    assert_eq!(action_for_key("ArrowRight"), Some(LightboxAction::Next));
    assert_eq!(action_for_key("ArrowUp"), None);
    assert_eq!(action_for_key("Enter"), None);
    assert_eq!(action_for_key(""), None);
}

#[test]
fn gallery_item_caption_defaults_to_empty() {
    // The DOM snapshot stores a declared caption or the empty string.
    let with = GalleryItem {
        src: "a.jpg".into(),
        caption: "Our first trip".into(),
    };
    let without = GalleryItem {
        src: "b.jpg".into(),
        caption: String::new(),
    };
    assert_eq!(with.caption, "Our first trip");
    assert_eq!(without.caption, "");
}
