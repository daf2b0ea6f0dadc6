// Host-side tests for DOM identifiers and selectors.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_bare() {
    for id in [
        NAVBAR_ID,
        MOBILE_TOGGLE_ID,
        NAV_MENU_ID,
        BACK_TO_TOP_ID,
        THEME_TOGGLE_ID,
    ] {
        assert!(!id.is_empty());
        assert!(
            !id.starts_with('#') && !id.starts_with('.'),
            "id {id:?} should not carry a selector prefix"
        );
    }
}

#[test]
fn class_selectors_are_prefixed() {
    for sel in [NAV_LINK_SELECTOR, HERO_SELECTOR, TYPING_SELECTOR] {
        assert!(sel.starts_with('.'), "{sel:?} is not a class selector");
    }
    assert!(!FLUID_CANVAS_CLASS.starts_with('.'));
}

#[test]
fn anchor_selector_matches_in_page_links_only() {
    assert_eq!(ANCHOR_SELECTOR, "a[href^=\"#\"]");
    assert_eq!(SECTION_SELECTOR, "section[id]");
}

#[test]
fn easter_egg_banner_starts_hidden_and_centered() {
    assert!(EASTER_EGG_STYLE.contains("scale(0)"));
    assert!(EASTER_EGG_STYLE.contains("translate(-50%, -50%)"));
    assert!(EASTER_EGG_SHOWN_TRANSFORM.ends_with("scale(1)"));
    assert!(EASTER_EGG_MESSAGE.contains("You found the secret!"));
}
