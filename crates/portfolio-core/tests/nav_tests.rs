// Host-side tests for scroll-driven navigation rules.

use portfolio_core::nav::*;

fn sections() -> Vec<SectionBounds> {
    [("hero", 0.0, 700.0), ("about", 700.0, 600.0), ("skills", 1300.0, 800.0)]
        .into_iter()
        .map(|(id, offset_top, height)| SectionBounds {
            id: id.to_string(),
            offset_top,
            height,
        })
        .collect()
}

#[test]
fn navbar_shadow_appears_after_threshold() {
    assert_eq!(navbar_shadow(0.0), "none");
    assert_eq!(navbar_shadow(50.0), "none");
    assert_eq!(navbar_shadow(51.0), "0 4px 20px rgba(0, 0, 0, 0.08)");
}

#[test]
fn back_to_top_shows_past_500() {
    assert!(!back_to_top_visible(0.0));
    assert!(!back_to_top_visible(500.0));
    assert!(back_to_top_visible(500.5));
}

#[test]
fn active_section_uses_offset_window() {
    let s = sections();
    // hero covers (-100, 600]
    assert_eq!(active_section(0.0, &s), Some("hero"));
    assert_eq!(active_section(600.0, &s), Some("hero"));
    // about covers (600, 1200]
    assert_eq!(active_section(600.5, &s), Some("about"));
    assert_eq!(active_section(1200.0, &s), Some("about"));
    assert_eq!(active_section(1250.0, &s), Some("skills"));
    assert_eq!(active_section(5000.0, &s), None);
}

#[test]
fn overlapping_sections_prefer_the_later_one() {
    let s = vec![
        SectionBounds {
            id: "outer".into(),
            offset_top: 0.0,
            height: 2000.0,
        },
        SectionBounds {
            id: "inner".into(),
            offset_top: 500.0,
            height: 300.0,
        },
    ];
    assert_eq!(active_section(450.0, &s), Some("inner"));
    assert_eq!(active_section(300.0, &s), Some("outer"));
}

#[test]
fn anchor_id_ignores_bare_hash() {
    assert_eq!(anchor_id("#about"), Some("about"));
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("https://example.com"), None);
}

#[test]
fn anchor_scroll_accounts_for_navbar() {
    assert_eq!(anchor_scroll_top(1300.0, 72.0), 1228.0);
}

#[test]
fn mobile_menu_toggle_and_close() {
    let mut menu = MobileMenu::default();
    assert!(!menu.is_open());
    assert!(menu.toggle());
    assert!(!menu.toggle());
    menu.toggle();
    menu.close();
    assert!(!menu.is_open());
    assert!(MobileMenu::from_open(true).is_open());
}

#[test]
fn section_links_keep_the_first_link_per_section() {
    let hrefs = [
        Some("#about"),
        None,
        Some("https://example.com"),
        Some("#skills"),
        Some("#about"),
        Some("#"),
    ];
    let map = section_links(hrefs);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("about"), Some(&0));
    assert_eq!(map.get("skills"), Some(&3));
}
