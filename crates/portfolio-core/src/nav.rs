//! Scroll-position rules for the navbar, section highlighting, anchors and
//! the back-to-top button.

use crate::constants::{BACK_TO_TOP_SCROLL_Y, NAV_SHADOW, NAV_SHADOW_SCROLL_Y, SECTION_TOP_OFFSET};
use fnv::FnvHashMap;

#[inline]
pub fn navbar_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > NAV_SHADOW_SCROLL_Y {
        NAV_SHADOW
    } else {
        "none"
    }
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_SCROLL_Y
}

/// Layout of one `section[id]` as measured from the document.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, scroll_y: f64) -> bool {
        let top = self.offset_top - SECTION_TOP_OFFSET;
        scroll_y > top && scroll_y <= top + self.height
    }
}

/// Section whose nav link should be highlighted. Later sections win when
/// several ranges overlap the scroll position.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(scroll_y))
        .map(|s| s.id.as_str())
}

/// Element id an in-page link points at, or `None` for a bare `#` / non-anchor.
pub fn anchor_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Map each section id to the index of the first nav link whose `href`
/// points at it. Links without an in-page anchor are skipped.
pub fn section_links<'a, I>(hrefs: I) -> FnvHashMap<&'a str, usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut map = FnvHashMap::default();
    for (i, href) in hrefs.into_iter().enumerate() {
        if let Some(id) = href.and_then(anchor_id) {
            map.entry(id).or_insert(i);
        }
    }
    map
}

/// Scroll offset that lands `target_offset_top` just below a fixed navbar.
#[inline]
pub fn anchor_scroll_top(target_offset_top: f64, navbar_height: f64) -> f64 {
    target_offset_top - navbar_height
}

/// Open/closed state of the collapsible mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn from_open(open: bool) -> Self {
        Self { open }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
