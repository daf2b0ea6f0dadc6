use super::Listener;
use crate::constants::{ACTIVE_CLASS, VISIBLE_CLASS};
use crate::dom;
use fnv::FnvHashMap;
use portfolio_core::nav::{self, SectionBounds};
use web_sys as web;

/// Elements the window scroll handler updates. Any of them may be missing.
pub struct ScrollWiring {
    pub navbar: Option<web::HtmlElement>,
    pub sections: Vec<web::HtmlElement>,
    /// Every `.nav-link`, in document order.
    pub links: Vec<web::Element>,
    /// Section id to the index in `links` of the first link pointing at it.
    pub link_for_section: FnvHashMap<String, usize>,
    pub back_to_top: Option<web::Element>,
}

impl ScrollWiring {
    fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|s| SectionBounds {
                id: s.id(),
                offset_top: s.offset_top() as f64,
                height: s.offset_height() as f64,
            })
            .collect()
    }

    fn on_scroll(&self, scroll_y: f64) {
        if let Some(navbar) = &self.navbar {
            _ = navbar
                .style()
                .set_property("box-shadow", nav::navbar_shadow(scroll_y));
        }

        let bounds = self.section_bounds();
        if let Some(id) = nav::active_section(scroll_y, &bounds) {
            for link in &self.links {
                dom::set_class(link, ACTIVE_CLASS, false);
            }
            if let Some(link) = self
                .link_for_section
                .get(id)
                .and_then(|&i| self.links.get(i))
            {
                dom::set_class(link, ACTIVE_CLASS, true);
            }
        }

        if let Some(btn) = &self.back_to_top {
            dom::set_class(btn, VISIBLE_CLASS, nav::back_to_top_visible(scroll_y));
        }
    }
}

pub fn wire_scroll(w: ScrollWiring) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    Listener::new(&window, "scroll", move |_| w.on_scroll(dom::scroll_y()))?.forget();
    Ok(())
}
