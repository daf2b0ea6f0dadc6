use crate::constants::*;
use crate::dom;
use crate::events::scroll::{self, ScrollWiring};
use crate::events::{on_click_id, Listener};
use fnv::FnvHashMap;
use portfolio_core::nav::{self as rules, MobileMenu};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    wire_mobile_menu(document)?;
    wire_smooth_scroll(document)?;
    wire_back_to_top(document)?;

    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    let hrefs: Vec<Option<String>> = links.iter().map(|l| l.get_attribute("href")).collect();
    let link_for_section: FnvHashMap<String, usize> =
        rules::section_links(hrefs.iter().map(|h| h.as_deref()))
            .into_iter()
            .map(|(id, i)| (id.to_string(), i))
            .collect();
    let sections = dom::query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|s| s.dyn_into::<web::HtmlElement>().ok())
        .collect();

    scroll::wire_scroll(ScrollWiring {
        navbar: dom::html_element_by_id(document, NAVBAR_ID),
        sections,
        links,
        link_for_section,
        back_to_top: document.get_element_by_id(BACK_TO_TOP_ID),
    })
}

fn wire_mobile_menu(document: &web::Document) -> anyhow::Result<()> {
    let (Some(toggle), Some(menu)) = (
        document.get_element_by_id(MOBILE_TOGGLE_ID),
        document.get_element_by_id(NAV_MENU_ID),
    ) else {
        log::error!(
            "[nav] mobile menu elements not found (#{}, #{})",
            MOBILE_TOGGLE_ID,
            NAV_MENU_ID
        );
        return Ok(());
    };

    let apply = {
        let toggle = toggle.clone();
        let menu = menu.clone();
        move |state: MobileMenu| {
            dom::set_class(&toggle, ACTIVE_CLASS, state.is_open());
            dom::set_class(&menu, ACTIVE_CLASS, state.is_open());
        }
    };

    let menu_for_click = menu.clone();
    let apply_click = apply.clone();
    Listener::new(&toggle, "click", move |ev: web::Event| {
        ev.prevent_default();
        let mut state = MobileMenu::from_open(menu_for_click.class_list().contains(ACTIVE_CLASS));
        state.toggle();
        log::debug!("[nav] menu open={}", state.is_open());
        apply_click(state);
    })?
    .forget();

    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let apply_link = apply.clone();
        Listener::new(&link, "click", move |_| {
            let mut state = MobileMenu::from_open(true);
            state.close();
            apply_link(state);
        })?
        .forget();
    }
    Ok(())
}

fn wire_smooth_scroll(document: &web::Document) -> anyhow::Result<()> {
    for link in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        Listener::new(&link, "click", move |ev: web::Event| {
            ev.prevent_default();
            let Some(id) = rules::anchor_id(&href) else {
                return;
            };
            let Some(target) = dom::html_element_by_id(&doc, id) else {
                return;
            };
            let nav_height = dom::html_element_by_id(&doc, NAVBAR_ID)
                .map(|n| n.offset_height() as f64)
                .unwrap_or(0.0);
            dom::smooth_scroll_to(rules::anchor_scroll_top(
                target.offset_top() as f64,
                nav_height,
            ));
        })?
        .forget();
    }
    Ok(())
}

fn wire_back_to_top(document: &web::Document) -> anyhow::Result<()> {
    on_click_id(document, BACK_TO_TOP_ID, |_| dom::smooth_scroll_to(0.0))?;
    Ok(())
}
