use crate::constants::{THEME_ICON_SELECTOR, THEME_TOGGLE_ID};
use crate::dom;
use crate::events::Listener;
use portfolio_core::{Theme, ThemeState, ThemeStore, DARK_CLASS, THEME_STORAGE_KEY};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// `window.localStorage`, when the browser lets us have it.
pub struct LocalStorage {
    storage: Option<web::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[theme] localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }
}

impl ThemeStore for LocalStorage {
    fn load(&self) -> Option<String> {
        self.storage
            .as_ref()?
            .get_item(THEME_STORAGE_KEY)
            .ok()
            .flatten()
    }

    fn save(&mut self, value: &str) -> bool {
        match &self.storage {
            Some(s) => s.set_item(THEME_STORAGE_KEY, value).is_ok(),
            None => false,
        }
    }
}

fn apply(root: &web::Element, icon: Option<&web::Element>, theme: Theme) {
    dom::set_class(root, DARK_CLASS, theme == Theme::Dark);
    if let Some(icon) = icon {
        let cl = icon.class_list();
        _ = cl.remove_1(theme.toggled().icon_class());
        _ = cl.add_1(theme.icon_class());
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        return Ok(());
    };
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;
    let icon = toggle.query_selector(THEME_ICON_SELECTOR).ok().flatten();

    let state = ThemeState::load(LocalStorage::open());
    apply(&root, icon.as_ref(), state.current());
    log::debug!("[theme] initial theme={}", state.current());

    let state = Rc::new(RefCell::new(state));
    Listener::new(&toggle, "click", move |_| {
        let theme = state.borrow_mut().toggle();
        apply(&root, icon.as_ref(), theme);
    })?
    .forget();
    Ok(())
}
