use crate::constants::TYPING_SELECTOR;
use crate::dom;
use portfolio_core::constants::{TYPING_INTERVAL_MS, TYPING_START_DELAY_MS};
use portfolio_core::Typewriter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = dom::query(document, TYPING_SELECTOR) else {
        return Ok(());
    };
    start(el, Typewriter::default());
    Ok(())
}

fn schedule(tick: &Closure<dyn FnMut()>, ms: i32) {
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            ms,
        );
    }
}

fn start(el: web::Element, mut writer: Typewriter) {
    // typed text is appended to whatever the markup already holds
    let prefix = el.text_content().unwrap_or_default();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if writer.next_char().is_none() {
            return;
        }
        el.set_text_content(Some(&format!("{}{}", prefix, writer.typed())));
        if writer.is_done() {
            return;
        }
        if let Some(t) = tick_clone.borrow().as_ref() {
            schedule(t, TYPING_INTERVAL_MS);
        }
    }) as Box<dyn FnMut()>));
    if let Some(t) = tick.borrow().as_ref() {
        schedule(t, TYPING_START_DELAY_MS);
    };
}
