#![cfg(target_arch = "wasm32")]
use portfolio_core::FieldConfig;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod ambient;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod nav;
mod overlay;
mod render;
mod reveal;
mod theme;
mod typing;

thread_local! {
    static AMBIENT: RefCell<Option<ambient::AmbientField>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("{}", constants::WELCOME_BANNER);

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let mut pending = true;
        events::Listener::new(&document, "DOMContentLoaded", move |_| {
            if std::mem::take(&mut pending) {
                init();
            }
        })
        .map_err(|e| JsValue::from_str(&format!("{:?}", e)))?
        .forget();
    } else {
        init();
    }
    Ok(())
}

fn init() {
    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return;
    };

    // features are independent; one failing must not take the others down
    let results = [
        ("nav", nav::init(&document)),
        ("theme", theme::init(&document)),
        ("reveal", reveal::init(&document)),
        ("typing", typing::init(&document)),
        ("easter-egg", events::keyboard::wire_easter_egg(&document)),
        ("field", mount_hero_field(&document).map(|_| ())),
    ];
    for (name, result) in results {
        if let Err(e) = result {
            log::error!("[{}] init error: {:?}", name, e);
        }
    }
}

/// Mount and start the field in `.hero`, replacing any field already mounted.
/// Returns whether a host was found.
fn mount_hero_field(document: &web::Document) -> anyhow::Result<bool> {
    let previous = AMBIENT.with(|slot| slot.borrow_mut().take());
    drop(previous);
    let Some(mut field) =
        ambient::AmbientField::mount(document, constants::HERO_SELECTOR, FieldConfig::default())?
    else {
        return Ok(false);
    };
    field.start()?;
    AMBIENT.with(|slot| *slot.borrow_mut() = Some(field));
    Ok(true)
}

/// Mount the hero field again, e.g. after the page swapped its `.hero` markup.
#[doc(hidden)]
#[wasm_bindgen]
pub fn mount_ambient_field() -> Result<bool, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    mount_hero_field(&document).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Halt the hero field: cancels its frame loop and detaches its listeners.
#[wasm_bindgen]
pub fn stop_ambient_field() {
    AMBIENT.with(|slot| {
        if let Some(field) = slot.borrow_mut().as_mut() {
            field.stop();
        }
    });
}

/// Resume a stopped hero field.
#[wasm_bindgen]
pub fn resume_ambient_field() -> Result<(), JsValue> {
    AMBIENT.with(|slot| match slot.borrow_mut().as_mut() {
        Some(field) => field
            .start()
            .map_err(|e| JsValue::from_str(&format!("{:?}", e))),
        None => Ok(()),
    })
}

/// Stop the hero field and remove its canvas from the page.
#[wasm_bindgen]
pub fn unmount_ambient_field() {
    let field = AMBIENT.with(|slot| slot.borrow_mut().take());
    drop(field);
}

/// Whether the hero field is currently animating.
#[wasm_bindgen]
pub fn ambient_field_running() -> bool {
    AMBIENT.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|f| f.is_running())
            .unwrap_or(false)
    })
}
