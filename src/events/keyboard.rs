use super::Listener;
use crate::overlay;
use portfolio_core::KonamiDetector;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_easter_egg(document: &web::Document) -> anyhow::Result<()> {
    let mut konami = KonamiDetector::default();
    let doc = document.clone();
    Listener::new(document, "keydown", move |ev: web::Event| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if konami.push(&kev.key()) {
            log::info!("[easter-egg] konami code entered");
            if let Err(e) = overlay::show_easter_egg(&doc) {
                log::error!("[easter-egg] {:?}", e);
            }
        }
    })?
    .forget();
    Ok(())
}
