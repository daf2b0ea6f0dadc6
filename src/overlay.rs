use crate::constants::{EASTER_EGG_MESSAGE, EASTER_EGG_SHOWN_TRANSFORM, EASTER_EGG_STYLE};
use crate::dom::{self, js_err};
use crate::reveal;
use portfolio_core::constants::EASTER_EGG_VISIBLE_MS;
use portfolio_core::reveal::Tween;
use wasm_bindgen::JsCast;
use web_sys as web;

const POP_IN_MS: i32 = 500;
const POP_OUT_MS: i32 = 300;

/// Pop a celebratory banner in the middle of the viewport, then remove it.
pub fn show_easter_egg(document: &web::Document) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let el = document.create_element("div").map_err(js_err)?;
    el.set_text_content(Some(EASTER_EGG_MESSAGE));
    el.set_attribute("style", EASTER_EGG_STYLE).map_err(js_err)?;
    body.append_child(&el).map_err(js_err)?;

    if reveal::gsap_available() {
        reveal::tween_element(
            &el,
            &Tween {
                scale: Some(1.0),
                duration: Some(POP_IN_MS as f32 / 1000.0),
                ease: Some("back.out(1.7)"),
                ..Tween::default()
            },
        );
        dom::after(POP_IN_MS + EASTER_EGG_VISIBLE_MS, move || {
            reveal::tween_element(
                &el,
                &Tween {
                    scale: Some(0.0),
                    duration: Some(POP_OUT_MS as f32 / 1000.0),
                    ..Tween::default()
                },
            );
            dom::after(POP_OUT_MS, move || el.remove());
        });
    } else {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html
                .style()
                .set_property("transform", EASTER_EGG_SHOWN_TRANSFORM);
        }
        dom::after(EASTER_EGG_VISIBLE_MS, move || el.remove());
    }
    Ok(())
}
