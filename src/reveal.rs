//! GSAP bindings for the scroll-reveal catalogue.

use crate::dom;
use js_sys::{Object, Reflect};
use portfolio_core::reveal::{page_reveals, Reveal, ScrollTrigger, Target, Trigger, Tween, TweenKind};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = registerPlugin)]
    fn register_plugin(plugin: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = from)]
    fn gsap_from(targets: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;
}

fn global_has(name: &str) -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

#[inline]
pub fn gsap_available() -> bool {
    global_has("gsap")
}

#[inline]
fn set(obj: &Object, key: &str, value: &JsValue) {
    _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

fn tween_vars(tween: &Tween, scroll: Option<(&ScrollTrigger, JsValue)>) -> Object {
    let vars = Object::new();
    for (key, value) in tween.numeric_props() {
        set(&vars, key, &JsValue::from_f64(value as f64));
    }
    if let Some(ease) = tween.ease {
        set(&vars, "ease", &JsValue::from_str(ease));
    }
    if let Some((st, trigger)) = scroll {
        let obj = Object::new();
        set(&obj, "trigger", &trigger);
        set(&obj, "start", &JsValue::from_str(st.start));
        if let Some(end) = st.end {
            set(&obj, "end", &JsValue::from_str(end));
        }
        if let Some(scrub) = st.scrub {
            set(&obj, "scrub", &JsValue::from_f64(scrub as f64));
        }
        if let Some(actions) = st.toggle_actions() {
            set(&obj, "toggleActions", &JsValue::from_str(actions));
        }
        set(&vars, "scrollTrigger", &obj);
    }
    vars
}

fn run(kind: TweenKind, targets: &JsValue, vars: &Object) {
    let result = match kind {
        TweenKind::From => gsap_from(targets, vars),
        TweenKind::To => gsap_to(targets, vars),
    };
    if let Err(e) = result {
        log::warn!("[reveal] tween failed: {:?}", e);
    }
}

fn trigger_value(trigger: Trigger, own: &JsValue) -> JsValue {
    match trigger {
        Trigger::Selector(s) => JsValue::from_str(s),
        Trigger::Element => own.clone(),
    }
}

fn apply(document: &web::Document, r: &Reveal) {
    match r.target {
        Target::All(selector) => {
            if dom::query(document, selector).is_none() {
                return;
            }
            let targets = JsValue::from_str(selector);
            let trigger = trigger_value(r.scroll.trigger, &targets);
            run(r.kind, &targets, &tween_vars(&r.tween, Some((&r.scroll, trigger))));
        }
        Target::Each(selector) => {
            for (i, el) in dom::query_all(document, selector).iter().enumerate() {
                let own: &JsValue = el.as_ref();
                let trigger = trigger_value(r.scroll.trigger, own);
                run(r.kind, own, &tween_vars(&r.tween_for(i), Some((&r.scroll, trigger))));
            }
        }
        Target::ChildOfEach { parent, child } => {
            for (i, p) in dom::query_all(document, parent).iter().enumerate() {
                let Some(c) = p.query_selector(child).ok().flatten() else {
                    continue;
                };
                let trigger = trigger_value(r.scroll.trigger, p.as_ref());
                run(r.kind, c.as_ref(), &tween_vars(&r.tween_for(i), Some((&r.scroll, trigger))));
            }
        }
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    if !gsap_available() {
        log::warn!("[reveal] GSAP not loaded; scroll animations disabled");
        return Ok(());
    }
    if let Ok(plugin) = Reflect::get(&js_sys::global(), &JsValue::from_str("ScrollTrigger")) {
        if !plugin.is_undefined() {
            register_plugin(&plugin).map_err(crate::dom::js_err)?;
        }
    }
    let reveals = page_reveals();
    for r in &reveals {
        apply(document, r);
    }
    log::debug!("[reveal] {} reveals registered", reveals.len());
    Ok(())
}

/// One-off `gsap.to` on a single element, without a scroll trigger.
pub fn tween_element(el: &web::Element, tween: &Tween) {
    run(TweenKind::To, el.as_ref(), &tween_vars(tween, None));
}
