use super::Listener;
use crate::input;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Report host-relative pointer positions for moves over `host`.
pub fn on_pointer_move(
    host: &web::HtmlElement,
    mut handler: impl FnMut(Vec2) + 'static,
) -> anyhow::Result<Listener> {
    let host_for_rect = host.clone();
    Listener::new(host, "pointermove", move |ev: web::Event| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            handler(input::pointer_host_px(mouse, &host_for_rect));
        }
    })
}

/// Window resize notifications. The event carries no payload; callers re-measure.
pub fn on_window_resize(mut handler: impl FnMut() + 'static) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    Listener::new(&window, "resize", move |_| handler())
}
