use glam::Vec2;
use web_sys as web;

/// Pointer position relative to the host element's top-left corner, in CSS pixels.
#[inline]
pub fn pointer_host_px(ev: &web::MouseEvent, host: &web::Element) -> Vec2 {
    let rect = host.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
