use glam::Vec2;
use web_sys as web;

/// Click position relative to the element's top-left corner, in CSS px.
#[inline]
pub fn click_local_px(ev: &web::MouseEvent, target: &web::Element) -> Vec2 {
    let rect = target.get_bounding_client_rect();
    to_local(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
    )
}

/// Click position in viewport coordinates, in CSS px.
#[inline]
pub fn click_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn to_local(client: Vec2, origin: Vec2) -> Vec2 {
    client - origin
}
