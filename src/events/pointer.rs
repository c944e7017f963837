use crate::input;
use glam::Vec2;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Click on `target`, reported in coordinates local to its top-left corner.
pub fn wire_local_click(
    target: &web::Element,
    mut handler: impl FnMut(Vec2) + 'static,
) -> EventListener {
    let el = target.clone();
    EventListener::new(target, "click", move |ev: &web::Event| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            handler(input::click_local_px(mouse, &el));
        }
    })
}

/// Click on `target`, reported in viewport coordinates.
pub fn wire_client_click(
    target: &web::EventTarget,
    mut handler: impl FnMut(Vec2) + 'static,
) -> EventListener {
    EventListener::new(target, "click", move |ev: &web::Event| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            handler(input::click_client_px(mouse));
        }
    })
}

pub fn wire_window_resize(mut handler: impl FnMut() + 'static) -> Option<EventListener> {
    let window = web::window()?;
    Some(EventListener::new(&window, "resize", move |_ev| handler()))
}

/// Scales `el` while hovered.
pub fn wire_hover_scale(el: &web::HtmlElement, scale: f64) -> [EventListener; 2] {
    let enter_el = el.clone();
    let leave_el = el.clone();
    let hovered = format!("scale({})", scale);
    [
        EventListener::new(el, "mouseenter", move |_ev| {
            crate::dom::set_style(&enter_el, "transform", &hovered);
        }),
        EventListener::new(el, "mouseleave", move |_ev| {
            crate::dom::set_style(&leave_el, "transform", "scale(1)");
        }),
    ]
}
