use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys that dismiss the detail dialog.
#[inline]
pub fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

// Escape closes the dialog only while it is showing.
pub fn wire_dialog_escape(
    document: &web::Document,
    is_open: impl Fn() -> bool + 'static,
    mut close: impl FnMut() + 'static,
) -> EventListener {
    EventListener::new(document, "keydown", move |ev: &web::Event| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if is_close_key(&kev.key()) && is_open() {
            close();
            kev.prevent_default();
        }
    })
}
