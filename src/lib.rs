#![cfg(target_arch = "wasm32")]
use crate::constants::{
    BACKGROUND_CANVAS_ID, CONTACT_FORM_ID, SECTION_CONFIG_SELECTOR, SECTION_SELECTOR,
};
use crate::core::{ColorMode, SectionConfig};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod background;
mod constants;
mod contact_form;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod section;

pub use background::BackgroundField;
pub use contact_form::ContactFormView;
pub use section::ExperienceSection;

/// Everything mounted by `start`, kept alive until `unmount_all`.
// Held only for their Drop; nothing reads them.
#[allow(dead_code)]
enum Mounted {
    Background(BackgroundField),
    Section(ExperienceSection),
    Contact(ContactFormView),
}

thread_local! {
    static MOUNTED: RefCell<Vec<Mounted>> = RefCell::new(Vec::new());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    match mount_page() {
        Ok(mounted) => {
            log::info!("mounted {} component(s)", mounted.len());
            MOUNTED.with(|slot| slot.borrow_mut().extend(mounted));
        }
        Err(e) => log::error!("mount error: {:?}", e),
    }
    Ok(())
}

/// Tears down every auto-mounted component: listeners, frame loops, timers.
#[wasm_bindgen]
pub fn unmount_all() {
    let dropped = MOUNTED.with(|slot| std::mem::take(&mut *slot.borrow_mut()));
    log::info!("unmounting {} component(s)", dropped.len());
    drop(dropped);
}

fn mount_page() -> anyhow::Result<Vec<Mounted>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mut mounted = Vec::new();

    if let Some(canvas) = dom::element_by_id::<web::HtmlCanvasElement>(&document, BACKGROUND_CANVAS_ID)
    {
        let field = BackgroundField::mount(&canvas, ColorMode::PerBubble);
        if field.is_active() {
            mounted.push(Mounted::Background(field));
        }
    }

    let hosts = document
        .query_selector_all(SECTION_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for i in 0..hosts.length() {
        let Some(host) = hosts.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let config = match read_section_config(&host) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[section] skipped: {:?}", e);
                continue;
            }
        };
        match ExperienceSection::mount(&document, &host, config) {
            Ok(s) => mounted.push(Mounted::Section(s)),
            Err(e) => log::error!("[section] mount error: {:?}", e),
        }
    }

    if let Some(form) = dom::element_by_id::<web::HtmlFormElement>(&document, CONTACT_FORM_ID) {
        mounted.push(Mounted::Contact(ContactFormView::mount(&document, &form)));
    }

    Ok(mounted)
}

fn read_section_config(host: &web::Element) -> anyhow::Result<SectionConfig> {
    let script = host
        .query_selector(SECTION_CONFIG_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no config script in #{}", host.id()))?;
    let text = script.text_content().unwrap_or_default();
    Ok(SectionConfig::from_json(&text)?)
}
