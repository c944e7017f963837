use crate::core::{DetailView, PickerLayout, SectionConfig, Selection};
use crate::dom::{self, append, create_element};
use crate::events;
use crate::overlay::DetailDialog;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod grid;

enum Layout {
    Canvas(canvas::CanvasPicker),
    Grid(grid::GridPicker),
}

/// One experience section (work, projects, leadership, ...) mounted into a
/// host element: a header, then a canvas or grid picker.
#[wasm_bindgen]
pub struct ExperienceSection {
    header: web::Element,
    _layout: Layout,
    _dialog_listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl ExperienceSection {
    /// `config` is a plain object with the same shape as the JSON config.
    #[wasm_bindgen(constructor)]
    pub fn new(element_id: &str, config: JsValue) -> Result<ExperienceSection, JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let host = document
            .get_element_by_id(element_id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", element_id)))?;
        let json = js_sys::JSON::stringify(&config)?
            .as_string()
            .unwrap_or_default();
        let config = SectionConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::mount(&document, &host, config).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

    pub fn unmount(self) {
        log::info!("[section] unmount");
    }
}

/// State shared by both layouts: the config and what the dialog is showing.
pub(crate) struct SectionShared {
    pub config: SectionConfig,
    pub dialog: DetailDialog,
}

impl SectionShared {
    /// Opens the dialog for `item` and records it in `selection`.
    pub fn show_item(&self, selection: &mut Selection, item: usize) {
        let Some(entry) = self.config.item(item) else {
            return;
        };
        selection.open(item);
        let view = DetailView::build(entry, self.config.mode, &self.config.leadership_items);
        log::info!("[section] {:?} -> {:?}", self.config.title, view.title);
        self.dialog.open(&view);
    }
}

impl ExperienceSection {
    pub fn mount(
        document: &web::Document,
        host: &web::Element,
        config: SectionConfig,
    ) -> anyhow::Result<Self> {
        let header = render_header(document, host, &config)?;
        let layout_kind = config.layout;
        let shared = Rc::new(SectionShared {
            config,
            dialog: DetailDialog::new(document),
        });
        let selection = Rc::new(RefCell::new(Selection::default()));

        let layout = match layout_kind {
            PickerLayout::Canvas => Layout::Canvas(canvas::CanvasPicker::mount(
                document,
                host,
                shared.clone(),
                selection.clone(),
            )?),
            PickerLayout::Grid => Layout::Grid(grid::GridPicker::mount(
                document,
                host,
                shared.clone(),
                selection.clone(),
            )?),
        };

        let mut dialog_listeners = {
            let selection = selection.clone();
            shared
                .dialog
                .wire_close(move || selection.borrow_mut().close())
        };
        let dialog = shared.dialog.clone();
        let is_open = {
            let selection = selection.clone();
            move || selection.borrow().is_open()
        };
        dialog_listeners.push(events::wire_dialog_escape(document, is_open, move || {
            dialog.close();
            let mut selection = selection.borrow_mut();
            selection.close();
            log::info!("[section] closed item {:?}", selection.item());
        }));

        Ok(Self {
            header,
            _layout: layout,
            _dialog_listeners: dialog_listeners,
        })
    }
}

impl Drop for ExperienceSection {
    fn drop(&mut self) {
        self.header.remove();
    }
}

fn render_header(
    document: &web::Document,
    host: &web::Element,
    config: &SectionConfig,
) -> anyhow::Result<web::Element> {
    let header = create_element(document, "div", "section-header", None)?;
    append(
        &header,
        &create_element(document, "span", "section-icon", Some(config.icon.glyph()))?,
    )?;
    append(
        &header,
        &create_element(document, "h2", "section-title", Some(&config.title))?,
    )?;
    append(host, &header)?;
    Ok(header)
}
