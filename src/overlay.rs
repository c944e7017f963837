use crate::constants::{DETAIL_DIALOG_BODY_ID, DETAIL_DIALOG_CLOSE_ID, DETAIL_DIALOG_ID, TOAST_ID};
use crate::core::{DetailBlock, DetailView};
use crate::dom::{append, create_element};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn show_el(el: &web::Element) {
    _ = el.class_list().remove_1("hidden");
    // fallback for pages without the CSS class
    _ = el.set_attribute("style", "");
}

#[inline]
fn hide_el(el: &web::Element) {
    _ = el.class_list().add_1("hidden");
    _ = el.set_attribute("style", "display:none");
}

/// The page's single detail dialog. Cheap to clone; every section shares it.
#[derive(Clone)]
pub struct DetailDialog {
    document: web::Document,
}

impl DetailDialog {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
        }
    }

    pub fn open(&self, view: &DetailView) {
        let Some(dialog) = self.document.get_element_by_id(DETAIL_DIALOG_ID) else {
            log::warn!("[dialog] missing #{}", DETAIL_DIALOG_ID);
            return;
        };
        // the close button lives outside the body, so only the body is cleared
        let Some(body) = self.document.get_element_by_id(DETAIL_DIALOG_BODY_ID) else {
            log::warn!("[dialog] missing #{}", DETAIL_DIALOG_BODY_ID);
            return;
        };
        body.set_inner_html("");
        if let Err(e) = self.fill(&body, view) {
            log::error!("[dialog] render error: {:?}", e);
        }
        show_el(&dialog);
    }

    pub fn close(&self) {
        if let Some(dialog) = self.document.get_element_by_id(DETAIL_DIALOG_ID) {
            hide_el(&dialog);
        }
    }

    /// Close button and backdrop clicks. The callback runs after hiding.
    pub fn wire_close(&self, on_close: impl Fn() + 'static) -> Vec<EventListener> {
        let on_close = Rc::new(on_close);
        let mut listeners = Vec::new();
        if let Some(button) = self.document.get_element_by_id(DETAIL_DIALOG_CLOSE_ID) {
            let dialog = self.clone();
            let cb = on_close.clone();
            listeners.push(EventListener::new(&button, "click", move |_ev| {
                dialog.close();
                cb();
            }));
        }
        if let Some(backdrop) = self.document.get_element_by_id(DETAIL_DIALOG_ID) {
            let dialog = self.clone();
            let backdrop_el = backdrop.clone();
            listeners.push(EventListener::new(&backdrop, "click", move |ev| {
                // only clicks on the backdrop itself, not the content
                let backdrop_target: &web::EventTarget = backdrop_el.as_ref();
                if ev.target().as_ref() == Some(backdrop_target) {
                    dialog.close();
                    on_close();
                }
            }));
        }
        listeners
    }

    fn fill(&self, body: &web::Element, view: &DetailView) -> anyhow::Result<()> {
        let doc = &self.document;
        let header = create_element(doc, "header", "detail-header", None)?;
        let title = create_element(doc, "h2", "detail-title", None)?;
        append(&title, &create_element(doc, "span", "detail-icon", Some(view.icon.glyph()))?)?;
        append(&title, &create_element(doc, "span", "", Some(&view.title))?)?;
        append(&header, &title)?;

        let meta = create_element(doc, "p", "detail-meta", None)?;
        if let Some(subtitle) = &view.subtitle {
            append(&meta, &create_element(doc, "span", "detail-subtitle", Some(subtitle))?)?;
        }
        append(&meta, &create_element(doc, "span", "detail-period", Some(&view.period))?)?;
        if let Some(location) = &view.location {
            append(&meta, &create_element(doc, "span", "detail-location", Some(location))?)?;
        }
        append(&header, &meta)?;
        append(body, &header)?;

        for block in &view.blocks {
            let section = create_element(doc, "section", "detail-block", None)?;
            append(&section, &create_element(doc, "h3", "", Some(block.heading()))?)?;
            match block {
                DetailBlock::Description(lines)
                | DetailBlock::Highlights(lines)
                | DetailBlock::Achievements(lines) => {
                    append(&section, &self.bullets(lines)?)?;
                }
                DetailBlock::Technologies(tech) => {
                    let badges = create_element(doc, "div", "detail-badges", None)?;
                    for t in tech {
                        append(&badges, &create_element(doc, "span", "badge", Some(t))?)?;
                    }
                    append(&section, &badges)?;
                }
                DetailBlock::Timeline(entries) => {
                    let list = create_element(doc, "ol", "detail-timeline", None)?;
                    for entry in entries {
                        let li = create_element(doc, "li", "timeline-entry", None)?;
                        let step = entry.step.to_string();
                        append(&li, &create_element(doc, "span", "timeline-step", Some(&step))?)?;
                        append(&li, &create_element(doc, "h4", "", Some(&entry.title))?)?;
                        if let Some(subtitle) = &entry.subtitle {
                            append(&li, &create_element(doc, "p", "detail-subtitle", Some(subtitle))?)?;
                        }
                        append(&li, &create_element(doc, "p", "detail-period", Some(&entry.period))?)?;
                        append(&li, &self.bullets(&entry.achievements)?)?;
                        append(&list, &li)?;
                    }
                    append(&section, &list)?;
                }
            }
            append(body, &section)?;
        }
        Ok(())
    }

    fn bullets(&self, lines: &[String]) -> anyhow::Result<web::Element> {
        let ul = create_element(&self.document, "ul", "detail-bullets", None)?;
        for line in lines {
            append(&ul, &create_element(&self.document, "li", "", Some(line))?)?;
        }
        Ok(ul)
    }
}

/// Transient notification; replaces whatever was showing.
pub fn show_toast(document: &web::Document, title: &str, description: Option<&str>) {
    let Some(el) = document.get_element_by_id(TOAST_ID) else {
        log::info!("[toast] {}", title);
        return;
    };
    el.set_inner_html("");
    if let Ok(t) = create_element(document, "strong", "toast-title", Some(title)) {
        _ = append(&el, &t);
    }
    if let Some(desc) = description {
        if let Ok(d) = create_element(document, "p", "toast-description", Some(desc)) {
            _ = append(&el, &d);
        }
    }
    show_el(&el);
}

pub fn hide_toast(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(TOAST_ID) {
        hide_el(&el);
    }
}
