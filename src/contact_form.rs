use crate::constants::{CONTACT_EMAIL_ID, CONTACT_MESSAGE_ID, CONTACT_NAME_ID, TOAST_DURATION_MS};
use crate::core::ContactForm;
use crate::dom;
use crate::overlay;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Contact form handling: local acknowledgment only, nothing is sent.
#[wasm_bindgen]
pub struct ContactFormView {
    _submit: EventListener,
    _toast_timer: Rc<RefCell<Option<Timeout>>>,
}

#[wasm_bindgen]
impl ContactFormView {
    #[wasm_bindgen(constructor)]
    pub fn new(form_id: &str) -> Result<ContactFormView, JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let form: web::HtmlFormElement = dom::element_by_id(&document, form_id)
            .ok_or_else(|| JsValue::from_str(&format!("missing form #{}", form_id)))?;
        Ok(Self::mount(&document, &form))
    }

    pub fn unmount(self) {
        log::info!("[contact] unmount");
    }
}

impl ContactFormView {
    pub fn mount(document: &web::Document, form: &web::HtmlFormElement) -> Self {
        let toast_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let doc = document.clone();
        let timer = toast_timer.clone();
        let submit = EventListener::new_with_options(
            form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |ev| {
                ev.prevent_default();
                let mut data = read_fields(&doc);
                match data.submit() {
                    Ok(ack) => {
                        write_fields(&doc, &data);
                        log::info!("[contact] acknowledged");
                        overlay::show_toast(&doc, ack.title, Some(ack.description));
                    }
                    Err(e) => {
                        log::warn!("[contact] rejected: {}", e);
                        overlay::show_toast(&doc, &e.to_string(), None);
                    }
                }
                let hide_doc = doc.clone();
                *timer.borrow_mut() = Some(Timeout::new(TOAST_DURATION_MS, move || {
                    overlay::hide_toast(&hide_doc);
                }));
            },
        );
        Self {
            _submit: submit,
            _toast_timer: toast_timer,
        }
    }
}

fn read_fields(document: &web::Document) -> ContactForm {
    ContactForm::new(
        input_value(document, CONTACT_NAME_ID),
        input_value(document, CONTACT_EMAIL_ID),
        textarea_value(document, CONTACT_MESSAGE_ID),
    )
}

fn write_fields(document: &web::Document, form: &ContactForm) {
    if let Some(el) = dom::element_by_id::<web::HtmlInputElement>(document, CONTACT_NAME_ID) {
        el.set_value(&form.name);
    }
    if let Some(el) = dom::element_by_id::<web::HtmlInputElement>(document, CONTACT_EMAIL_ID) {
        el.set_value(&form.email);
    }
    if let Some(el) = dom::element_by_id::<web::HtmlTextAreaElement>(document, CONTACT_MESSAGE_ID)
    {
        el.set_value(&form.message);
    }
}

fn input_value(document: &web::Document, id: &str) -> String {
    dom::element_by_id::<web::HtmlInputElement>(document, id)
        .map(|el| el.value())
        .unwrap_or_default()
}

fn textarea_value(document: &web::Document, id: &str) -> String {
    dom::element_by_id::<web::HtmlTextAreaElement>(document, id)
        .map(|el| el.value())
        .unwrap_or_default()
}
