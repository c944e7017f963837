use crate::core::constants::{FIELD_BUBBLE_COUNT, FIELD_PALETTE};
use crate::core::{BubbleField, BubbleStyle, ColorMode};
use crate::dom;
use crate::events;
use crate::frame::{self, FrameLoop};
use crate::render;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

struct Mounted {
    _listeners: Vec<EventListener>,
    _frames: FrameLoop,
}

/// Full-viewport floating bubbles behind the page content.
///
/// Dropping (or `unmount`) removes the listeners and stops the frame loop.
/// A canvas without a 2D context yields an inert handle.
#[wasm_bindgen]
pub struct BackgroundField {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl BackgroundField {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<BackgroundField, JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("missing canvas #{}", canvas_id)))?;
        Ok(Self::mount(&canvas, ColorMode::PerBubble))
    }

    pub fn unmount(self) {
        log::info!("[background] unmount");
    }
}

impl BackgroundField {
    pub fn mount(canvas: &web::HtmlCanvasElement, colors: ColorMode) -> Self {
        let Some(ctx) = dom::context_2d(canvas) else {
            log::warn!("[background] no 2d context; field disabled");
            return Self { mounted: None };
        };

        let (w, h) = dom::sync_canvas_to_window(canvas);
        let field = Rc::new(RefCell::new(BubbleField::new(
            FIELD_BUBBLE_COUNT,
            w,
            h,
            &mut rand::thread_rng(),
        )));
        log::info!("[background] {} bubbles in {}x{}", FIELD_BUBBLE_COUNT, w, h);

        let mut listeners = Vec::new();
        let canvas_resize = canvas.clone();
        let field_resize = field.clone();
        if let Some(l) = events::wire_window_resize(move || {
            let (w, h) = dom::sync_canvas_to_window(&canvas_resize);
            field_resize.borrow_mut().resize(w, h);
        }) {
            listeners.push(l);
        }

        let field_click = field.clone();
        listeners.push(events::wire_local_click(canvas, move |p| {
            let popped = field_click.borrow_mut().click(p);
            if popped > 0 {
                log::debug!("[background] popped {} at ({:.0},{:.0})", popped, p.x, p.y);
            }
        }));

        let frames = frame::start_loop(move || {
            let mut field = field.borrow_mut();
            field.step();
            draw(&ctx, &field, colors);
        });

        Self {
            mounted: Some(Mounted {
                _listeners: listeners,
                _frames: frames,
            }),
        }
    }

    pub fn is_active(&self) -> bool {
        self.mounted.is_some()
    }
}

fn draw(ctx: &web::CanvasRenderingContext2d, field: &BubbleField, colors: ColorMode) {
    let (w, h) = field.size();
    render::clear(ctx, w, h);
    let mut rng = rand::thread_rng();
    for b in &field.bubbles {
        let style = BubbleStyle::resolve(colors, b.color, &FIELD_PALETTE, render::FIELD_ALPHAS, &mut rng);
        render::bubble(ctx, b.position, b.radius, &style);
    }
}
