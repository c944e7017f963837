use super::SectionShared;
use crate::constants::PICKER_CANVAS_HEIGHT_CSS;
use crate::core::constants::PICKER_PALETTE;
use crate::core::{BubblePicker, BubbleStyle, Rgba, Selection};
use crate::dom::{self, append};
use crate::events;
use crate::frame::{self, FrameLoop};
use crate::render;
use anyhow::anyhow;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) struct CanvasPicker {
    canvas: web::HtmlCanvasElement,
    _listeners: Vec<EventListener>,
    _frames: Option<FrameLoop>,
}

impl CanvasPicker {
    pub fn mount(
        document: &web::Document,
        host: &web::Element,
        shared: Rc<SectionShared>,
        selection: Rc<RefCell<Selection>>,
    ) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow!("create canvas: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow!("{:?}", e))?;
        canvas.set_class_name("experience-canvas");
        dom::set_style(&canvas, "width", "100%");
        dom::set_style(&canvas, "height", PICKER_CANVAS_HEIGHT_CSS);
        dom::set_style(&canvas, "cursor", "pointer");
        append(host, &canvas)?;

        let Some(ctx) = dom::context_2d(&canvas) else {
            log::warn!("[section] no 2d context for {:?}", shared.config.title);
            return Ok(Self {
                canvas,
                _listeners: Vec::new(),
                _frames: None,
            });
        };

        let (w, h) = dom::sync_canvas_to_element(&canvas);
        let picker = Rc::new(RefCell::new(BubblePicker::new(shared.config.items.len(), w, h)));

        let mut listeners = Vec::new();
        let canvas_resize = canvas.clone();
        let picker_resize = picker.clone();
        if let Some(l) = events::wire_window_resize(move || {
            let (w, h) = dom::sync_canvas_to_element(&canvas_resize);
            picker_resize.borrow_mut().resize(w, h);
        }) {
            listeners.push(l);
        }

        let picker_click = picker.clone();
        let shared_click = shared.clone();
        listeners.push(events::wire_local_click(&canvas, move |p| {
            let hit = picker_click.borrow_mut().click(p);
            if let Some(item) = hit {
                shared_click.show_item(&mut selection.borrow_mut(), item);
            }
        }));

        let frames = frame::start_loop(move || {
            let mut picker = picker.borrow_mut();
            picker.step();
            draw(&ctx, &picker, &shared);
        });

        Ok(Self {
            canvas,
            _listeners: listeners,
            _frames: Some(frames),
        })
    }
}

impl Drop for CanvasPicker {
    fn drop(&mut self) {
        self.canvas.remove();
    }
}

fn draw(ctx: &web::CanvasRenderingContext2d, picker: &BubblePicker, shared: &SectionShared) {
    let (w, h) = picker.size();
    render::clear(ctx, w, h);
    let mut rng = rand::thread_rng();
    for b in &picker.bubbles {
        let own = Rgba::from_rgb(PICKER_PALETTE[b.item % PICKER_PALETTE.len()], 1.0);
        let style = BubbleStyle::resolve(
            shared.config.colors,
            own,
            &PICKER_PALETTE,
            render::PICKER_ALPHAS,
            &mut rng,
        );
        render::bubble(ctx, b.center, b.radius, &style);
        if !b.pop.is_popping() {
            if let Some(item) = shared.config.item(b.item) {
                render::bubble_label(ctx, b.center, &item.title, item.icon.glyph());
            }
        }
    }
}
