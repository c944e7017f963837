use super::SectionShared;
use crate::constants::TILE_HOVER_SCALE;
use crate::core::constants::BURST_TICK_MS;
use crate::core::{grid_columns, BurstField, Selection};
use crate::dom::{self, append, create_element};
use crate::events;
use crate::render;
use anyhow::anyhow;
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

struct BurstLayer {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
    bursts: BurstField,
    // particles are on screen from the last draw
    drawn: bool,
}

impl BurstLayer {
    fn tick(&mut self) {
        if self.bursts.is_empty() && !self.drawn {
            return;
        }
        let now = Instant::now();
        let expired = self.bursts.expire_due(now);
        if expired > 0 {
            log::debug!("[burst] {} expired", expired);
        }
        self.bursts.step();
        self.draw(now);
    }

    fn draw(&mut self, now: Instant) {
        self.drawn = !self.bursts.is_empty();
        let Some(ctx) = &self.ctx else {
            return;
        };
        let (w, h) = (self.canvas.width() as f32, self.canvas.height() as f32);
        render::clear(ctx, w, h);
        for p in self.bursts.particles() {
            render::particle(ctx, p.position, self.bursts.age_fraction(p.burst, now));
        }
    }
}

/// Static responsive tile grid; clicks open the dialog and spawn a burst.
pub(super) struct GridPicker {
    grid: web::Element,
    layer: Rc<RefCell<BurstLayer>>,
    _listeners: Vec<EventListener>,
    _ticker: Interval,
}

impl GridPicker {
    pub fn mount(
        document: &web::Document,
        host: &web::Element,
        shared: Rc<SectionShared>,
        selection: Rc<RefCell<Selection>>,
    ) -> anyhow::Result<Self> {
        let grid = create_element(document, "div", "experience-grid", None)?;
        let grid_el: web::HtmlElement = grid.clone().dyn_into().map_err(|e| anyhow!("{:?}", e))?;
        dom::set_style(&grid_el, "display", "grid");
        dom::set_style(&grid_el, "gap", "1.5rem");
        apply_columns(&grid_el);
        append(host, &grid)?;

        let layer = Rc::new(RefCell::new(create_layer(document)?));
        let mut listeners = Vec::new();

        for (i, item) in shared.config.items.iter().enumerate() {
            let tile: web::HtmlElement = create_element(document, "div", "experience-tile", None)?
                .dyn_into()
                .map_err(|e| anyhow!("{:?}", e))?;
            dom::set_style(&tile, "cursor", "pointer");
            dom::set_style(&tile, "transition", "transform 0.2s ease");
            append(&tile, &create_element(document, "span", "tile-icon", Some(item.icon.glyph()))?)?;
            append(&tile, &create_element(document, "h3", "tile-title", Some(&item.title))?)?;
            if let Some(subtitle) = &item.subtitle {
                append(&tile, &create_element(document, "p", "tile-subtitle", Some(subtitle))?)?;
            }
            append(&tile, &create_element(document, "p", "tile-period", Some(&item.period))?)?;
            append(&grid, &tile)?;

            listeners.extend(events::wire_hover_scale(&tile, TILE_HOVER_SCALE));
            let shared = shared.clone();
            let selection = selection.clone();
            let weak = Rc::downgrade(&layer);
            listeners.push(events::wire_client_click(&tile, move |p| {
                shared.show_item(&mut selection.borrow_mut(), i);
                spawn_burst(&weak, p);
            }));
        }

        let grid_resize = grid_el.clone();
        let layer_resize = layer.clone();
        if let Some(l) = events::wire_window_resize(move || {
            apply_columns(&grid_resize);
            let mut layer = layer_resize.borrow_mut();
            let (_, h) = dom::sync_canvas_to_window(&layer.canvas);
            layer.bursts.set_viewport_height(h);
        }) {
            listeners.push(l);
        }

        let layer_tick = layer.clone();
        let ticker = Interval::new(BURST_TICK_MS, move || layer_tick.borrow_mut().tick());

        Ok(Self {
            grid,
            layer,
            _listeners: listeners,
            _ticker: ticker,
        })
    }
}

impl Drop for GridPicker {
    fn drop(&mut self) {
        self.layer.borrow().canvas.remove();
        self.grid.remove();
    }
}

fn create_layer(document: &web::Document) -> anyhow::Result<BurstLayer> {
    let canvas: web::HtmlCanvasElement = create_element(document, "canvas", "burst-layer", None)?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    for (prop, value) in [
        ("position", "fixed"),
        ("inset", "0"),
        ("pointer-events", "none"),
        ("z-index", "50"),
    ] {
        dom::set_style(&canvas, prop, value);
    }
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    append(&body, &canvas)?;
    let (_, h) = dom::sync_canvas_to_window(&canvas);
    let ctx = dom::context_2d(&canvas);
    if ctx.is_none() {
        log::warn!("[section] no 2d context for burst layer; bursts will not draw");
    }
    Ok(BurstLayer {
        canvas,
        ctx,
        bursts: BurstField::new(h),
        drawn: false,
    })
}

fn spawn_burst(layer: &Weak<RefCell<BurstLayer>>, at: glam::Vec2) {
    let Some(layer) = layer.upgrade() else {
        return;
    };
    let id = layer
        .borrow_mut()
        .bursts
        .spawn(at, Instant::now(), &mut rand::thread_rng());
    log::info!("[burst] {} at ({:.0},{:.0})", id, at.x, at.y);
}

fn apply_columns(grid: &web::HtmlElement) {
    let (w, _) = dom::viewport_size();
    let cols = grid_columns(w as f64);
    dom::set_style(
        grid,
        "grid-template-columns",
        &format!("repeat({}, minmax(0, 1fr))", cols),
    );
}
