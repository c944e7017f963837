use crate::constants::*;
use crate::core::{BubbleStyle, Rgba, StopAlphas};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

pub const FIELD_ALPHAS: StopAlphas = StopAlphas {
    center: FIELD_ALPHA_CENTER,
    mid: FIELD_ALPHA_MID,
    edge: FIELD_ALPHA_EDGE,
    stroke: FIELD_ALPHA_STROKE,
};

pub const PICKER_ALPHAS: StopAlphas = StopAlphas {
    center: PICKER_ALPHA_CENTER,
    mid: PICKER_ALPHA_MID,
    edge: PICKER_ALPHA_EDGE,
    stroke: PICKER_ALPHA_STROKE,
};

#[inline]
pub fn clear(ctx: &web::CanvasRenderingContext2d, width: f32, height: f32) {
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
}

/// Radial-gradient disk with a thin outline. Non-positive radii draw nothing.
pub fn bubble(ctx: &web::CanvasRenderingContext2d, center: Vec2, radius: f32, style: &BubbleStyle) {
    if !(radius > 0.0) {
        return;
    }
    let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
    let gradient = match ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
        Ok(g) => g,
        Err(_) => return,
    };
    _ = gradient.add_color_stop(0.0, &style.center.css());
    _ = gradient.add_color_stop(GRADIENT_MID_STOP, &style.mid.css());
    _ = gradient.add_color_stop(1.0, &style.edge.css());

    ctx.begin_path();
    if ctx.arc(x, y, r, 0.0, TAU).is_err() {
        return;
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill();

    ctx.set_stroke_style_str(&style.stroke.css());
    ctx.set_line_width(OUTLINE_WIDTH);
    ctx.stroke();
}

/// Title below the center and the icon glyph above it.
pub fn bubble_label(ctx: &web::CanvasRenderingContext2d, center: Vec2, title: &str, glyph: &str) {
    let (x, y) = (center.x as f64, center.y as f64);
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_text_align("center");
    ctx.set_font(LABEL_FONT);
    _ = ctx.fill_text(title, x, y + GLYPH_SIZE / 2.0 + LABEL_GAP);
    ctx.set_font(GLYPH_FONT);
    _ = ctx.fill_text(glyph, x, y - GLYPH_RISE);
}

/// Small dot that fades out as `age` goes from 0 to 1.
pub fn particle(ctx: &web::CanvasRenderingContext2d, position: Vec2, age: f32) {
    let color = Rgba::from_rgb(PARTICLE_RGB, (1.0 - age).clamp(0.0, 1.0));
    ctx.begin_path();
    if ctx
        .arc(position.x as f64, position.y as f64, PARTICLE_RADIUS, 0.0, TAU)
        .is_err()
    {
        return;
    }
    ctx.set_fill_style_str(&color.css());
    ctx.fill();
}
