// Host-side tests for bubble coloring.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod folio_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod color {
        include!("../src/core/color.rs");
    }
}

use constants::*;
use folio_core::color::*;
use folio_core::constants::{FIELD_PALETTE, PICKER_PALETTE};
use rand::rngs::StdRng;
use rand::SeedableRng;

const FIELD: StopAlphas = StopAlphas {
    center: FIELD_ALPHA_CENTER,
    mid: FIELD_ALPHA_MID,
    edge: FIELD_ALPHA_EDGE,
    stroke: FIELD_ALPHA_STROKE,
};

const PICKER: StopAlphas = StopAlphas {
    center: PICKER_ALPHA_CENTER,
    mid: PICKER_ALPHA_MID,
    edge: PICKER_ALPHA_EDGE,
    stroke: PICKER_ALPHA_STROKE,
};

fn rgb(c: Rgba) -> [u8; 3] {
    [c.r, c.g, c.b]
}

#[test]
fn stop_alphas_match_design_values() {
    assert_eq!((FIELD.center, FIELD.mid, FIELD.edge, FIELD.stroke), (0.25, 0.15, 0.0, 0.3));
    assert_eq!((PICKER.center, PICKER.mid, PICKER.edge, PICKER.stroke), (0.4, 0.2, 0.0, 0.5));
}

#[test]
fn uniform_keeps_base_rgb_and_applies_each_alpha() {
    let base = Rgba::from_rgb(FIELD_PALETTE[1], 1.0);
    let style = BubbleStyle::uniform(base, FIELD);
    for stop in [style.center, style.mid, style.edge, style.stroke] {
        assert_eq!(rgb(stop), FIELD_PALETTE[1]);
    }
    assert_eq!(style.center.a, 0.25);
    assert_eq!(style.mid.a, 0.15);
    assert_eq!(style.edge.a, 0.0);
    assert_eq!(style.stroke.a, 0.3);
}

#[test]
fn per_bubble_mode_ignores_palette() {
    let mut rng = StdRng::seed_from_u64(3);
    let base = Rgba::new(1, 2, 3, 1.0);
    let style = BubbleStyle::resolve(ColorMode::PerBubble, base, &PICKER_PALETTE, PICKER, &mut rng);
    assert_eq!(style, BubbleStyle::uniform(base, PICKER));
}

#[test]
fn per_frame_random_picks_every_stop_from_palette() {
    let mut rng = StdRng::seed_from_u64(11);
    let base = Rgba::new(1, 2, 3, 1.0);
    let mut seen = Vec::new();
    for _ in 0..200 {
        let style =
            BubbleStyle::resolve(ColorMode::PerFrameRandom, base, &PICKER_PALETTE, PICKER, &mut rng);
        for stop in [style.center, style.mid, style.edge, style.stroke] {
            assert!(PICKER_PALETTE.contains(&rgb(stop)), "{:?}", stop);
            if !seen.contains(&rgb(stop)) {
                seen.push(rgb(stop));
            }
        }
        assert_eq!(style.center.a, PICKER.center);
        assert_eq!(style.stroke.a, PICKER.stroke);
    }
    // over many frames every palette entry shows up
    assert_eq!(seen.len(), PICKER_PALETTE.len());
}

#[test]
fn pick_stays_in_palette() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let c = pick(&FIELD_PALETTE, &mut rng);
        assert!(FIELD_PALETTE.contains(&rgb(c)));
        assert_eq!(c.a, 1.0);
    }
}

#[test]
fn empty_palette_is_fully_transparent() {
    let mut rng = StdRng::seed_from_u64(9);
    assert_eq!(pick(&[], &mut rng), Rgba::TRANSPARENT);
    let style = BubbleStyle::shuffled(&[], FIELD, &mut rng);
    assert_eq!(style, BubbleStyle::TRANSPARENT);
    for stop in [style.center, style.mid, style.edge, style.stroke] {
        assert_eq!(stop.a, 0.0);
    }
}

#[test]
fn css_formats_rgba() {
    assert_eq!(Rgba::new(99, 102, 241, 0.5).css(), "rgba(99, 102, 241, 0.5)");
    assert_eq!(ColorMode::default(), ColorMode::PerBubble);
}
