// Host-side tests for the experience picker layout and hit testing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod folio_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod pop {
        include!("../src/core/pop.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod picker {
        include!("../src/core/picker.rs");
    }
}

use folio_core::constants::*;
use folio_core::layout::*;
use folio_core::picker::*;
use glam::Vec2;

#[test]
fn canvas_slots_follow_three_column_mapping() {
    assert_eq!(canvas_slot(0, 800.0, 300.0), Vec2::new(200.0, 100.0));
    assert_eq!(canvas_slot(1, 800.0, 300.0), Vec2::new(400.0, 100.0));
    assert_eq!(canvas_slot(2, 800.0, 300.0), Vec2::new(600.0, 100.0));
    assert_eq!(canvas_slot(3, 800.0, 300.0), Vec2::new(200.0, 200.0));
    assert_eq!(canvas_slot(5, 800.0, 300.0), Vec2::new(600.0, 200.0));
    // third row lands on the bottom edge; rows are not rescaled
    assert_eq!(canvas_slot(6, 800.0, 300.0), Vec2::new(200.0, 300.0));
}

#[test]
fn grid_columns_follow_breakpoints() {
    assert_eq!(grid_columns(320.0), 1);
    assert_eq!(grid_columns(767.9), 1);
    assert_eq!(grid_columns(768.0), 2);
    assert_eq!(grid_columns(1023.0), 2);
    assert_eq!(grid_columns(1024.0), 3);
    assert_eq!(grid_columns(2560.0), 3);
}

#[test]
fn picker_has_one_bubble_per_item() {
    let picker = BubblePicker::new(4, 800.0, 300.0);
    assert_eq!(picker.bubbles.len(), 4);
    for (i, b) in picker.bubbles.iter().enumerate() {
        assert_eq!(b.item, i);
        assert_eq!(b.radius, PICKER_RADIUS);
        assert_eq!(b.center, canvas_slot(i, 800.0, 300.0));
    }
    assert!(BubblePicker::new(0, 800.0, 300.0).bubbles.is_empty());
}

#[test]
fn click_selects_and_pops_the_hit_bubble() {
    let mut picker = BubblePicker::new(3, 800.0, 300.0);
    let hit = picker.click(Vec2::new(410.0, 95.0));
    assert_eq!(hit, Some(1));
    assert!(picker.bubbles[1].pop.is_popping());
    assert!(!picker.bubbles[0].pop.is_popping());
    assert!(!picker.bubbles[2].pop.is_popping());
}

#[test]
fn click_on_empty_space_selects_nothing() {
    let mut picker = BubblePicker::new(3, 800.0, 300.0);
    assert_eq!(picker.click(Vec2::new(10.0, 290.0)), None);
    assert!(picker.bubbles.iter().all(|b| !b.pop.is_popping()));
}

#[test]
fn popping_bubble_cannot_be_selected_again() {
    let mut picker = BubblePicker::new(1, 800.0, 300.0);
    let c = picker.bubbles[0].center;
    assert_eq!(picker.click(c), Some(0));
    picker.step();
    assert_eq!(picker.click(c), None);
}

#[test]
fn picker_pop_decays_then_resets() {
    let mut picker = BubblePicker::new(2, 800.0, 300.0);
    let c = picker.bubbles[0].center;
    picker.click(c);
    for k in 1..=POP_FRAMES {
        picker.step();
        let expected = PICKER_RADIUS * POP_DECAY.powi(k as i32);
        assert!((picker.bubbles[0].radius - expected).abs() < 1e-3);
        assert_eq!(picker.bubbles[1].radius, PICKER_RADIUS);
    }
    picker.step();
    assert_eq!(picker.bubbles[0].radius, PICKER_RADIUS);
    assert!(!picker.bubbles[0].pop.is_popping());
    assert_eq!(picker.click(c), Some(0));
}

#[test]
fn resize_rederives_slots() {
    let mut picker = BubblePicker::new(4, 800.0, 300.0);
    picker.resize(400.0, 600.0);
    assert_eq!(picker.size(), (400.0, 600.0));
    assert_eq!(picker.bubbles[0].center, Vec2::new(100.0, 200.0));
    assert_eq!(picker.bubbles[3].center, Vec2::new(100.0, 400.0));
}

#[test]
fn selection_keeps_item_after_close() {
    let mut sel = Selection::default();
    assert_eq!(sel.item(), None);
    assert!(!sel.is_open());
    sel.open(2);
    assert_eq!(sel.item(), Some(2));
    assert!(sel.is_open());
    sel.close();
    assert!(!sel.is_open());
    assert_eq!(sel.item(), Some(2));
    sel.open(0);
    assert_eq!(sel.item(), Some(0));
}
