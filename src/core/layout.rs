use super::constants::{
    GRID_BREAKPOINT_THREE_COLUMNS, GRID_BREAKPOINT_TWO_COLUMNS, PICKER_COLUMNS,
    PICKER_ROW_DIVISIONS,
};
use glam::Vec2;

/// Center of the canvas picker slot for item `index`.
///
/// Columns sit at quarter widths and rows at third heights regardless of how
/// many rows there are; the column count does not follow the viewport.
#[inline]
pub fn canvas_slot(index: usize, width: f32, height: f32) -> Vec2 {
    let col = (index % PICKER_COLUMNS) as f32;
    let row = (index / PICKER_COLUMNS) as f32;
    Vec2::new(
        (col + 1.0) * (width / (PICKER_COLUMNS as f32 + 1.0)),
        (row + 1.0) * (height / PICKER_ROW_DIVISIONS),
    )
}

/// Column count of the tile grid for a viewport width in CSS px.
#[inline]
pub fn grid_columns(viewport_width: f64) -> usize {
    if viewport_width >= GRID_BREAKPOINT_THREE_COLUMNS {
        3
    } else if viewport_width >= GRID_BREAKPOINT_TWO_COLUMNS {
        2
    } else {
        1
    }
}
