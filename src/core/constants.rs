// Simulation tuning shared by the background field, the bubble picker and
// click bursts. Distances are CSS pixels, times are frames unless suffixed.

// Background field
pub const FIELD_BUBBLE_COUNT: usize = 8;
pub const FIELD_RADIUS_MIN: f32 = 70.0;
pub const FIELD_RADIUS_SPAN: f32 = 100.0; // radius in [MIN, MIN + SPAN)
pub const FIELD_SPEED_SPAN_X: f32 = 3.0; // vx in [-SPAN/2, SPAN/2)
pub const FIELD_SPEED_SPAN_Y: f32 = 1.5;

// Pop animation
pub const POP_FRAMES: u32 = 10;
pub const POP_DECAY: f32 = 0.9; // radius multiplier per popping frame

// Canvas picker layout
pub const PICKER_RADIUS: f32 = 80.0;
pub const PICKER_COLUMNS: usize = 3;
pub const PICKER_ROW_DIVISIONS: f32 = 3.0; // rows are spaced by height / 3

// Grid picker breakpoints (viewport width, CSS px)
pub const GRID_BREAKPOINT_TWO_COLUMNS: f64 = 768.0;
pub const GRID_BREAKPOINT_THREE_COLUMNS: f64 = 1024.0;

// Click bursts
pub const BURST_PARTICLES: usize = 8;
pub const BURST_MAX_SPEED: f32 = 5.0; // |vx|, |vy| <= MAX
pub const BURST_GRAVITY: f32 = 0.1; // added to vy every tick
pub const BURST_TICK_MS: u32 = 16;
pub const BURST_LIFETIME_MS: u32 = 1000;
pub const BURST_CULL_MARGIN: f32 = 100.0; // removed once y > height + margin

// Palettes (rgb); alpha is applied per gradient stop at draw time
pub const FIELD_PALETTE: [[u8; 3]; 4] = [
    [163, 63, 218], // purple
    [99, 102, 241], // blue
    [6, 182, 212],  // cyan
    [189, 50, 143], // pink
];

pub const PICKER_PALETTE: [[u8; 3]; 4] = [
    [139, 92, 246], // purple
    [99, 102, 241], // blue
    [6, 182, 212],  // cyan
    [236, 72, 153], // pink
];
