/// Drawing and DOM constants for the web front-end.
///
/// Simulation tuning lives in `core/constants.rs`; everything here only
/// affects how things look or which elements are looked up.
// Background gradient alphas (center, mid, edge) and outline alpha
pub const FIELD_ALPHA_CENTER: f32 = 0.25;
pub const FIELD_ALPHA_MID: f32 = 0.15;
pub const FIELD_ALPHA_EDGE: f32 = 0.0;
pub const FIELD_ALPHA_STROKE: f32 = 0.3;

// Picker gradient alphas; brighter than the background
pub const PICKER_ALPHA_CENTER: f32 = 0.4;
pub const PICKER_ALPHA_MID: f32 = 0.2;
pub const PICKER_ALPHA_EDGE: f32 = 0.0;
pub const PICKER_ALPHA_STROKE: f32 = 0.5;

pub const GRADIENT_MID_STOP: f32 = 0.5;
pub const OUTLINE_WIDTH: f64 = 2.0;

// Picker labels
pub const LABEL_FONT: &str = "bold 14px Arial";
pub const GLYPH_FONT: &str = "24px Arial";
pub const GLYPH_SIZE: f64 = 24.0;
pub const LABEL_GAP: f64 = 10.0; // title baseline sits GLYPH_SIZE/2 + GAP below center
pub const GLYPH_RISE: f64 = 10.0; // glyph baseline sits this far above center
pub const LABEL_COLOR: &str = "#ffffff";

// Burst particles
pub const PARTICLE_RADIUS: f64 = 4.0;
pub const PARTICLE_RGB: [u8; 3] = [139, 92, 246];

// Grid tiles
pub const TILE_HOVER_SCALE: f64 = 1.05;

// Element ids and selectors the host page provides
pub const BACKGROUND_CANVAS_ID: &str = "bubble-field";
pub const SECTION_SELECTOR: &str = "[data-experience-section]";
pub const SECTION_CONFIG_SELECTOR: &str = "script[type=\"application/json\"]";
pub const DETAIL_DIALOG_ID: &str = "detail-dialog";
pub const DETAIL_DIALOG_BODY_ID: &str = "detail-dialog-body";
pub const DETAIL_DIALOG_CLOSE_ID: &str = "detail-dialog-close";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const TOAST_ID: &str = "toast";

pub const TOAST_DURATION_MS: u32 = 3000;
pub const PICKER_CANVAS_HEIGHT_CSS: &str = "24rem";
