pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_dialog_escape;
pub use pointer::{wire_client_click, wire_hover_scale, wire_local_click, wire_window_resize};
