pub mod burst;
pub mod color;
pub mod constants;
pub mod contact;
pub mod detail;
pub mod experience;
pub mod field;
pub mod layout;
pub mod picker;
pub mod pop;

pub use burst::*;
pub use color::*;
pub use contact::*;
pub use detail::*;
pub use experience::*;
pub use field::*;
pub use layout::*;
pub use picker::*;
