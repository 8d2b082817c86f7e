//! Data model shared by adapters and the session.

mod analysis;
mod design;
mod image;

pub use analysis::*;
pub use design::*;
pub use image::*;
