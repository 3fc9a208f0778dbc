//! Source document parsing

pub mod model;
pub mod xml;

pub use model::{Drawable, Group, VectorPath};
pub use xml::parse_drawable;
