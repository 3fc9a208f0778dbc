//! Output document tree and serialization

pub mod tree;
pub mod writer;

pub use tree::Element;
pub use writer::write_document;
