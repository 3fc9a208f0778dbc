//! Error types for the conversion pipeline

use thiserror::Error;

/// Errors that abort the conversion of a document
///
/// All variants propagate to the caller; a conversion is never partially
/// recovered mid-document. An unresolved `@color/` reference is deliberately
/// not an error — resolution passes the token through unchanged.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input is not usable: a required element or attribute is missing
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A color attribute is neither a `#` literal nor an `@color/` reference
    #[error("malformed color value '{0}': expected a '#' literal or an @color/ reference")]
    MalformedColorValue(String),

    /// An indirect color reference chain exceeded two hops
    #[error("color reference chain too deep while resolving '{0}'")]
    ReferenceDepthExceeded(String),

    /// The input is not well-formed XML
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Read/write failure on a filesystem path
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
