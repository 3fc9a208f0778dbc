//! drawable2svg - convert vector drawable XML into SVG
//!
//! This library parses an Android vector drawable document, resolves
//! indirect color references through optional `colors.xml` resource tables,
//! maps the structure onto SVG elements, and serializes the result with a
//! fixed formatting convention.
//!
//! # Example
//!
//! ```rust
//! use drawable2svg::{convert_document, ColorTable, Diagnostics};
//!
//! let source = r#"<vector android:viewportWidth="24" android:viewportHeight="24">
//!     <path android:pathData="M0,0h24v24H0z"/>
//! </vector>"#;
//!
//! let mut diagnostics = Diagnostics::new();
//! let svg = convert_document(source, &ColorTable::new(), false, &mut diagnostics).unwrap();
//! assert!(svg.contains(r#"viewBox="0 0 24 24""#));
//! ```

pub mod colors;
pub mod diagnostics;
pub mod error;
pub mod mapper;
pub mod parser;
pub mod renderer;

pub use colors::ColorTable;
pub use diagnostics::Diagnostics;
pub use error::ConvertError;
pub use parser::{parse_drawable, Drawable};
pub use renderer::{write_document, Element};

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Options recognized by the conversion pipeline
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Emit only the viewBox on the output root, without width/height
    pub viewbox_only: bool,
    /// Directory to relocate output files into; default is alongside the input
    pub output_dir: Option<PathBuf>,
}

impl ConvertOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress explicit width/height on the output root
    pub fn with_viewbox_only(mut self, viewbox_only: bool) -> Self {
        self.viewbox_only = viewbox_only;
        self
    }

    /// Relocate output files into `dir`
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
}

/// Convert one drawable document to an SVG string
///
/// This is the embeddable core pipeline: parse, map against the supplied
/// color table, serialize. Warnings land in `diagnostics`.
pub fn convert_document(
    source: &str,
    colors: &ColorTable,
    viewbox_only: bool,
    diagnostics: &mut Diagnostics,
) -> Result<String, ConvertError> {
    let drawable = parser::parse_drawable(source)?;
    let svg = mapper::map_document(&drawable, colors, viewbox_only, diagnostics)?;
    Ok(renderer::write_document(&svg))
}

/// Convert a drawable read from `input`, resolving references through an
/// optional color resource stream
///
/// A pure stream-to-string entry point with no filesystem side effects.
/// Explicit width/height are always emitted.
pub fn convert_stream<R, C>(mut input: R, colors: Option<C>) -> Result<String, ConvertError>
where
    R: Read,
    C: Read,
{
    let mut source = String::new();
    input.read_to_string(&mut source)?;

    let mut diagnostics = Diagnostics::new();
    let table = match colors {
        Some(mut stream) => {
            let mut xml = String::new();
            stream.read_to_string(&mut xml)?;
            ColorTable::from_sources([xml.as_str()], &mut diagnostics)?
        }
        None => ColorTable::new(),
    };

    convert_document(&source, &table, false, &mut diagnostics)
}

/// Convert the drawable file at `input` and write the result
///
/// The output path is the input with its extension replaced by `.svg`,
/// relocated into `options.output_dir` when set. Returns the written path.
pub fn convert_file(
    input: &Path,
    colors: &ColorTable,
    options: &ConvertOptions,
    diagnostics: &mut Diagnostics,
) -> Result<PathBuf, ConvertError> {
    let source = fs::read_to_string(input)?;
    let svg = convert_document(&source, colors, options.viewbox_only, diagnostics)?;

    let mut output = input.with_extension("svg");
    if let Some(dir) = &options.output_dir {
        if let Some(file_name) = output.file_name() {
            output = dir.join(file_name);
        }
    }
    fs::write(&output, svg)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAWABLE: &str = r##"<vector android:viewportWidth="24" android:viewportHeight="24">
    <path android:pathData="M0,0h24v24H0z" android:fillColor="#FF112233"/>
</vector>"##;

    #[test]
    fn test_convert_document_minimal() {
        let mut diagnostics = Diagnostics::new();
        let svg = convert_document(DRAWABLE, &ColorTable::new(), false, &mut diagnostics).unwrap();
        assert!(svg.starts_with("<?xml version=\"1.0\" ?>\n<svg "));
        assert!(svg.contains(r#"width="24" height="24" viewBox="0 0 24 24""#));
        assert!(svg.contains(r##"fill="#112233FF""##));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_convert_document_viewbox_only() {
        let mut diagnostics = Diagnostics::new();
        let svg = convert_document(DRAWABLE, &ColorTable::new(), true, &mut diagnostics).unwrap();
        assert!(!svg.contains("width="));
        assert!(!svg.contains("height="));
        assert!(svg.contains(r#"viewBox="0 0 24 24""#));
    }

    #[test]
    fn test_convert_stream_with_colors() {
        let drawable = r#"<vector android:viewportWidth="8" android:viewportHeight="8">
            <path android:pathData="M1,1" android:fillColor="@color/accent"/>
        </vector>"#;
        let colors = r#"<resources><color name="accent">#00FF00</color></resources>"#;

        let svg = convert_stream(drawable.as_bytes(), Some(colors.as_bytes())).unwrap();
        assert!(svg.contains(r##"fill="#00FF00""##));
        // the stream entry point always emits explicit dimensions
        assert!(svg.contains(r#"width="8""#));
    }

    #[test]
    fn test_convert_stream_without_colors() {
        let svg = convert_stream::<_, &[u8]>(DRAWABLE.as_bytes(), None).unwrap();
        assert!(svg.contains(r#"viewBox="0 0 24 24""#));
    }

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_viewbox_only(true)
            .with_output_dir("/tmp/out");
        assert!(options.viewbox_only);
        assert_eq!(options.output_dir.as_deref(), Some(Path::new("/tmp/out")));
    }
}
