//! Structural mapping from the source tree to the output tree
//!
//! The mapping is flat: every group in the document, at any nesting depth,
//! becomes its own `<g>` directly under the root, and root-level paths are
//! appended once after all groups rather than interleaved by source
//! position. Paths nested deeper than a direct group/root child never make
//! it into the source tree, so they are silently absent from the output.

use crate::colors::{ColorTable, REFERENCE_PREFIX};
use crate::diagnostics::Diagnostics;
use crate::error::ConvertError;
use crate::parser::model::{Drawable, Group, VectorPath};
use crate::renderer::tree::Element;

/// Namespace declared on every output root
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Build the output tree for a parsed drawable
///
/// With `viewbox_only` the explicit width/height attributes are suppressed;
/// the viewBox is emitted either way. Viewport width and height must be
/// present on the source root.
pub fn map_document(
    drawable: &Drawable,
    colors: &ColorTable,
    viewbox_only: bool,
    diagnostics: &mut Diagnostics,
) -> Result<Element, ConvertError> {
    let width = drawable.viewport_width.as_deref().ok_or_else(|| {
        ConvertError::MalformedInput("vector element is missing android:viewportWidth".into())
    })?;
    let height = drawable.viewport_height.as_deref().ok_or_else(|| {
        ConvertError::MalformedInput("vector element is missing android:viewportHeight".into())
    })?;

    let mut svg = Element::new("svg");
    svg.set_attribute("xmlns", SVG_NAMESPACE);
    if !viewbox_only {
        // copied verbatim; no unit conversion
        svg.set_attribute("width", width);
        svg.set_attribute("height", height);
    }
    svg.set_attribute("viewBox", format!("0 0 {width} {height}"));

    for group in &drawable.groups {
        svg.append_child(map_group(group, colors, diagnostics)?);
    }
    // root-level paths come after all groups
    for path in &drawable.paths {
        svg.append_child(map_path(path, colors, diagnostics)?);
    }

    Ok(svg)
}

fn map_group(
    group: &Group,
    colors: &ColorTable,
    diagnostics: &mut Diagnostics,
) -> Result<Element, ConvertError> {
    let mut g = Element::new("g");
    if group.has_translation() {
        let x = group.translate_x.as_deref().unwrap_or("0");
        let y = group.translate_y.as_deref().unwrap_or("0");
        g.set_attribute("transform", format!("translate({x},{y})"));
    }
    for path in &group.paths {
        g.append_child(map_path(path, colors, diagnostics)?);
    }
    Ok(g)
}

fn map_path(
    path: &VectorPath,
    colors: &ColorTable,
    diagnostics: &mut Diagnostics,
) -> Result<Element, ConvertError> {
    let mut out = Element::new("path");
    out.set_attribute("d", &path.data);

    match &path.fill_color {
        Some(raw) => {
            let fill = resolve_color(colors, raw, diagnostics)?;
            out.set_attribute("fill", fill);
        }
        None => out.set_attribute("fill", "none"),
    }

    if let Some(join) = &path.stroke_line_join {
        out.set_attribute("stroke-linejoin", join);
    }
    if let Some(cap) = &path.stroke_line_cap {
        out.set_attribute("stroke-linecap", cap);
    }
    if let Some(limit) = &path.stroke_miter_limit {
        out.set_attribute("stroke-miterlimit", limit);
    }
    if let Some(width) = &path.stroke_width {
        out.set_attribute("stroke-width", width);
    }
    if let Some(raw) = &path.stroke_color {
        let stroke = resolve_color(colors, raw, diagnostics)?;
        out.set_attribute("stroke", stroke);
    }

    Ok(out)
}

/// Resolve a color value, recording a warning when an unresolved reference
/// passes through to the output
fn resolve_color(
    colors: &ColorTable,
    raw: &str,
    diagnostics: &mut Diagnostics,
) -> Result<String, ConvertError> {
    let resolved = colors.resolve(raw)?;
    if resolved.contains(REFERENCE_PREFIX) {
        diagnostics.warn(format!(
            "unresolved color reference {resolved} passed through to the output"
        ));
    }
    Ok(resolved)
}
