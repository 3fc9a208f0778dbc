//! Typed source tree for a parsed vector drawable
//!
//! Optional attributes stay `Option<String>` presence flags so the mapper
//! branches on defined/undefined fields instead of probing attributes
//! dynamically. All values are kept as raw strings; the conversion never
//! parses numbers or units.

/// A parsed vector drawable document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawable {
    /// Logical viewport width; required by the mapper, optional in the tree
    pub viewport_width: Option<String>,
    /// Logical viewport height; required by the mapper, optional in the tree
    pub viewport_height: Option<String>,
    /// Every group in the document, in document order, at any nesting depth
    pub groups: Vec<Group>,
    /// Paths that are direct children of the root element
    pub paths: Vec<VectorPath>,
}

/// A transform group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub translate_x: Option<String>,
    pub translate_y: Option<String>,
    /// Paths that are direct children of this group
    pub paths: Vec<VectorPath>,
}

impl Group {
    /// True if at least one declared translation is non-empty
    pub fn has_translation(&self) -> bool {
        let declared = |value: &Option<String>| {
            value.as_deref().is_some_and(|v| !v.is_empty())
        };
        declared(&self.translate_x) || declared(&self.translate_y)
    }
}

/// A path element with its geometry and presentation attributes
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPath {
    /// Geometry data, copied verbatim to the SVG `d` attribute
    pub data: String,
    pub fill_color: Option<String>,
    pub stroke_color: Option<String>,
    pub stroke_width: Option<String>,
    pub stroke_line_join: Option<String>,
    pub stroke_line_cap: Option<String>,
    pub stroke_miter_limit: Option<String>,
}

impl VectorPath {
    /// Create a path carrying only geometry data
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            fill_color: None,
            stroke_color: None,
            stroke_width: None,
            stroke_line_join: None,
            stroke_line_cap: None,
            stroke_miter_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_translation() {
        let mut group = Group::default();
        assert!(!group.has_translation());

        group.translate_x = Some("5".into());
        assert!(group.has_translation());

        // a declared-but-empty value does not count
        group.translate_x = Some(String::new());
        assert!(!group.has_translation());

        // "0" is declared and non-empty, so it still counts
        group.translate_y = Some("0".into());
        assert!(group.has_translation());
    }
}
