//! Event-based XML parse of a vector drawable into the source tree
//!
//! Paths are only collected when their immediate parent is the root element
//! or a group; anything nested deeper is skipped without error. Groups are
//! collected globally in document order regardless of nesting depth — a
//! group inside a group still becomes its own top-level entry, matching the
//! flat group handling of the conversion.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ConvertError;
use crate::parser::model::{Drawable, Group, VectorPath};

/// What the element on top of the open-element stack is, for deciding
/// whether a path is a direct child of a convertible container.
enum Scope {
    Root,
    Group(usize),
    Other,
}

/// Parse a vector drawable document
///
/// Fails on XML that is not well-formed, on a collected path without
/// geometry data, and on documents with no `vector` root element.
pub fn parse_drawable(xml: &str) -> Result<Drawable, ConvertError> {
    let mut reader = Reader::from_str(xml);
    let mut drawable = Drawable::default();
    let mut seen_root = false;
    let mut stack: Vec<Scope> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let scope = open_element(&e, &mut drawable, &mut seen_root, stack.last())?;
                stack.push(scope);
            }
            Event::Empty(e) => {
                open_element(&e, &mut drawable, &mut seen_root, stack.last())?;
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(ConvertError::MalformedInput(
            "document has no vector root element".into(),
        ));
    }
    Ok(drawable)
}

fn open_element(
    e: &BytesStart,
    drawable: &mut Drawable,
    seen_root: &mut bool,
    parent: Option<&Scope>,
) -> Result<Scope, ConvertError> {
    match e.name().as_ref() {
        b"vector" if !*seen_root => {
            *seen_root = true;
            for attr in attributes(e) {
                let (key, value) = attr?;
                match key.as_slice() {
                    b"android:viewportWidth" => drawable.viewport_width = Some(value),
                    b"android:viewportHeight" => drawable.viewport_height = Some(value),
                    _ => {}
                }
            }
            Ok(Scope::Root)
        }
        b"group" => {
            let mut group = Group::default();
            for attr in attributes(e) {
                let (key, value) = attr?;
                match key.as_slice() {
                    b"android:translateX" => group.translate_x = Some(value),
                    b"android:translateY" => group.translate_y = Some(value),
                    _ => {}
                }
            }
            drawable.groups.push(group);
            Ok(Scope::Group(drawable.groups.len() - 1))
        }
        b"path" => {
            match parent {
                Some(Scope::Root) => drawable.paths.push(parse_path(e)?),
                Some(&Scope::Group(index)) => drawable.groups[index].paths.push(parse_path(e)?),
                // deeper nesting is never converted
                _ => {}
            }
            Ok(Scope::Other)
        }
        _ => Ok(Scope::Other),
    }
}

fn parse_path(e: &BytesStart) -> Result<VectorPath, ConvertError> {
    let mut data = None;
    let mut path = VectorPath::new("");

    for attr in attributes(e) {
        let (key, value) = attr?;
        match key.as_slice() {
            b"android:pathData" => data = Some(value),
            b"android:fillColor" => path.fill_color = Some(value),
            b"android:strokeColor" => path.stroke_color = Some(value),
            b"android:strokeWidth" => path.stroke_width = Some(value),
            b"android:strokeLineJoin" => path.stroke_line_join = Some(value),
            b"android:strokeLineCap" => path.stroke_line_cap = Some(value),
            b"android:strokeMiterLimit" => path.stroke_miter_limit = Some(value),
            _ => {}
        }
    }

    path.data = data.ok_or_else(|| {
        ConvertError::MalformedInput("path element is missing android:pathData".into())
    })?;
    Ok(path)
}

/// Iterate an element's attributes as owned (key, unescaped value) pairs
fn attributes<'a>(
    e: &'a BytesStart<'a>,
) -> impl Iterator<Item = Result<(Vec<u8>, String), ConvertError>> + 'a {
    e.attributes().map(|attr| {
        let attr = attr.map_err(|e| ConvertError::MalformedInput(e.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| ConvertError::MalformedInput(e.to_string()))?;
        Ok((attr.key.as_ref().to_vec(), value.into_owned()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
        <vector xmlns:android="http://schemas.android.com/apk/res/android"
            android:viewportWidth="24"
            android:viewportHeight="24">
            <path android:pathData="M0,0h24v24H0z" android:fillColor="#FF0000"/>
        </vector>"##;

    #[test]
    fn test_parse_minimal_drawable() {
        let drawable = parse_drawable(MINIMAL).unwrap();
        assert_eq!(drawable.viewport_width.as_deref(), Some("24"));
        assert_eq!(drawable.viewport_height.as_deref(), Some("24"));
        assert!(drawable.groups.is_empty());
        assert_eq!(drawable.paths.len(), 1);
        assert_eq!(drawable.paths[0].data, "M0,0h24v24H0z");
        assert_eq!(drawable.paths[0].fill_color.as_deref(), Some("#FF0000"));
    }

    #[test]
    fn test_parse_group_attributes_and_direct_children() {
        let drawable = parse_drawable(
            r#"<vector android:viewportWidth="10" android:viewportHeight="10">
                <group android:translateX="5">
                    <path android:pathData="M1,1"/>
                </group>
                <path android:pathData="M2,2"/>
            </vector>"#,
        )
        .unwrap();
        assert_eq!(drawable.groups.len(), 1);
        assert_eq!(drawable.groups[0].translate_x.as_deref(), Some("5"));
        assert_eq!(drawable.groups[0].translate_y, None);
        assert_eq!(drawable.groups[0].paths.len(), 1);
        assert_eq!(drawable.groups[0].paths[0].data, "M1,1");
        assert_eq!(drawable.paths.len(), 1);
        assert_eq!(drawable.paths[0].data, "M2,2");
    }

    #[test]
    fn test_nested_groups_are_collected_in_document_order() {
        let drawable = parse_drawable(
            r#"<vector android:viewportWidth="10" android:viewportHeight="10">
                <group android:translateX="1">
                    <group android:translateX="2">
                        <path android:pathData="M9,9"/>
                    </group>
                </group>
            </vector>"#,
        )
        .unwrap();
        assert_eq!(drawable.groups.len(), 2);
        assert_eq!(drawable.groups[0].translate_x.as_deref(), Some("1"));
        assert_eq!(drawable.groups[1].translate_x.as_deref(), Some("2"));
        // the path belongs to its immediate parent, the inner group
        assert!(drawable.groups[0].paths.is_empty());
        assert_eq!(drawable.groups[1].paths.len(), 1);
    }

    #[test]
    fn test_deeply_nested_path_is_skipped() {
        let drawable = parse_drawable(
            r#"<vector android:viewportWidth="10" android:viewportHeight="10">
                <path android:pathData="M1,1">
                    <path android:pathData="M9,9"/>
                </path>
            </vector>"#,
        )
        .unwrap();
        assert_eq!(drawable.paths.len(), 1);
        assert_eq!(drawable.paths[0].data, "M1,1");
    }

    #[test]
    fn test_skipped_path_may_lack_geometry() {
        // a path that is never collected is never inspected either
        let drawable = parse_drawable(
            r##"<vector android:viewportWidth="10" android:viewportHeight="10">
                <clip-path>
                    <path android:fillColor="#FF0000"/>
                </clip-path>
            </vector>"##,
        )
        .unwrap();
        assert!(drawable.paths.is_empty());
    }

    #[test]
    fn test_collected_path_without_geometry_fails() {
        let err = parse_drawable(
            r##"<vector android:viewportWidth="10" android:viewportHeight="10">
                <path android:fillColor="#FF0000"/>
            </vector>"##,
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::MalformedInput(_)));
    }

    #[test]
    fn test_missing_vector_root_fails() {
        let err = parse_drawable(r#"<svg width="1" height="1"/>"#).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedInput(_)));
    }

    #[test]
    fn test_malformed_xml_fails() {
        let err = parse_drawable("<vector><path").unwrap_err();
        assert!(matches!(err, ConvertError::Xml(_)));
    }

    #[test]
    fn test_attribute_values_are_unescaped() {
        let drawable = parse_drawable(
            r#"<vector android:viewportWidth="10" android:viewportHeight="10">
                <path android:pathData="M0,0 &amp; more"/>
            </vector>"#,
        )
        .unwrap();
        assert_eq!(drawable.paths[0].data, "M0,0 & more");
    }
}
