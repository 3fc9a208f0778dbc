//! Color resource tables and indirect reference resolution
//!
//! Vector drawables may name their colors indirectly (`@color/accent`)
//! through one or more `colors.xml` resource files. This module builds the
//! name→value table from those files and resolves raw color attribute values
//! to the literal form SVG expects.
//!
//! Resolution quirks carried over from the drawable format:
//! - 8-digit hex literals carry the alpha channel in the *leading* pair;
//!   SVG wants it trailing, so `#AARRGGBB` becomes `#RRGGBBAA`.
//! - a reference to a name the table does not know resolves to the original
//!   unresolved token rather than failing, so one missing resource cannot
//!   abort an otherwise-convertible document.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::diagnostics::Diagnostics;
use crate::error::ConvertError;

/// Marker that a color value is a reference into the table
pub const REFERENCE_PREFIX: &str = "@color/";

/// Reference chains of two hops resolve; three or more are rejected.
const MAX_REFERENCE_DEPTH: usize = 3;

/// Name→value table assembled from `colors.xml` resource documents
///
/// Values are stored raw: either hex literals or further `@color/` references.
/// The table is built once per conversion and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    entries: HashMap<String, String>,
}

impl ColorTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table by merging resource documents in order
    ///
    /// Later documents override earlier ones for the same name; each
    /// collision is recorded as a warning.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = &'a str>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self, ConvertError> {
        let mut table = Self::new();
        for source in sources {
            table.merge_resources(source, diagnostics)?;
        }
        Ok(table)
    }

    /// Merge one `colors.xml` resource document into the table
    ///
    /// The document must contain a `<resources>` container; its `<color>`
    /// entries are inserted in document order. A `<color>` without a name
    /// attribute or without a text value is a fatal input error.
    pub fn merge_resources(
        &mut self,
        xml: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), ConvertError> {
        let mut reader = Reader::from_str(xml);
        let mut seen_resources = false;
        // nesting depth below the first <resources>; None while outside it
        let mut depth_inside: Option<usize> = None;
        let mut pending: Option<(String, Option<String>)> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match depth_inside {
                    Some(depth) => {
                        depth_inside = Some(depth + 1);
                        if e.name().as_ref() == b"color" {
                            pending = Some((name_attribute(&e)?, None));
                        } else if let Some((name, None)) = &pending {
                            // a child element where the text value was expected
                            return Err(missing_value(name));
                        }
                    }
                    None => {
                        if !seen_resources && e.name().as_ref() == b"resources" {
                            seen_resources = true;
                            depth_inside = Some(0);
                        }
                    }
                },
                Event::Empty(e) => {
                    if depth_inside.is_some() && e.name().as_ref() == b"color" {
                        return Err(missing_value(&name_attribute(&e)?));
                    }
                    if !seen_resources && e.name().as_ref() == b"resources" {
                        seen_resources = true;
                    }
                }
                Event::Text(t) => {
                    if let Some((_, value @ None)) = pending.as_mut() {
                        let text = t
                            .decode()
                            .map_err(|e| ConvertError::MalformedInput(e.to_string()))?;
                        *value = Some(text.into_owned());
                    }
                }
                Event::End(e) => match depth_inside {
                    // closing </resources>; only the first container counts
                    Some(0) => depth_inside = None,
                    Some(depth) => {
                        depth_inside = Some(depth - 1);
                        if e.name().as_ref() == b"color" {
                            if let Some((name, value)) = pending.take() {
                                let value = value.ok_or_else(|| missing_value(&name))?;
                                self.insert(name, value, diagnostics);
                            }
                        }
                    }
                    None => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_resources {
            return Err(ConvertError::MalformedInput(
                "color resource document has no resources element".into(),
            ));
        }
        Ok(())
    }

    /// Insert one entry, warning if it overrides an existing name
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        diagnostics: &mut Diagnostics,
    ) {
        let name = name.into();
        if let Some(previous) = self.entries.get(&name) {
            diagnostics.warn(format!("color {name} already exists: {previous}"));
        }
        self.entries.insert(name, value.into());
    }

    /// Look up the raw stored value for a name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a raw color attribute value to its literal form
    ///
    /// `#`-prefixed values return immediately (8-digit hex with the alpha
    /// pair moved to the end, anything else unchanged). `@color/` references
    /// are followed through the table for at most two hops; an unknown name
    /// resolves to the original unresolved token. A value that is neither a
    /// literal nor a reference is a `MalformedColorValue` error, and a chain
    /// of three or more hops is `ReferenceDepthExceeded`.
    pub fn resolve(&self, raw: &str) -> Result<String, ConvertError> {
        let mut value = raw;
        let mut depth = 1;
        loop {
            if let Some(digits) = value.strip_prefix('#') {
                if digits.len() == 8 && digits.is_ascii() {
                    // alpha leads in the drawable format, trails in SVG
                    return Ok(format!("#{}{}", &digits[2..8], &digits[..2]));
                }
                return Ok(value.to_string());
            }

            // checked before dereferencing so cyclic chains terminate
            if depth >= MAX_REFERENCE_DEPTH {
                return Err(ConvertError::ReferenceDepthExceeded(raw.to_string()));
            }

            let Some((_, name)) = value.split_once(REFERENCE_PREFIX) else {
                return Err(ConvertError::MalformedColorValue(value.to_string()));
            };

            match self.entries.get(name).map(String::as_str) {
                // missing names pass through unresolved rather than failing
                None | Some("") => return Ok(value.to_string()),
                Some(next) if next.contains(REFERENCE_PREFIX) => {
                    value = next;
                    depth += 1;
                }
                Some(next) => return Ok(next.to_string()),
            }
        }
    }
}

fn name_attribute(e: &BytesStart) -> Result<String, ConvertError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ConvertError::MalformedInput(e.to_string()))?;
        if attr.key.as_ref() == b"name" {
            let value = attr
                .unescape_value()
                .map_err(|e| ConvertError::MalformedInput(e.to_string()))?;
            return Ok(value.into_owned());
        }
    }
    Err(ConvertError::MalformedInput(
        "color resource entry is missing its name attribute".into(),
    ))
}

fn missing_value(name: &str) -> ConvertError {
    ConvertError::MalformedInput(format!("color resource '{name}' has no text value"))
}
