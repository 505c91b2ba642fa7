//! SVG document reader
//!
//! Streams the document with quick-xml's namespace-aware reader and picks
//! out labeled `path` elements in document order. Nothing else about the
//! SVG is interpreted: transforms, styles and units are ignored.

pub mod config;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::error::ExtractError;

pub use config::{DocumentConfig, INKSCAPE_NAMESPACE};

/// The SVG namespace path elements must belong to
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A labeled path element as found in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledPath {
    pub label: String,
    /// Raw `d` attribute
    pub data: String,
}

/// Collect labeled SVG path elements in document order
///
/// Paths without a label, or with an empty one, are skipped. A labeled path
/// without path data is an error.
pub fn read_labeled_paths(
    svg: &str,
    config: &DocumentConfig,
) -> Result<Vec<LabeledPath>, ExtractError> {
    let mut reader = NsReader::from_str(svg);
    let mut paths = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Start(element) | Event::Empty(element) => {
                if depth == 0 {
                    if seen_root {
                        return Err(ExtractError::malformed("more than one root element"));
                    }
                    seen_root = true;
                }

                let in_scope = depth == 1 || (config.nested_paths && depth > 1);
                if in_scope && is_svg_path(&reader, element) {
                    if let Some(path) = labeled_path(&reader, element, config)? {
                        log::trace!("found path '{}'", path.label);
                        paths.push(path);
                    }
                }

                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(ExtractError::malformed("no root element"));
    }
    if depth != 0 {
        return Err(ExtractError::malformed("unexpected end of document"));
    }

    Ok(paths)
}

fn is_svg_path(reader: &NsReader<&[u8]>, element: &BytesStart) -> bool {
    let (ns, local) = reader.resolve_element(element.name());
    matches!(ns, ResolveResult::Bound(Namespace(ns)) if ns == SVG_NAMESPACE.as_bytes())
        && local.as_ref() == b"path"
}

fn labeled_path(
    reader: &NsReader<&[u8]>,
    element: &BytesStart,
    config: &DocumentConfig,
) -> Result<Option<LabeledPath>, ExtractError> {
    let mut label = None;
    let mut data = None;

    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let (ns, local) = reader.resolve_attribute(attr.key);
        match ns {
            ResolveResult::Bound(Namespace(ns))
                if ns == config.label_namespace.as_bytes()
                    && local.as_ref() == config.label_attribute.as_bytes() =>
            {
                label = Some(attr.unescape_value()?.into_owned());
            }
            ResolveResult::Unbound if local.as_ref() == b"d" => {
                data = Some(attr.unescape_value()?.into_owned());
            }
            _ => {}
        }
    }

    let label = match label {
        Some(label) if !label.is_empty() => label,
        _ => return Ok(None),
    };
    let data = data.ok_or_else(|| ExtractError::MissingPathData {
        label: label.clone(),
    })?;

    Ok(Some(LabeledPath { label, data }))
}
