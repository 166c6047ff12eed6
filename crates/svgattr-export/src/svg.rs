//! SVG document serializer.
//!
//! Wraps rendered elements in an `<svg>` root using the [`svg`] crate
//! for document construction and XML escaping.  The coordinate space is
//! `0 0 width height`.
//!
//! Optional [`SvgMetadata`] embeds `<title>` and `<desc>` elements.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use svg::Document;
use svg::node::Text;
use svg::node::element::{Description, Title};
use svgattr::WriteOptions;

use crate::element::Element;
use crate::error::ExportError;

/// Metadata to embed in the SVG document.
///
/// Both fields are optional.  When present, a `<title>` and/or `<desc>`
/// element is emitted immediately after the opening `<svg>` tag.
#[derive(Debug, Clone, Default)]
pub struct SvgMetadata<'a> {
    /// Document title, emitted as `<title>`.
    pub title: Option<&'a str>,

    /// Document description, emitted as `<desc>`.
    pub description: Option<&'a str>,
}

/// Serialize elements into an SVG document string.
///
/// Elements are rendered in order.  If any element fails, nothing is
/// produced and the first error is returned.
///
/// # Errors
///
/// Returns [`ExportError::Options`] if `options` are invalid, or the
/// first element error.
///
/// # Examples
///
/// ```
/// use svgattr::WriteOptions;
/// use svgattr_export::{PathElement, SvgMetadata, to_svg};
///
/// let mut path = PathElement::new();
/// path.path().move_to(10.0, 15.0).line_to(12.5, 18.3);
/// let metadata = SvgMetadata {
///     title: Some("segment"),
///     ..SvgMetadata::default()
/// };
/// let svg = to_svg(&[path.into()], 100.0, 50.0, &metadata, &WriteOptions::default()).unwrap();
/// assert!(svg.contains("<title>segment</title>"));
/// assert!(svg.contains(r#"d="M 10 15 L 12.5 18.3""#));
/// ```
pub fn to_svg(
    elements: &[Element],
    width: f64,
    height: f64,
    metadata: &SvgMetadata<'_>,
    options: &WriteOptions,
) -> Result<String, ExportError> {
    options.validate()?;

    let w = options.number(width);
    let h = options.number(height);
    let mut doc = Document::new()
        .set("width", w.as_str())
        .set("height", h.as_str())
        .set("viewBox", format!("0 0 {w} {h}"));

    // Optional <title> element
    if let Some(title) = metadata.title {
        doc = doc.add(Title::new(title));
    }

    // Optional <desc> element
    if let Some(description) = metadata.description {
        doc = doc.add(Description::new().add(Text::new(description)));
    }

    for element in elements {
        doc = doc.add(element.to_node(options)?);
    }
    log::debug!("assembled document with {} elements", elements.len());

    // The svg crate omits the XML declaration, so we prepend it.
    Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n"))
}
