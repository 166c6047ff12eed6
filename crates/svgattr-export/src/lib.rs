//! svgattr-export: SVG element layer and document serializer (sans-IO).
//!
//! Path and group elements own the attribute composers from
//! [`svgattr`] and turn them into [`svg`] crate nodes.  Currently the
//! only output format is an SVG document string.

pub mod element;
pub mod error;
pub mod svg;

pub use element::{Element, GroupElement, PathElement, Positioned, Style};
pub use error::ExportError;
pub use svg::{SvgMetadata, to_svg};
