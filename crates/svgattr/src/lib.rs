//! svgattr: SVG path data and transform attribute composition (sans-IO).
//!
//! Produces the string values of the `d` and `transform` attributes:
//!
//! - [`PathData`] collects move/line/arc/spline commands and renders the
//!   path-data mini-language, resolving center/angle arcs into SVG's
//!   endpoint parameterization via [`arc::resolve`].
//! - [`Transform`] collects translate/scale/rotate clauses, including a
//!   reverse-Y mode that flips the vertical axis of every clause.
//! - [`format::format_number`] is the single, locale-independent path
//!   every emitted number goes through.
//!
//! This crate builds no XML and performs no I/O.  Element and document
//! assembly lives in `svgattr-export`.

pub mod arc;
pub mod format;
pub mod path_data;
pub mod transform;
pub mod types;

pub use arc::{ArcEndpoints, ArcRadii, ArcSpec};
pub use format::{DEFAULT_PRECISION, MAX_PRECISION, WriteOptions};
pub use path_data::{PathCommand, PathData};
pub use transform::{Transform, TransformClause, TransformOp};
pub use types::{Direction, Error, Point};
