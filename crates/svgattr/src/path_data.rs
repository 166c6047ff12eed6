//! Path data (`d` attribute) composition.
//!
//! A [`PathData`] is an ordered list of [`PathCommand`]s plus a closed
//! flag.  Commands are rendered in insertion order, separated by single
//! spaces, followed by `Z` when the path was closed:
//!
//! ```text
//! M 10 0 A 10 10 0 0 1 0 10 L 0 0 Z
//! ```
//!
//! Arcs given in center/angle form are resolved through
//! [`arc::resolve`](crate::arc::resolve) when the path is written.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arc::{self, ArcEndpoints, ArcSpec};
use crate::format::WriteOptions;
use crate::types::{Error, Point};

const QUADRATIC_OPERANDS: usize = 6;
const CUBIC_OPERANDS: usize = 8;

/// A single path-data command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathCommand {
    /// `M x y`
    MoveAbsolute {
        /// Absolute x-coordinate.
        x: f64,
        /// Absolute y-coordinate.
        y: f64,
    },
    /// `m dx dy`
    MoveRelative {
        /// Relative x offset.
        dx: f64,
        /// Relative y offset.
        dy: f64,
    },
    /// `L x y`
    LineAbsolute {
        /// Absolute x-coordinate.
        x: f64,
        /// Absolute y-coordinate.
        y: f64,
    },
    /// `l dx dy`
    LineRelative {
        /// Relative x offset.
        dx: f64,
        /// Relative y offset.
        dy: f64,
    },
    /// `A rx ry rotation large-arc sweep x y`, starting at the current
    /// point.
    ArcEndpoint {
        /// Radius along the x-axis.
        rx: f64,
        /// Radius along the y-axis.
        ry: f64,
        /// Rotation of the x-axis in degrees.
        rotation: f64,
        /// Large-arc flag.
        large_arc: bool,
        /// Sweep flag.
        sweep: bool,
        /// Absolute x-coordinate of the end point.
        x: f64,
        /// Absolute y-coordinate of the end point.
        y: f64,
    },
    /// `M start A ... end` for a center/angle arc.
    MoveThenArc(ArcSpec),
    /// `L start A ... end` for a center/angle arc.
    LineThenArc(ArcSpec),
    /// `M start Q control end`
    QuadraticSpline {
        /// Start point.
        start: Point,
        /// Control point.
        control: Point,
        /// End point.
        end: Point,
    },
    /// `M start C control1 control2 end`
    CubicSpline {
        /// Start point.
        start: Point,
        /// First control point.
        control1: Point,
        /// Second control point.
        control2: Point,
        /// End point.
        end: Point,
    },
    /// `Z`
    Close,
}

impl PathCommand {
    /// Build a quadratic spline from `[x0, y0, cx, cy, x1, y1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperandCount`] unless exactly six values are given.
    pub fn quadratic(coords: &[f64]) -> Result<Self, Error> {
        match *coords {
            [x0, y0, cx, cy, x1, y1] => Ok(Self::QuadraticSpline {
                start: Point::new(x0, y0),
                control: Point::new(cx, cy),
                end: Point::new(x1, y1),
            }),
            _ => Err(Error::OperandCount {
                command: "quadratic spline",
                expected: QUADRATIC_OPERANDS,
                actual: coords.len(),
            }),
        }
    }

    /// Build a cubic spline from `[x0, y0, c1x, c1y, c2x, c2y, x1, y1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperandCount`] unless exactly eight values are given.
    pub fn cubic(coords: &[f64]) -> Result<Self, Error> {
        match *coords {
            [x0, y0, c1x, c1y, c2x, c2y, x1, y1] => Ok(Self::CubicSpline {
                start: Point::new(x0, y0),
                control1: Point::new(c1x, c1y),
                control2: Point::new(c2x, c2y),
                end: Point::new(x1, y1),
            }),
            _ => Err(Error::OperandCount {
                command: "cubic spline",
                expected: CUBIC_OPERANDS,
                actual: coords.len(),
            }),
        }
    }

    /// Render this command.
    #[must_use]
    pub fn to_string_with(&self, options: &WriteOptions) -> String {
        let n = |values: &[f64]| options.numbers(values, " ");
        match *self {
            Self::MoveAbsolute { x, y } => format!("M {}", n(&[x, y])),
            Self::MoveRelative { dx, dy } => format!("m {}", n(&[dx, dy])),
            Self::LineAbsolute { x, y } => format!("L {}", n(&[x, y])),
            Self::LineRelative { dx, dy } => format!("l {}", n(&[dx, dy])),
            Self::ArcEndpoint {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                x,
                y,
            } => format!(
                "A {} {} {} {}",
                n(&[rx, ry, rotation]),
                flag(large_arc),
                flag(sweep),
                n(&[x, y]),
            ),
            Self::MoveThenArc(spec) => arc_clause("M", &arc::resolve(&spec), options),
            Self::LineThenArc(spec) => arc_clause("L", &arc::resolve(&spec), options),
            Self::QuadraticSpline {
                start,
                control,
                end,
            } => format!(
                "M {} Q {}",
                n(&[start.x, start.y]),
                n(&[control.x, control.y, end.x, end.y]),
            ),
            Self::CubicSpline {
                start,
                control1,
                control2,
                end,
            } => format!(
                "M {} C {}",
                n(&[start.x, start.y]),
                n(&[
                    control1.x, control1.y, control2.x, control2.y, end.x, end.y,
                ]),
            ),
            Self::Close => "Z".to_owned(),
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&WriteOptions::default()))
    }
}

const fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

fn arc_clause(letter: &str, arc: &ArcEndpoints, options: &WriteOptions) -> String {
    let n = |values: &[f64]| options.numbers(values, " ");
    format!(
        "{letter} {} A {} {} {} {}",
        n(&[arc.start.x, arc.start.y]),
        n(&[arc.rx, arc.ry, arc.rotation_degrees]),
        flag(arc.large_arc),
        flag(arc.sweep),
        n(&[arc.end.x, arc.end.y]),
    )
}

/// Ordered path-data commands for a single path-like shape.
///
/// Building methods return `&mut Self` so calls can be chained:
///
/// ```
/// use svgattr::PathData;
///
/// let mut d = PathData::new();
/// d.move_to(0.0, 0.0).line_to(10.0, 0.0).line_by(0.0, 5.5).close();
/// assert_eq!(d.to_string(), "M 0 0 L 10 0 l 0 5.5 Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
    closed: bool,
}

impl PathData {
    /// Create empty path data.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
            closed: false,
        }
    }

    /// Returns `true` if no command has been appended.
    ///
    /// Closing an empty path does not make it non-empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of appended commands, not counting the close marker.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` once [`close`](Self::close) has been called.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// The appended commands in insertion order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Append an already-built command.
    ///
    /// [`PathCommand::Close`] sets the closed flag instead of being
    /// stored, so the close marker is always rendered last.
    pub fn push(&mut self, command: PathCommand) -> &mut Self {
        if command == PathCommand::Close {
            return self.close();
        }
        self.commands.push(command);
        self
    }

    /// Append `M x y`.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::MoveAbsolute { x, y })
    }

    /// Append `m dx dy`.
    pub fn move_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.push(PathCommand::MoveRelative { dx, dy })
    }

    /// Append `L x y`.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::LineAbsolute { x, y })
    }

    /// Append `l dx dy`.
    pub fn line_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.push(PathCommand::LineRelative { dx, dy })
    }

    /// Append `M from L to`.
    pub fn line_segment(&mut self, from_x: f64, from_y: f64, to_x: f64, to_y: f64) -> &mut Self {
        self.move_to(from_x, from_y).line_to(to_x, to_y)
    }

    /// Append an endpoint-form arc from the current point.
    ///
    /// The values are written as given; nothing checks that they
    /// describe a reachable arc or that a current point exists.
    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.push(PathCommand::ArcEndpoint {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            x,
            y,
        })
    }

    /// Append a move to the arc start followed by the arc.
    pub fn move_and_arc(&mut self, spec: ArcSpec) -> &mut Self {
        self.push(PathCommand::MoveThenArc(spec))
    }

    /// Append a line to the arc start followed by the arc.
    pub fn line_and_arc(&mut self, spec: ArcSpec) -> &mut Self {
        self.push(PathCommand::LineThenArc(spec))
    }

    /// Append a quadratic spline given as `[x0, y0, cx, cy, x1, y1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperandCount`] unless exactly six values are
    /// given; the path is left unchanged.
    pub fn quadratic_spline(&mut self, coords: &[f64]) -> Result<&mut Self, Error> {
        let command = PathCommand::quadratic(coords)?;
        Ok(self.push(command))
    }

    /// Append a cubic spline given as `[x0, y0, c1x, c1y, c2x, c2y, x1, y1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperandCount`] unless exactly eight values are
    /// given; the path is left unchanged.
    pub fn cubic_spline(&mut self, coords: &[f64]) -> Result<&mut Self, Error> {
        let command = PathCommand::cubic(coords)?;
        Ok(self.push(command))
    }

    /// Append a polyline through `[x0, y0, x1, y1, ...]`.
    ///
    /// The first point is a move when `first_is_move` is `true`,
    /// otherwise a line.  An empty slice appends nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OddCoordinateCount`] if the slice length is odd;
    /// the path is left unchanged.
    pub fn points(&mut self, first_is_move: bool, coords: &[f64]) -> Result<&mut Self, Error> {
        if coords.len() % 2 != 0 {
            return Err(Error::OddCoordinateCount(coords.len()));
        }
        for (i, pair) in coords.chunks_exact(2).enumerate() {
            if i == 0 && first_is_move {
                self.move_to(pair[0], pair[1]);
            } else {
                self.line_to(pair[0], pair[1]);
            }
        }
        Ok(self)
    }

    /// Mark the path as closed.  Repeated calls have no further effect.
    pub const fn close(&mut self) -> &mut Self {
        self.closed = true;
        self
    }

    /// Close the path only when `close` is `true`.
    pub const fn close_if(&mut self, close: bool) -> &mut Self {
        if close {
            self.closed = true;
        }
        self
    }

    /// Render the `d` attribute value.
    ///
    /// An empty, unclosed path renders as the empty string; owners that
    /// require content should use [`to_attribute`](Self::to_attribute).
    #[must_use]
    pub fn to_string_with(&self, options: &WriteOptions) -> String {
        let mut parts: Vec<String> = self
            .commands
            .iter()
            .map(|command| command.to_string_with(options))
            .collect();
        if self.closed {
            parts.push(PathCommand::Close.to_string_with(options));
        }
        let d = parts.join(" ");
        log::trace!("path data with {} commands: {d}", self.commands.len());
        d.trim().to_owned()
    }

    /// Render the `d` attribute value for an owning element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPathData`] if no command was appended, or
    /// [`Error::InvalidConfig`] if `options` are invalid.
    pub fn to_attribute(&self, options: &WriteOptions) -> Result<String, Error> {
        options.validate()?;
        if self.is_empty() {
            return Err(Error::EmptyPathData);
        }
        Ok(self.to_string_with(options))
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&WriteOptions::default()))
    }
}
