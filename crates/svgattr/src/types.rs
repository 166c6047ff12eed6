//! Shared types for svgattr path and transform composition.

use serde::{Deserialize, Serialize};

/// A 2D point in user-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

/// Traversal direction of an arc given in center/angle form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Angles increase counterclockwise (sweep flag `1`).
    #[default]
    Counterclockwise,
    /// Angles increase clockwise (sweep flag `0`).
    Clockwise,
}

impl Direction {
    /// Map the conventional `counter_clockwise: bool` argument onto a
    /// direction.
    #[must_use]
    pub const fn from_counterclockwise(counterclockwise: bool) -> Self {
        if counterclockwise {
            Self::Counterclockwise
        } else {
            Self::Clockwise
        }
    }

    /// Returns `true` for [`Direction::Counterclockwise`].
    #[must_use]
    pub const fn is_counterclockwise(self) -> bool {
        matches!(self, Self::Counterclockwise)
    }
}

/// Errors raised while composing attribute values.
///
/// Every variant is a contract violation detected before any string is
/// produced; none of them is transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A spline was appended with the wrong number of operands.
    #[error("{command} requires exactly {expected} operands, got {actual}")]
    OperandCount {
        /// Name of the command being appended.
        command: &'static str,
        /// Number of operands the command takes.
        expected: usize,
        /// Number of operands supplied.
        actual: usize,
    },

    /// A coordinate list did not consist of complete `x y` pairs.
    #[error("coordinate list must contain x/y pairs, got {0} values")]
    OddCoordinateCount(usize),

    /// Path data was serialized by its owner while still empty.
    #[error("path data must not be empty")]
    EmptyPathData,

    /// Write options are invalid.
    #[error("invalid write options: {0}")]
    InvalidConfig(String),
}
