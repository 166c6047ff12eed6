//! Transform attribute composition.
//!
//! A [`Transform`] collects `translate`, `scale` and `rotate` clauses in
//! insertion order and renders them space-separated.  Clauses that would
//! have no effect are dropped at render time:
//!
//! | Clause              | Dropped when      | Rendered as                          |
//! |---------------------|-------------------|--------------------------------------|
//! | `translate(x, y)`   | `x = 0` and `y = 0` | `translate(x)` if `y = 0`          |
//! | `scale(x, y)`       | `x = 1` and `y = 1` | `scale(x)` if `x = y`              |
//! | `rotate(a, px, py)` | `a mod 360 = 0`   | `rotate(a)` without a pivot          |
//!
//! ## Reverse-Y mode
//!
//! Drawings are often authored with the y-axis pointing up while SVG
//! points it down.  [`Transform::set_reverse_y`] marks every clause, both
//! existing and future ones, for vertical reversal: y components and
//! rotation angles are negated when rendered.  If the list holds no
//! scale clause at activation, an implicit `scale(1, -1)` is appended so
//! the result contains exactly one vertical flip.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::WriteOptions;
use crate::types::Point;

/// The operation of a single transform clause.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformOp {
    /// `translate(x, y)`
    Translate {
        /// Horizontal offset.
        x: f64,
        /// Vertical offset.
        #[serde(default)]
        y: f64,
    },
    /// `scale(x, y)`
    Scale {
        /// Horizontal factor.
        x: f64,
        /// Vertical factor.
        y: f64,
    },
    /// `rotate(angle, px, py)`
    Rotate {
        /// Angle in degrees.
        angle: f64,
        /// Optional rotation center.
        #[serde(default)]
        pivot: Option<Point>,
    },
}

/// A transform clause together with its vertical-reversal state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformClause {
    op: TransformOp,
    reverse_y: bool,
}

impl TransformClause {
    /// Create a clause.
    #[must_use]
    pub const fn new(op: TransformOp, reverse_y: bool) -> Self {
        Self { op, reverse_y }
    }

    /// The clause operation as originally added.
    #[must_use]
    pub const fn op(&self) -> TransformOp {
        self.op
    }

    /// Returns `true` if the y component is negated when rendered.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reverse_y
    }

    /// Render the clause, or the empty string when it has no effect.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn to_string_with(&self, options: &WriteOptions) -> String {
        let signed = |v: f64| if self.reverse_y { -v } else { v };
        let args = |values: &[f64]| options.numbers(values, ", ");

        match self.op {
            TransformOp::Translate { x, y } => {
                if x == 0.0 && y == 0.0 {
                    String::new()
                } else if y == 0.0 {
                    format!("translate({})", args(&[x]))
                } else {
                    format!("translate({})", args(&[x, signed(y)]))
                }
            }
            TransformOp::Scale { x, y } => {
                let y = signed(y);
                if x == 1.0 && y == 1.0 {
                    String::new()
                } else if x == y {
                    format!("scale({})", args(&[x]))
                } else {
                    format!("scale({})", args(&[x, y]))
                }
            }
            TransformOp::Rotate { angle, pivot } => {
                if angle % 360.0 == 0.0 {
                    return String::new();
                }
                let angle = signed(angle);
                match pivot {
                    None => format!("rotate({})", args(&[angle])),
                    Some(p) => format!("rotate({})", args(&[angle, p.x, signed(p.y)])),
                }
            }
        }
    }
}

/// Ordered transform clauses for a single element.
///
/// ```
/// use svgattr::Transform;
///
/// let mut t = Transform::new();
/// t.translate(10.0, 20.0).rotate(45.0).scale_uniform(2.0);
/// assert_eq!(t.to_string(), "translate(10, 20) rotate(45) scale(2)");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transform {
    clauses: Vec<TransformClause>,
    reverse_y: bool,
}

impl Transform {
    /// Create an empty transform.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clauses: Vec::new(),
            reverse_y: false,
        }
    }

    /// Returns `true` if no clause is present.
    ///
    /// A non-empty transform may still render as the empty string when
    /// every clause is an identity.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The clauses in insertion order.
    #[must_use]
    pub fn clauses(&self) -> &[TransformClause] {
        &self.clauses
    }

    /// Returns `true` while reverse-Y mode is active.
    #[must_use]
    pub const fn reverse_y(&self) -> bool {
        self.reverse_y
    }

    /// Append a clause, inheriting the current reverse-Y state.
    pub fn push(&mut self, op: TransformOp) -> &mut Self {
        self.clauses.push(TransformClause::new(op, self.reverse_y));
        self
    }

    /// Append `translate(x, y)`.
    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(TransformOp::Translate { x, y })
    }

    /// Append a horizontal-only `translate(x)`.
    pub fn translate_x(&mut self, x: f64) -> &mut Self {
        self.translate(x, 0.0)
    }

    /// Append `scale(x, y)`.
    pub fn scale(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(TransformOp::Scale { x, y })
    }

    /// Append a uniform `scale(s)`.
    pub fn scale_uniform(&mut self, s: f64) -> &mut Self {
        self.scale(s, s)
    }

    /// Append `rotate(angle)` about the origin; `angle` is in degrees.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.push(TransformOp::Rotate { angle, pivot: None })
    }

    /// Append `rotate(angle, px, py)`; `angle` is in degrees.
    pub fn rotate_about(&mut self, angle: f64, px: f64, py: f64) -> &mut Self {
        self.push(TransformOp::Rotate {
            angle,
            pivot: Some(Point::new(px, py)),
        })
    }

    /// Remove every clause.  Reverse-Y mode stays as it is.
    pub fn clear(&mut self) -> &mut Self {
        self.clauses.clear();
        self
    }

    /// Switch reverse-Y mode.
    ///
    /// Activating marks every existing clause as reversed, so clauses
    /// added before and after activation render with the same signs, and
    /// appends an implicit `scale(1, -1)` if no scale clause exists yet.
    ///
    /// Deactivating only affects clauses added afterwards.  Clauses that
    /// were already reversed stay reversed, including the implicit
    /// scale.
    pub fn set_reverse_y(&mut self, reverse_y: bool) -> &mut Self {
        self.reverse_y = reverse_y;
        if !reverse_y {
            log::debug!(
                "reverse-y deactivated; {} existing clauses keep their state",
                self.clauses.len()
            );
            return self;
        }

        let mut has_scale = false;
        for clause in &mut self.clauses {
            clause.reverse_y = true;
            has_scale |= matches!(clause.op, TransformOp::Scale { .. });
        }
        log::debug!("reverse-y activated over {} clauses", self.clauses.len());

        if !has_scale {
            log::debug!("appending implicit vertical flip");
            self.clauses.push(TransformClause::new(
                TransformOp::Scale { x: 1.0, y: 1.0 },
                true,
            ));
        }
        self
    }

    /// Render the `transform` attribute value, skipping identity clauses.
    #[must_use]
    pub fn to_string_with(&self, options: &WriteOptions) -> String {
        self.clauses
            .iter()
            .map(|clause| clause.to_string_with(options))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_owned()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&WriteOptions::default()))
    }
}
