//! Center/angle arc resolution.
//!
//! SVG path data only knows the endpoint parameterization of an arc:
//! start point, radii, x-axis rotation, two flags and the end point.
//! Callers usually think in terms of a center and two angles instead.
//! [`resolve`] converts the latter into the former.
//!
//! ## Flag derivation
//!
//! - **sweep** is `1` for counterclockwise arcs, `0` for clockwise arcs.
//! - **large-arc** is `0` when `end_angle - start_angle < π`, otherwise
//!   `1`.  The comparison is the same for both directions, so a
//!   clockwise arc from `0` to `π/2` still reports a small arc.
//!
//! ## Vertical orientation
//!
//! For circular arcs the sine term is negated for clockwise arcs, so a
//! clockwise arc mirrors the counterclockwise one about the horizontal
//! line through the center.  Elliptical arcs apply no such mirroring;
//! their points come straight from the rotated ellipse equation.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::types::{Direction, Point};

/// Radii of an arc given in center/angle form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcRadii {
    /// Circular arc with a single radius.
    Circle {
        /// Radius.
        r: f64,
    },
    /// Elliptical arc.
    Ellipse {
        /// Radius along the (rotated) x-axis.
        rx: f64,
        /// Radius along the (rotated) y-axis.
        ry: f64,
        /// Rotation of the ellipse x-axis in radians.
        rotation: f64,
    },
}

/// An arc described by its center, start/end angles and radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpec {
    /// Center of the circle or ellipse.
    pub center: Point,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Circle radius or ellipse radii and rotation.
    pub radii: ArcRadii,
    /// Traversal direction.
    #[serde(default)]
    pub direction: Direction,
}

impl ArcSpec {
    /// Counterclockwise circular arc.
    #[must_use]
    pub const fn circle(cx: f64, cy: f64, start_angle: f64, end_angle: f64, r: f64) -> Self {
        Self {
            center: Point::new(cx, cy),
            start_angle,
            end_angle,
            radii: ArcRadii::Circle { r },
            direction: Direction::Counterclockwise,
        }
    }

    /// Counterclockwise elliptical arc; `rotation` is in radians.
    #[must_use]
    pub const fn ellipse(
        cx: f64,
        cy: f64,
        start_angle: f64,
        end_angle: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
    ) -> Self {
        Self {
            center: Point::new(cx, cy),
            start_angle,
            end_angle,
            radii: ArcRadii::Ellipse { rx, ry, rotation },
            direction: Direction::Counterclockwise,
        }
    }

    /// Replace the traversal direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// An arc in SVG endpoint parameterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcEndpoints {
    /// Point where the arc starts.
    pub start: Point,
    /// Point where the arc ends.
    pub end: Point,
    /// Radius along the x-axis.
    pub rx: f64,
    /// Radius along the y-axis.
    pub ry: f64,
    /// Rotation of the x-axis in degrees.
    pub rotation_degrees: f64,
    /// Large-arc flag.
    pub large_arc: bool,
    /// Sweep flag.
    pub sweep: bool,
}

/// Resolve a center/angle arc into endpoint form.
///
/// # Examples
///
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use svgattr::arc::{ArcSpec, resolve};
///
/// let arc = resolve(&ArcSpec::circle(0.0, 0.0, 0.0, FRAC_PI_2, 10.0));
/// assert!((arc.start.x - 10.0).abs() < 1e-12);
/// assert!((arc.end.y - 10.0).abs() < 1e-12);
/// assert!(arc.sweep);
/// assert!(!arc.large_arc);
/// ```
#[must_use]
pub fn resolve(spec: &ArcSpec) -> ArcEndpoints {
    let counterclockwise = spec.direction.is_counterclockwise();
    let large_arc = spec.end_angle - spec.start_angle >= PI;
    let center = spec.center;

    match spec.radii {
        ArcRadii::Circle { r } => {
            let flip = if counterclockwise { 1.0 } else { -1.0 };
            let point_at = |angle: f64| {
                Point::new(
                    r.mul_add(angle.cos(), center.x),
                    (flip * r).mul_add(angle.sin(), center.y),
                )
            };
            ArcEndpoints {
                start: point_at(spec.start_angle),
                end: point_at(spec.end_angle),
                rx: r,
                ry: r,
                rotation_degrees: 0.0,
                large_arc,
                sweep: counterclockwise,
            }
        }
        ArcRadii::Ellipse { rx, ry, rotation } => ArcEndpoints {
            start: ellipse_point(center, rx, ry, rotation, spec.start_angle),
            end: ellipse_point(center, rx, ry, rotation, spec.end_angle),
            rx,
            ry,
            rotation_degrees: rotation.to_degrees(),
            large_arc,
            sweep: counterclockwise,
        },
    }
}

/// Point at parameter `t` on an ellipse rotated by `phi`.
fn ellipse_point(center: Point, rx: f64, ry: f64, phi: f64, t: f64) -> Point {
    let (sin_t, cos_t) = t.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    Point::new(
        center.x + rx * cos_phi * cos_t - ry * sin_phi * sin_t,
        center.y + rx * sin_phi * cos_t + ry * cos_phi * sin_t,
    )
}
