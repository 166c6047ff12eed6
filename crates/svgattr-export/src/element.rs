//! Path and group elements that own their attribute composers.
//!
//! Each element owns exactly one [`Transform`]; a [`PathElement`] also
//! owns one [`PathData`].  Styling fields are copied onto the output
//! element only when set.  Nodes are produced with the [`svg`] crate.

use serde::{Deserialize, Serialize};
use svg::node::Node;
use svg::node::element::{Group, Path};
use svgattr::{PathData, Transform, WriteOptions};

use crate::error::ExportError;

/// Optional presentation attributes shared by every element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// `id` attribute.
    pub id: Option<String>,
    /// `class` attribute.
    pub class: Option<String>,
    /// `stroke` paint.
    pub stroke: Option<String>,
    /// `stroke-width`; only emitted when positive.
    pub stroke_width: Option<f64>,
    /// `stroke-dasharray`, written verbatim.
    pub stroke_dasharray: Option<String>,
    /// `fill` paint.
    pub fill: Option<String>,
}

impl Style {
    /// Copy the set fields onto `node`.
    fn apply<N: Node>(&self, node: &mut N, options: &WriteOptions) {
        let text_attrs = [
            ("id", &self.id),
            ("class", &self.class),
            ("stroke", &self.stroke),
            ("stroke-dasharray", &self.stroke_dasharray),
            ("fill", &self.fill),
        ];
        for (name, value) in text_attrs {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                node.assign(name, value);
            }
        }
        if let Some(width) = self.stroke_width.filter(|w| *w > 0.0) {
            node.assign("stroke-width", options.number(width));
        }
    }
}

/// Elements that own a [`Transform`].
///
/// The provided methods append clauses and return the element, so
/// transform calls chain with element-specific calls:
///
/// ```
/// use svgattr_export::{PathElement, Positioned};
///
/// let mut el = PathElement::new();
/// el.translate(10.0, 0.0).rotate(90.0);
/// el.path().move_to(0.0, 0.0).line_to(1.0, 1.0);
/// assert_eq!(el.transform().to_string(), "translate(10) rotate(90)");
/// ```
pub trait Positioned {
    /// The owned transform.
    fn transform(&self) -> &Transform;

    /// Mutable access to the owned transform.
    fn transform_mut(&mut self) -> &mut Transform;

    /// Append `translate(x, y)`.
    fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.transform_mut().translate(x, y);
        self
    }

    /// Append `translate(x)`.
    fn translate_x(&mut self, x: f64) -> &mut Self {
        self.transform_mut().translate_x(x);
        self
    }

    /// Append `scale(x, y)`.
    fn scale(&mut self, x: f64, y: f64) -> &mut Self {
        self.transform_mut().scale(x, y);
        self
    }

    /// Append `scale(s)`.
    fn scale_uniform(&mut self, s: f64) -> &mut Self {
        self.transform_mut().scale_uniform(s);
        self
    }

    /// Append `rotate(angle)`.
    fn rotate(&mut self, angle: f64) -> &mut Self {
        self.transform_mut().rotate(angle);
        self
    }

    /// Append `rotate(angle, px, py)`.
    fn rotate_about(&mut self, angle: f64, px: f64, py: f64) -> &mut Self {
        self.transform_mut().rotate_about(angle, px, py);
        self
    }

    /// Switch reverse-Y mode; see [`Transform::set_reverse_y`].
    fn set_reverse_y(&mut self, reverse_y: bool) -> &mut Self {
        self.transform_mut().set_reverse_y(reverse_y);
        self
    }
}

fn assign_transform<N: Node>(node: &mut N, transform: &Transform, options: &WriteOptions) {
    let value = transform.to_string_with(options);
    if !value.is_empty() {
        node.assign("transform", value);
    }
}

/// A `<path>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathElement {
    data: PathData,
    transform: Transform,
    /// Presentation attributes.
    pub style: Style,
}

impl PathElement {
    /// Create an element with empty path data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element with the given style.
    #[must_use]
    pub fn with_style(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// The path data built so far.
    #[must_use]
    pub const fn data(&self) -> &PathData {
        &self.data
    }

    /// Mutable access to the path data, for chaining path commands.
    pub const fn path(&mut self) -> &mut PathData {
        &mut self.data
    }

    /// Build the `<path>` node.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Path`] if the path data is empty or
    /// `options` are invalid.
    pub fn to_node(&self, options: &WriteOptions) -> Result<Path, ExportError> {
        let d = self.data.to_attribute(options).map_err(|source| {
            log::debug!("rejecting path {:?}: {source}", self.style.id);
            ExportError::Path {
                id: self.style.id.clone(),
                source,
            }
        })?;

        let mut node = Path::new();
        self.style.apply(&mut node, options);
        assign_transform(&mut node, &self.transform, options);
        node.assign("d", d);
        Ok(node)
    }
}

impl Positioned for PathElement {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

/// A `<g>` element grouping other elements under one transform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupElement {
    children: Vec<Element>,
    transform: Transform,
    /// Presentation attributes.
    pub style: Style,
}

impl GroupElement {
    /// Create an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty group with the given style.
    #[must_use]
    pub fn with_style(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Append a child element.
    pub fn add(&mut self, child: impl Into<Element>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// The child elements in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Build the `<g>` node and all of its children.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a child; no partial group is
    /// produced.
    pub fn to_node(&self, options: &WriteOptions) -> Result<Group, ExportError> {
        let mut node = Group::new();
        self.style.apply(&mut node, options);
        assign_transform(&mut node, &self.transform, options);
        for child in &self.children {
            node.append(child.to_node(options)?);
        }
        Ok(node)
    }
}

impl Positioned for GroupElement {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

/// Any element the document serializer accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A `<path>`.
    Path(PathElement),
    /// A `<g>`.
    Group(GroupElement),
}

impl Element {
    /// Build the SVG node for this element.
    ///
    /// # Errors
    ///
    /// Propagates [`PathElement::to_node`] and [`GroupElement::to_node`]
    /// errors.
    pub fn to_node(&self, options: &WriteOptions) -> Result<Box<dyn Node>, ExportError> {
        Ok(match self {
            Self::Path(path) => Box::new(path.to_node(options)?),
            Self::Group(group) => Box::new(group.to_node(options)?),
        })
    }
}

impl From<PathElement> for Element {
    fn from(path: PathElement) -> Self {
        Self::Path(path)
    }
}

impl From<GroupElement> for Element {
    fn from(group: GroupElement) -> Self {
        Self::Group(group)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use svgattr::ArcSpec;

    use super::*;

    fn options() -> WriteOptions {
        WriteOptions::default()
    }

    fn triangle() -> PathElement {
        let mut el = PathElement::new();
        el.path()
            .points(true, &[0.0, 0.0, 10.0, 0.0, 5.0, 8.0])
            .unwrap()
            .close();
        el
    }

    #[test]
    fn path_node_carries_d() {
        let node = triangle().to_node(&options()).unwrap().to_string();
        assert!(node.starts_with("<path"));
        assert!(node.contains(r#"d="M 0 0 L 10 0 L 5 8 Z""#));
        assert!(!node.contains("transform="));
    }

    #[test]
    fn empty_path_is_rejected() {
        let mut el = PathElement::with_style(Style {
            id: Some("nothing".to_owned()),
            ..Style::default()
        });
        el.path().close();
        assert_eq!(
            el.to_node(&options()).unwrap_err(),
            ExportError::Path {
                id: Some("nothing".to_owned()),
                source: svgattr::Error::EmptyPathData,
            }
        );
    }

    #[test]
    fn invalid_options_are_rejected() {
        let err = triangle()
            .to_node(&WriteOptions::with_precision(99))
            .unwrap_err();
        assert!(matches!(
            err,
            ExportError::Path {
                source: svgattr::Error::InvalidConfig(_),
                ..
            }
        ));
    }

    #[test]
    fn transform_is_emitted_when_non_trivial() {
        let mut el = triangle();
        el.translate(3.0, 5.0).set_reverse_y(true);
        let node = el.to_node(&options()).unwrap().to_string();
        assert!(node.contains(r#"transform="translate(3, -5) scale(1, -1)""#));
    }

    #[test]
    fn identity_transform_is_omitted() {
        let mut el = triangle();
        el.scale_uniform(1.0).translate(0.0, 0.0).rotate(360.0);
        let node = el.to_node(&options()).unwrap().to_string();
        assert!(!node.contains("transform="));
    }

    #[test]
    fn style_fields_are_copied_when_set() {
        let mut el = PathElement::with_style(Style {
            id: Some("arc".to_owned()),
            class: Some("outline".to_owned()),
            stroke: Some("black".to_owned()),
            stroke_width: Some(0.25),
            stroke_dasharray: Some("4 2".to_owned()),
            fill: Some("none".to_owned()),
        });
        el.path()
            .move_and_arc(ArcSpec::circle(0.0, 0.0, 0.0, FRAC_PI_2, 10.0));
        let node = el.to_node(&options()).unwrap().to_string();
        assert!(node.contains(r#"id="arc""#));
        assert!(node.contains(r#"class="outline""#));
        assert!(node.contains(r#"stroke="black""#));
        assert!(node.contains(r#"stroke-width="0.25""#));
        assert!(node.contains(r#"stroke-dasharray="4 2""#));
        assert!(node.contains(r#"fill="none""#));
        assert!(node.contains(r#"d="M 10 0 A 10 10 0 0 1 0 10""#));
    }

    #[test]
    fn unset_and_empty_style_fields_are_skipped() {
        let mut el = triangle();
        el.style.stroke = Some(String::new());
        el.style.stroke_width = Some(0.0);
        let node = el.to_node(&options()).unwrap().to_string();
        assert!(!node.contains("stroke"));
        assert!(!node.contains("id="));
    }

    #[test]
    fn group_wraps_children() {
        let mut group = GroupElement::with_style(Style {
            id: Some("g1".to_owned()),
            ..Style::default()
        });
        group.translate_x(5.0).add(triangle()).add(triangle());
        let node = group.to_node(&options()).unwrap().to_string();
        assert!(node.starts_with("<g"));
        assert!(node.contains(r#"id="g1""#));
        assert!(node.contains(r#"transform="translate(5)""#));
        assert_eq!(node.matches("<path").count(), 2);
        assert_eq!(group.children().len(), 2);
    }

    #[test]
    fn group_fails_when_a_child_fails() {
        let mut inner = GroupElement::new();
        inner.add(PathElement::new());
        let mut outer = GroupElement::new();
        outer.add(triangle()).add(inner);
        assert!(matches!(
            outer.to_node(&options()),
            Err(ExportError::Path { id: None, .. })
        ));
    }

    #[test]
    fn positioned_chains_return_the_element() {
        let mut el = triangle();
        el.translate(1.0, 2.0)
            .rotate_about(90.0, 1.0, 1.0)
            .scale(2.0, 3.0);
        assert_eq!(
            el.transform().to_string(),
            "translate(1, 2) rotate(90, 1, 1) scale(2, 3)"
        );
    }
}
