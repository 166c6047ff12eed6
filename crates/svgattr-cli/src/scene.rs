//! JSON scene descriptions.
//!
//! A scene lists elements with their path commands, transform clauses
//! and styles.  Loading a scene replays every command and clause through
//! the public building API, in file order.
//!
//! ```json
//! {
//!   "width": 100, "height": 100,
//!   "options": { "precision": 3 },
//!   "elements": [
//!     { "kind": "path",
//!       "style": { "id": "arc", "stroke": "black" },
//!       "transform": { "reverse_y": true, "clauses": [ { "translate": { "x": 0, "y": 100 } } ] },
//!       "commands": [ { "move_absolute": { "x": 0, "y": 0 } }, "close" ] }
//!   ]
//! }
//! ```

use serde::Deserialize;
use svgattr::{PathCommand, Transform, TransformOp, WriteOptions};
use svgattr_export::{Element, GroupElement, PathElement, Positioned, Style};

/// Top-level scene file.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Document width.
    pub width: f64,
    /// Document height.
    pub height: f64,
    /// Write options; the CLI `--precision` flag overrides them.
    #[serde(default)]
    pub options: WriteOptions,
    /// Optional document title.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional document description.
    #[serde(default)]
    pub description: Option<String>,
    /// Top-level elements in drawing order.
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

impl Scene {
    /// Parse a scene from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed or incomplete scenes.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build the top-level elements.
    #[must_use]
    pub fn build(&self) -> Vec<Element> {
        self.elements.iter().map(ElementSpec::build).collect()
    }
}

/// Transform clauses of one element.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransformSpec {
    /// Enable reverse-Y mode after adding the clauses.
    pub reverse_y: bool,
    /// Clauses in insertion order.
    pub clauses: Vec<TransformOp>,
}

impl TransformSpec {
    fn apply(&self, transform: &mut Transform) {
        for op in &self.clauses {
            transform.push(*op);
        }
        if self.reverse_y {
            transform.set_reverse_y(true);
        }
    }
}

/// One element of a scene.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementSpec {
    /// A `<path>` element.
    Path {
        /// Presentation attributes.
        #[serde(default)]
        style: Style,
        /// Transform clauses.
        #[serde(default)]
        transform: TransformSpec,
        /// Path commands in drawing order.
        #[serde(default)]
        commands: Vec<PathCommand>,
    },
    /// A `<g>` element.
    Group {
        /// Presentation attributes.
        #[serde(default)]
        style: Style,
        /// Transform clauses.
        #[serde(default)]
        transform: TransformSpec,
        /// Child elements.
        #[serde(default)]
        children: Vec<ElementSpec>,
    },
}

impl ElementSpec {
    fn build(&self) -> Element {
        match self {
            Self::Path {
                style,
                transform,
                commands,
            } => {
                let mut path = PathElement::with_style(style.clone());
                transform.apply(path.transform_mut());
                for command in commands {
                    path.path().push(*command);
                }
                path.into()
            }
            Self::Group {
                style,
                transform,
                children,
            } => {
                let mut group = GroupElement::with_style(style.clone());
                transform.apply(group.transform_mut());
                for child in children {
                    group.add(child.build());
                }
                group.into()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use svgattr_export::{SvgMetadata, to_svg};

    use super::*;

    const SCENE: &str = r#"{
        "width": 40,
        "height": 20,
        "title": "demo",
        "elements": [
            {
                "kind": "path",
                "style": { "id": "quarter", "stroke": "black" },
                "commands": [
                    { "move_then_arc": {
                        "center": { "x": 0, "y": 0 },
                        "start_angle": 0,
                        "end_angle": 1.5707963267948966,
                        "radii": { "circle": { "r": 10 } }
                    } }
                ]
            },
            {
                "kind": "group",
                "transform": {
                    "reverse_y": true,
                    "clauses": [ { "translate": { "x": 3, "y": 5 } } ]
                },
                "children": [
                    {
                        "kind": "path",
                        "commands": [
                            { "move_absolute": { "x": 0, "y": 0 } },
                            { "line_absolute": { "x": 4, "y": 0 } },
                            "close"
                        ]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn scene_parses_with_defaults() {
        let scene = Scene::from_json(SCENE).unwrap();
        assert_eq!(scene.options, WriteOptions::default());
        assert_eq!(scene.title.as_deref(), Some("demo"));
        assert_eq!(scene.elements.len(), 2);
    }

    #[test]
    fn scene_builds_elements() {
        let scene = Scene::from_json(SCENE).unwrap();
        let elements = scene.build();
        let Element::Path(quarter) = &elements[0] else {
            unreachable!("first element is a path");
        };
        assert_eq!(quarter.data().to_string(), "M 10 0 A 10 10 0 0 1 0 10");

        let Element::Group(group) = &elements[1] else {
            unreachable!("second element is a group");
        };
        assert_eq!(
            group.transform().to_string(),
            "translate(3, -5) scale(1, -1)"
        );
        assert_eq!(group.children().len(), 1);
    }

    #[test]
    fn scene_exports_to_svg() {
        let scene = Scene::from_json(SCENE).unwrap();
        let svg = to_svg(
            &scene.build(),
            scene.width,
            scene.height,
            &SvgMetadata::default(),
            &scene.options,
        )
        .unwrap();
        assert!(svg.contains(r#"d="M 0 0 L 4 0 Z""#));
        assert!(svg.contains(r#"id="quarter""#));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let json = r#"{ "width": 1, "height": 1, "elements": [ { "kind": "circle" } ] }"#;
        assert!(Scene::from_json(json).is_err());
    }
}
