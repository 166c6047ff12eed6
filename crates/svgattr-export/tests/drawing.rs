//! Integration test: build a small drawing through the element layer and export it.

#![allow(clippy::unwrap_used)]

use std::f64::consts::{FRAC_PI_2, PI};

use svgattr::{ArcSpec, Direction, WriteOptions};
use svgattr_export::{GroupElement, PathElement, Positioned, Style, SvgMetadata, to_svg};

fn stroked(id: &str) -> Style {
    Style {
        id: Some(id.to_owned()),
        stroke: Some("black".to_owned()),
        stroke_width: Some(0.5),
        fill: Some("none".to_owned()),
        ..Style::default()
    }
}

#[test]
fn flipped_drawing_to_svg() {
    // A y-up drawing: a quarter arc and a sector, flipped into SVG space.
    let mut arc = PathElement::with_style(stroked("arc"));
    arc.path()
        .move_and_arc(ArcSpec::circle(0.0, 0.0, 0.0, FRAC_PI_2, 10.0));

    let mut sector = PathElement::with_style(stroked("sector"));
    sector.rotate_about(45.0, 20.0, 20.0);
    sector
        .path()
        .move_to(20.0, 20.0)
        .line_and_arc(
            ArcSpec::circle(20.0, 20.0, 0.0, PI, 5.0).with_direction(Direction::Clockwise),
        )
        .close();

    let mut drawing = GroupElement::with_style(Style {
        id: Some("drawing".to_owned()),
        ..Style::default()
    });
    drawing.translate(0.0, 50.0).set_reverse_y(true);
    drawing.add(arc).add(sector);

    let metadata = SvgMetadata {
        title: Some("flipped"),
        description: Some("arc and sector"),
    };
    let svg = to_svg(&[drawing.into()], 50.0, 50.0, &metadata, &WriteOptions::default()).unwrap();

    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
    assert!(svg.contains("<title>flipped</title>"));
    assert!(svg.contains(r#"transform="translate(0, -50) scale(1, -1)""#));
    assert!(svg.contains(r#"d="M 10 0 A 10 10 0 0 1 0 10""#));
    assert!(svg.contains(r#"d="M 20 20 L 25 20 A 5 5 0 1 0 15 20 Z""#));
    assert!(svg.contains(r#"transform="rotate(45, 20, 20)""#));
    assert!(svg.contains(r#"stroke-width="0.5""#));
}

#[test]
fn precision_option_reaches_every_attribute() {
    let mut el = PathElement::new();
    el.translate(1.0 / 3.0, 0.0);
    el.path().move_to(2.0 / 3.0, 0.125);
    let svg = to_svg(
        &[el.into()],
        100.0 / 3.0,
        10.0,
        &SvgMetadata::default(),
        &WriteOptions::with_precision(2),
    )
    .unwrap();
    assert!(svg.contains(r#"d="M 0.67 0.12""#));
    assert!(svg.contains(r#"transform="translate(0.33)""#));
    assert!(svg.contains(r#"viewBox="0 0 33.33 10""#));
}
