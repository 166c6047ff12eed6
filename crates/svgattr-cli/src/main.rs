//! svgattr: render JSON scene descriptions into SVG.
//!
//! Reads a scene file (see [`scene`]) and prints either a complete SVG
//! document or, with `--attributes`, just the composed `d` and
//! `transform` attribute values of every element.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin svgattr -- [OPTIONS] <SCENE_PATH>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod scene;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use svgattr::{MAX_PRECISION, WriteOptions};
use svgattr_export::{Element, ExportError, Positioned, SvgMetadata, to_svg};

use crate::scene::Scene;

/// Render SVG path data and transform attributes from a JSON scene.
#[derive(Parser)]
#[command(name = "svgattr", version)]
struct Cli {
    /// Path to the scene JSON file.
    scene_path: PathBuf,

    /// Fractional digits kept for every number (overrides the scene).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_PRECISION)))]
    precision: Option<u32>,

    /// Print only the attribute values, one element per line.
    #[arg(long)]
    attributes: bool,

    /// Write the output to a file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Document title (overrides the scene).
    #[arg(long)]
    title: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Render `d`/`transform` lines for every element, depth first.
fn attribute_lines(
    elements: &[Element],
    options: &WriteOptions,
    depth: usize,
    lines: &mut Vec<String>,
) -> Result<(), ExportError> {
    let indent = "  ".repeat(depth);
    for element in elements {
        match element {
            Element::Path(path) => {
                let d = path
                    .data()
                    .to_attribute(options)
                    .map_err(|source| ExportError::Path {
                        id: path.style.id.clone(),
                        source,
                    })?;
                let label = path.style.id.as_deref().unwrap_or("path");
                let transform = path.transform().to_string_with(options);
                lines.push(format!(
                    "{indent}{label}: d=\"{d}\" transform=\"{transform}\""
                ));
            }
            Element::Group(group) => {
                let label = group.style.id.as_deref().unwrap_or("g");
                let transform = group.transform().to_string_with(options);
                lines.push(format!("{indent}{label}: transform=\"{transform}\""));
                attribute_lines(group.children(), options, depth + 1, lines)?;
            }
        }
    }
    Ok(())
}

fn render(cli: &Cli, scene: &Scene) -> Result<String, ExportError> {
    let options = cli
        .precision
        .map_or(scene.options, WriteOptions::with_precision);
    options.validate()?;
    let elements = scene.build();
    log::debug!(
        "rendering {} top-level elements with precision {}",
        elements.len(),
        options.precision
    );

    if cli.attributes {
        let mut lines = Vec::new();
        attribute_lines(&elements, &options, 0, &mut lines)?;
        return Ok(lines.join("\n") + "\n");
    }

    let metadata = SvgMetadata {
        title: cli.title.as_deref().or(scene.title.as_deref()),
        description: scene.description.as_deref(),
    };
    to_svg(&elements, scene.width, scene.height, &metadata, &options)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let json = match std::fs::read_to_string(&cli.scene_path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.scene_path.display());
            return ExitCode::FAILURE;
        }
    };

    let scene = match Scene::from_json(&json) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", cli.scene_path.display());
            return ExitCode::FAILURE;
        }
    };

    let output = match render(&cli, &scene) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error rendering scene: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(ref path) = cli.output {
        if let Err(e) = std::fs::write(path, &output) {
            eprintln!("Error writing {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
        log::info!("wrote {} bytes to {}", output.len(), path.display());
    } else {
        print!("{output}");
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "width": 10,
        "height": 10,
        "elements": [
            {
                "kind": "group",
                "style": { "id": "root" },
                "transform": { "reverse_y": true },
                "children": [
                    {
                        "kind": "path",
                        "style": { "id": "edge" },
                        "commands": [
                            { "move_absolute": { "x": 0.123456789, "y": 0 } },
                            { "line_relative": { "dx": 1, "dy": 1 } }
                        ]
                    }
                ]
            }
        ]
    }"#;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("svgattr").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn attributes_mode_lists_elements() {
        let scene = Scene::from_json(SCENE).unwrap();
        let out = render(&cli(&["scene.json", "--attributes"]), &scene).unwrap();
        assert_eq!(
            out,
            "root: transform=\"scale(1, -1)\"\n  edge: d=\"M 0.123457 0 l 1 1\" transform=\"\"\n"
        );
    }

    #[test]
    fn precision_flag_overrides_scene() {
        let scene = Scene::from_json(SCENE).unwrap();
        let out = render(
            &cli(&["scene.json", "--attributes", "--precision", "2"]),
            &scene,
        )
        .unwrap();
        assert!(out.contains("d=\"M 0.12 0 l 1 1\""));
    }

    #[test]
    fn document_mode_uses_title_flag() {
        let scene = Scene::from_json(SCENE).unwrap();
        let out = render(&cli(&["scene.json", "--title", "cli"]), &scene).unwrap();
        assert!(out.contains("<title>cli</title>"));
        assert!(out.contains("<g"));
    }

    #[test]
    fn empty_path_fails_rendering() {
        let json = r#"{ "width": 1, "height": 1, "elements": [ { "kind": "path" } ] }"#;
        let scene = Scene::from_json(json).unwrap();
        assert!(render(&cli(&["scene.json", "--attributes"]), &scene).is_err());
        assert!(render(&cli(&["scene.json"]), &scene).is_err());
    }

    #[test]
    fn precision_flag_is_range_checked() {
        assert!(Cli::try_parse_from(["svgattr", "scene.json", "--precision", "16"]).is_err());
    }
}
