//! Command-line renderer: load a scene description, render, save a PNG.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use glint_core::{load_scene, Scene};
use glint_renderer::render;

/// Parsed command-line options.
struct Args {
    /// Scene description path; the built-in demo scene when omitted
    scene: Option<PathBuf>,
    width: u32,
    height: u32,
    output: PathBuf,
}

const USAGE: &str = "usage: glint_cli [scene.json] [--size WxH] [-o output.png]";

fn parse_args() -> Result<Args> {
    let mut args = Args {
        scene: None,
        width: 512,
        height: 512,
        output: PathBuf::from("render.png"),
    };

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--size" => {
                let value = it.next().context(USAGE)?;
                let (w, h) = value.split_once('x').context("--size expects WxH")?;
                args.width = w.parse().context("--size expects WxH")?;
                args.height = h.parse().context("--size expects WxH")?;
                if args.width == 0 || args.height == 0 {
                    bail!("--size dimensions must be positive");
                }
            }
            "-o" | "--output" => {
                args.output = PathBuf::from(it.next().context(USAGE)?);
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ if arg.starts_with('-') => bail!("unknown option {arg}\n{USAGE}"),
            _ => {
                if args.scene.is_some() {
                    bail!("more than one scene file given\n{USAGE}");
                }
                args.scene = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(args)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = parse_args()?;

    let scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => {
            log::info!("no scene file given, rendering the built-in demo scene");
            Scene::demo()
        }
    };

    log::info!(
        "scene: {} spheres, {} lights, camera at {:?}",
        scene.sphere_count(),
        scene.light_count(),
        scene.camera
    );

    log::info!("rendering {}x{}...", args.width, args.height);
    let start = Instant::now();
    let bytes = render(&scene, args.width, args.height);
    log::info!("rendered in {:?}", start.elapsed());

    image::save_buffer(
        &args.output,
        &bytes,
        args.width,
        args.height,
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("failed to write {}", args.output.display()))?;

    log::info!("saved to {}", args.output.display());
    Ok(())
}
