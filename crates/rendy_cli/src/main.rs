//! Rendy - render one still frame of a sphere scene to an image file.
//!
//! Usage: rendy [--config scene.json] [--output render.png] [--single-threaded]

mod config;
mod output;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rendy_renderer::{render, render_parallel, Camera};

use crate::config::{load_config, SceneConfig};
use crate::output::save_image;

const USAGE: &str = "Usage: rendy [--config <scene.json>] [--output <file>] [--single-threaded]";

/// Command line options.
#[derive(Debug, Clone, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    output: PathBuf,
    single_threaded: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            config: None,
            output: PathBuf::from("render.png"),
            single_threaded: false,
        }
    }
}

/// Parse arguments (without the program name). `Ok(None)` means help was requested.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Option<Args>> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let value = args.next().context("--config needs a file path")?;
                parsed.config = Some(PathBuf::from(value));
            }
            "-o" | "--output" => {
                let value = args.next().context("--output needs a file path")?;
                parsed.output = PathBuf::from(value);
            }
            "--single-threaded" => parsed.single_threaded = true,
            "-h" | "--help" => return Ok(None),
            other => bail!("unexpected argument '{}'\n{}", other, USAGE),
        }
    }

    Ok(Some(parsed))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let Some(args) = parse_args(std::env::args().skip(1))? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let scene = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene file given, using the default scene");
            SceneConfig::default()
        }
    };

    if let Some(threads) = scene.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the worker pool")?;
    }

    let camera = Camera::new(&scene.render_params()).context("Invalid render settings")?;
    let world = scene.build_world();
    log::info!("Scene has {} surfaces", world.len());

    let start = Instant::now();
    let image = if args.single_threaded {
        let mut rng = StdRng::seed_from_u64(scene.seed);
        render(&camera, &world, &mut rng)
    } else {
        render_parallel(&camera, &world, scene.seed, scene.bucket_size)
    };
    log::info!("Frame finished in {:?}", start.elapsed());

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}
