use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_core::load_scene;
use lumen_renderer::{render, Camera, RenderConfig, World};

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Render a JSON scene with the Whitted ray tracer
#[derive(Parser, Debug)]
#[command(name = "lumen", version)]
struct Args {
    /// Scene file (JSON)
    scene: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Image width in pixels (overrides the scene file)
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels (overrides the scene file)
    #[arg(long)]
    height: Option<u32>,

    /// Maximum recursion depth (overrides the scene file)
    #[arg(long)]
    max_depth: Option<u32>,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Logging level; RUST_LOG still applies per module
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    let mut scene = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    if let Some(width) = args.width {
        scene.image.width = width;
    }
    if let Some(height) = args.height {
        scene.image.height = height;
    }
    if let Some(max_depth) = args.max_depth {
        scene.render.max_depth = max_depth;
    }
    scene.validate().context("Invalid render settings")?;

    let world = World::from_description(&scene)?;
    let camera = Camera::new(scene.image.width, scene.image.height).with_fov(scene.camera.fov);
    let config = RenderConfig::from(&scene.render);

    log::info!(
        "Rendering {}x{}, max depth {}, {} threads",
        camera.image_width,
        camera.image_height,
        config.max_depth,
        rayon::current_num_threads()
    );

    let start = Instant::now();
    let image = render(&camera, &world, &config);
    log::info!("Render finished in {:?}", start.elapsed());

    image
        .to_image()?
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
