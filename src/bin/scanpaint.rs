//! scanpaint - rasterize lines, circles and ellipses from the command line.
//!
//! Each positional SHAPE is `kind:x1,y1:x2,y2` (or `x1,y1:x2,y2` to use the
//! configured default kind). Shapes are drawn onto a canvas, optionally
//! transformed, then printed as coordinates, previewed in the terminal and/or
//! written to a PNG.
//!
//! ```text
//! scanpaint bresenham:0,0:5,2 --points
//! scanpaint circle:40,30:60,30 ellipse:40,30:70,45 --ascii --output shapes.png
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use scanpaint::prelude::*;

/// scanpaint - classic scan-conversion rasterizers
#[derive(Parser, Debug)]
#[command(name = "scanpaint")]
#[command(version)]
#[command(about = "Rasterize DDA/Bresenham lines and midpoint circles/ellipses", long_about = None)]
struct Cli {
    /// Shapes to draw: kind:x1,y1:x2,y2
    shapes: Vec<String>,

    /// Config file path (default: <config dir>/scanpaint/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Default shape kind for SHAPEs given without one
    #[arg(short, long)]
    shape: Option<String>,

    /// Transform applied to every shape, e.g. rotate:90@50,50
    #[arg(short, long)]
    transform: Option<String>,

    /// Write the drawing to this PNG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Preview the drawing in the terminal
    #[arg(long)]
    ascii: bool,

    /// Use Unicode half blocks for the terminal preview
    #[arg(long)]
    blocks: bool,

    /// Terminal preview width in columns
    #[arg(long)]
    columns: Option<u32>,

    /// Print every emitted pixel coordinate
    #[arg(long)]
    points: bool,

    /// List the available shape kinds and exit
    #[arg(long)]
    list_shapes: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_shapes {
        for kind in ShapeKind::ALL {
            println!("{:<10} {}", kind.short_name(), kind.label());
        }
        return Ok(());
    }

    let config = resolve_config(&cli)?;
    if !cli.ascii && !cli.points && config.output.is_none() {
        bail!("nothing to do: pass --points, --ascii or --output");
    }
    let mut canvas = config.build_canvas().context("invalid configuration")?;

    if let Some(text) = &cli.transform {
        canvas.select_transform(text.parse()?);
    }

    for arg in &cli.shapes {
        let shape = parse_shape_arg(arg, canvas.shape_kind())?;
        canvas.add(shape);
    }

    if canvas.committed().is_empty() && config.output.is_some() {
        log::warn!("no shapes given; exporting a blank canvas");
    }

    if cli.points {
        for shape in canvas.committed() {
            println!("# {shape}");
            for p in shape.transformed(canvas.transform()).pixels() {
                println!("{} {}", p.x, p.y);
            }
        }
    }

    let fb = canvas.render()?;

    if cli.ascii {
        let mode = if cli.blocks { TerminalMode::UnicodeHalfBlock } else { TerminalMode::Ascii };
        let mut encoder = TerminalEncoder::new().mode(mode);
        if let Some(columns) = cli.columns {
            encoder = encoder.width(columns);
        }
        encoder.print(&fb);
    }

    if let Some(path) = &config.output {
        PngEncoder::write_to_file(&fb, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

/// Defaults < file < environment < command line.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default_path().map(Config::load_or_default).unwrap_or_default(),
    };
    config.apply_env()?;

    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    if let Some(shape) = &cli.shape {
        config.shape = shape.clone();
    }
    if let Some(output) = &cli.output {
        config.output = Some(output.clone());
    }
    Ok(config)
}

/// `kind:x1,y1:x2,y2`, or `x1,y1:x2,y2` drawn with `default_kind`.
fn parse_shape_arg(arg: &str, default_kind: ShapeKind) -> Result<Shape> {
    let shape: scanpaint::Result<Shape> = if arg.matches(':').count() == 1 {
        format!("{}:{arg}", default_kind.short_name()).parse()
    } else {
        arg.parse()
    };
    shape.with_context(|| format!("bad shape argument '{arg}'"))
}
