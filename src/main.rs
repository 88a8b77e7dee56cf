use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brickmosaic::models::{ConfigOverrides, MosaicConfig};
use brickmosaic::rendering::{default_image_ext, load_image};
use brickmosaic::services::{load_catalog, MosaicDriver, OutputOptions};
use mosaic_quant::ShapeCategory;

#[derive(Parser)]
#[command(name = "brickmosaic")]
#[command(about = "Turn photographs into buildable multi-shape tile mosaics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantize an image against a color catalog and write the results
    Render(RenderArgs),
    /// List the colors a catalog file provides
    Catalog {
        /// Catalog CSV file
        path: PathBuf,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Catalog CSV file
    #[arg(short, long)]
    catalog: PathBuf,

    /// Source image
    #[arg(short, long)]
    input: PathBuf,

    /// Output path without extension (defaults to <input>-mosaic)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tiles along the long side
    #[arg(long)]
    tiles: Option<u32>,

    /// Build layers (2 or 3 halve the tile count)
    #[arg(long)]
    layers: Option<u32>,

    /// Sharpen blur sigma, hundredths of a pixel
    #[arg(long)]
    sigma: Option<u32>,

    /// Sharpen threshold, ten-thousandths
    #[arg(long)]
    threshold: Option<u32>,

    /// Sharpen amount, hundredths
    #[arg(long)]
    amount: Option<u32>,

    /// Luminance weight, 500 = 1.0
    #[arg(long)]
    luminance: Option<u32>,

    /// Write only the sharpened image
    #[arg(long)]
    no_mosaic: bool,

    /// Also write an LDraw build file (<output>.ldr)
    #[arg(long)]
    build_file: bool,

    /// Also write a part list (<output>.csv)
    #[arg(long)]
    part_list: bool,

    /// Image extension, which picks the encoder (defaults to the input's)
    #[arg(long)]
    image_ext: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render(args)) => {
            init_tracing();
            run_render_command(args)
        }
        Some(Commands::Catalog { path }) => {
            init_tracing();
            run_catalog_command(&path)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brickmosaic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn run_render_command(args: RenderArgs) -> anyhow::Result<()> {
    let base = match &args.config {
        Some(path) => MosaicConfig::load(path)?,
        None => MosaicConfig::default(),
    };
    let config = base.with_overrides(&ConfigOverrides {
        tiles_long_side: args.tiles,
        layers: args.layers,
        sigma: args.sigma,
        threshold: args.threshold,
        amount: args.amount,
        luminance_factor: args.luminance,
        no_mosaic: args.no_mosaic,
    })?;

    let catalog = load_catalog(&args.catalog)?;
    let source = load_image(&args.input)?;
    let driver = MosaicDriver::new(catalog, source);

    let result = driver.repaint(&config)?;

    let mut options = match args.output {
        Some(stem) => OutputOptions {
            image_ext: default_image_ext(&args.input),
            ..OutputOptions::new(stem)
        },
        None => OutputOptions::for_input(&args.input),
    };
    if let Some(ext) = args.image_ext {
        options.image_ext = ext;
    }
    options.build_file = args.build_file;
    options.part_list = args.part_list;
    for path in result.write(driver.catalog(), &options)? {
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn run_catalog_command(path: &Path) -> anyhow::Result<()> {
    let catalog = load_catalog(path)?;

    println!("{:<8} {:<28} {:<8} shapes", "id", "name", "rgb");
    for swatch in catalog.swatches() {
        let shapes: Vec<String> = ShapeCategory::ALL
            .into_iter()
            .filter(|&shape| swatch.is_available(shape))
            .map(|shape| shape.to_string())
            .collect();
        println!(
            "{:<8} {:<28} #{:<7} {}",
            swatch.id(),
            swatch.name(),
            hex::encode(swatch.rgb()),
            shapes.join(", ")
        );
    }
    println!("\n{} colors", catalog.len());
    for shape in ShapeCategory::ALL {
        println!("  {:<10} {}", shape.to_string(), catalog.eligible_count(shape));
    }

    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    let defaults = MosaicConfig::default();

    println!("Brickmosaic v{VERSION}");
    println!("Turn photographs into buildable multi-shape tile mosaics\n");

    println!("Usage:");
    println!("  brickmosaic render --catalog <csv> --input <image> [options]");
    println!("  brickmosaic catalog <csv>");
    println!("  brickmosaic help [command]\n");

    println!("Defaults:");
    println!("  tiles_long_side  = {}", defaults.tiles_long_side);
    println!("  layers           = {}", defaults.layers);
    println!("  sigma            = {}", defaults.sigma);
    println!("  threshold        = {}", defaults.threshold);
    println!("  amount           = {}", defaults.amount);
    println!("  luminance_factor = {}", defaults.luminance_factor);
    println!("  show_mosaic      = {}", defaults.show_mosaic);
    println!("  image_ext        = input's extension, else jpg");

    println!("\nLogging:");
    println!(
        "  RUST_LOG = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("brickmosaic=info (default)")
    );
}
