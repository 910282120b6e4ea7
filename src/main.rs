use clap::{Parser, ValueEnum};
use image::{ExtendedColorType, ImageReader};
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Instant;

use flmap::{BridgeConfig, DebugConfig, EdgeThresholds, FrameBridge, ProcessingMode};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Grayscale,
    Edges,
    Passthrough,
}

impl From<Mode> for ProcessingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Grayscale => ProcessingMode::Grayscale,
            Mode::Edges => ProcessingMode::EdgeDetect,
            Mode::Passthrough => ProcessingMode::PassThrough(-1),
        }
    }
}

#[derive(Parser)]
#[command(name = "flmap")]
#[command(about = "Run the native frame bridge on an image file")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Path to write the processed frame to
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Processing mode
    #[arg(short, long, value_enum, default_value_t = Mode::Grayscale, conflicts_with = "mode_code")]
    mode: Mode,

    /// Raw integer mode as sent over JNI (0 = grayscale, 1 = edges, other = pass-through)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    mode_code: Option<i32>,

    /// Canny low threshold
    #[arg(long, default_value_t = EdgeThresholds::DEFAULT_LOW)]
    low_threshold: f32,

    /// Canny high threshold
    #[arg(long, default_value_t = EdgeThresholds::DEFAULT_HIGH)]
    high_threshold: f32,

    /// Save intermediate images to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    flmap::logging::init_logging(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let img = ImageReader::open(&args.input)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut config = BridgeConfig::new().with_edge_thresholds(EdgeThresholds::new(
        args.low_threshold,
        args.high_threshold,
    )?);
    if let Some(debug_dir) = args.debug_out {
        config = config.with_debug(DebugConfig::new(debug_dir)?);
    }

    let mode = args
        .mode_code
        .map(ProcessingMode::from_code)
        .unwrap_or_else(|| args.mode.into());

    let bridge = FrameBridge::new(config);
    let start = Instant::now();
    let processed = bridge.process_frame(
        rgb.as_raw(),
        i32::try_from(width)?,
        i32::try_from(height)?,
        mode,
    )?;
    let elapsed = start.elapsed();

    image::save_buffer(
        &args.output,
        processed.as_bytes(),
        width,
        height,
        ExtendedColorType::Rgb8,
    )
    .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", args.output.display(), e))?;

    println!(
        "{}x{} frame, {} in {:?} -> {}",
        width,
        height,
        mode,
        elapsed,
        args.output.display()
    );

    Ok(())
}
