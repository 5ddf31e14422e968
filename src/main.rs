use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Level};

use styleforge::{
    config::Config,
    engine::{LogProgress, StyleEngine, VarianceSource},
    io::{output_path, ImageEncoder, ImageLoader},
};

#[derive(Parser)]
#[command(
    name = "styleforge",
    version,
    about = "Apply fashion-style looks to your photos, fully offline",
    long_about = "StyleForge grades an image with a named style preset (warmth, brightness, contrast and saturation), darkens the edges with a vignette and sharpens the result, writing a PNG next to the input."
)]
struct Cli {
    /// Input image (PNG, JPEG, WebP)
    #[arg(short, long, required_unless_present = "list_styles")]
    input: Option<PathBuf>,

    /// Output PNG path (defaults to <name>_styleforge_<style>.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Style preset to apply (editorial, glamour, avant-garde, minimalist, beach)
    #[arg(short, long)]
    style: Option<String>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible per-run variation
    #[arg(long, conflicts_with = "clock")]
    seed: Option<u64>,

    /// Vary the look slightly on every run, based on the current time
    #[arg(long)]
    clock: bool,

    /// List available styles and exit
    #[arg(long)]
    list_styles: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => Config::default(),
    };

    let variance = match (cli.seed, cli.clock) {
        (Some(seed), _) => VarianceSource::Seeded { seed },
        (None, true) => VarianceSource::Clock,
        (None, false) => config.engine.variance,
    };
    let engine = StyleEngine::new(&config)?.with_variance(variance);

    if cli.list_styles {
        for key in engine.registry().keys() {
            let preset = engine.registry().get(&key)?;
            println!(
                "{:<12} {:<12} contrast {:.2}  brightness {:.2}  saturation {:.2}  warmth {:+.2}  vignette {:.2}  sharpen {:.2}",
                key,
                preset.name,
                preset.contrast,
                preset.brightness,
                preset.saturation,
                preset.warmth,
                preset.vignette,
                preset.sharpen
            );
        }
        return Ok(());
    }

    let input = cli
        .input
        .ok_or_else(|| anyhow::anyhow!("An input image is required"))?;
    let style = cli
        .style
        .unwrap_or_else(|| config.engine.default_style.clone());
    let output = cli
        .output
        .unwrap_or_else(|| output_path(&input, &style, &config.output));

    info!("Starting StyleForge v{}", env!("CARGO_PKG_VERSION"));
    info!("Input: {:?}", input);
    info!("Style: {}", style);

    // Resolve the preset before decoding anything
    let preset = engine.registry().get(&style).map_err(|e| {
        error!("{}", e);
        e
    })?;

    let buffer = ImageLoader::from_config(&config.loader).load(&input).await?;
    let styled = engine.transform(buffer, preset, Some(&LogProgress))?;
    ImageEncoder::new().save(&styled, &output).await?;

    info!("Transformation complete! Output saved to: {:?}", output);
    Ok(())
}
