use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use epd_codec::BitDepth;
use inkframe::config::{AppConfig, DisplayMode};
use inkframe::export::{c_array, container};
use inkframe::{pipeline, preview, verify};

#[derive(Parser)]
#[command(name = "inkframe")]
#[command(about = "Photo to dot-matrix converter for e-paper panels")]
struct Cli {
    /// Path to config.yaml (defaults apply when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a photo into packed e-paper data
    Convert {
        /// Input image (anything the decoder understands: JPEG, PNG, ...)
        input: PathBuf,

        /// Output C header file
        #[arg(short, long, default_value = "epaper_data.h")]
        output: PathBuf,

        /// Also write the raw packed bytes to this file
        #[arg(long)]
        bin: Option<PathBuf>,

        /// Also write a self-describing container file (EPDB)
        #[arg(long)]
        container: Option<PathBuf>,

        /// Preview PNG of the converted image
        #[arg(long, default_value = "preview.png")]
        preview: PathBuf,

        /// Display mode override: "bw" or "gray"
        #[arg(long)]
        mode: Option<String>,

        /// Dithering override for bw mode
        #[arg(long)]
        dithering: Option<bool>,

        /// Binarization threshold override (bw mode, dithering off)
        #[arg(long)]
        threshold: Option<u8>,

        /// Brightness factor override (bw mode, dithering on)
        #[arg(long)]
        brightness: Option<f32>,

        /// Contrast factor override (bw mode, dithering on)
        #[arg(long)]
        contrast: Option<f32>,

        /// C array variable name override
        #[arg(long)]
        var_name: Option<String>,
    },
    /// Decode exported data back into a viewable image
    Verify {
        /// Input data: container, C header/text with 0xHH tokens, or raw binary
        input: PathBuf,

        /// Output PNG of the reconstructed image
        #[arg(short, long, default_value = "restored_image.png")]
        output: PathBuf,

        /// Pin the bit depth (1 or 2) instead of discriminating by length;
        /// tolerates wrong-length buffers with an advisory
        #[arg(long)]
        bpp: Option<u8>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkframe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            bin,
            container,
            preview,
            mode,
            dithering,
            threshold,
            brightness,
            contrast,
            var_name,
        }) => run_convert(
            cli.config.as_deref(),
            &input,
            &output,
            bin.as_deref(),
            container.as_deref(),
            &preview,
            ConvertOverrides {
                mode,
                dithering,
                threshold,
                brightness,
                contrast,
                var_name,
            },
        ),
        Some(Commands::Verify { input, output, bpp }) => {
            run_verify(cli.config.as_deref(), &input, &output, bpp)
        }
        None => {
            run_status(cli.config.as_deref());
            Ok(())
        }
    }
}

/// CLI overrides layered on top of the config file.
struct ConvertOverrides {
    mode: Option<String>,
    dithering: Option<bool>,
    threshold: Option<u8>,
    brightness: Option<f32>,
    contrast: Option<f32>,
    var_name: Option<String>,
}

fn load_config(path: Option<&Path>, overrides: Option<&ConvertOverrides>) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load(path)?;

    if let Some(overrides) = overrides {
        if let Some(mode) = &overrides.mode {
            config.mode = match mode.as_str() {
                "bw" => DisplayMode::Bw,
                "gray" => DisplayMode::Gray,
                other => anyhow::bail!("unsupported --mode {other} (expected bw or gray)"),
            };
        }
        if let Some(dithering) = overrides.dithering {
            config.dithering = dithering;
        }
        if let Some(threshold) = overrides.threshold {
            config.threshold = threshold;
        }
        if let Some(brightness) = overrides.brightness {
            config.brightness = brightness;
        }
        if let Some(contrast) = overrides.contrast {
            config.contrast = contrast;
        }
        if let Some(var_name) = &overrides.var_name {
            config.output.var_name = var_name.clone();
        }
        config.validate()?;
    }

    Ok(config)
}

#[allow(clippy::too_many_arguments)]
fn run_convert(
    config_path: Option<&Path>,
    input: &Path,
    output: &Path,
    bin: Option<&Path>,
    container_path: Option<&Path>,
    preview_path: &Path,
    overrides: ConvertOverrides,
) -> anyhow::Result<()> {
    let config = load_config(config_path, Some(&overrides))?;

    tracing::info!(input = %input.display(), "Loading image");
    let image = image::open(input).map_err(inkframe::error::AppError::ImageLoad)?;

    let conversion = pipeline::convert(&image, &config)?;

    let listing = c_array::render(
        &conversion.packed,
        &config.output.var_name,
        config.output.bytes_per_line,
    );
    std::fs::write(output, listing)?;
    tracing::info!(path = %output.display(), bytes = conversion.packed.len(), "C array written");

    if let Some(bin) = bin {
        std::fs::write(bin, conversion.packed.bytes())?;
        tracing::info!(path = %bin.display(), "Raw binary written");
    }

    if let Some(container_path) = container_path {
        std::fs::write(container_path, container::encode(&conversion.packed))?;
        tracing::info!(path = %container_path.display(), "Container written");
    }

    preview::save_png(&conversion.preview, preview_path)?;

    println!(
        "Converted {} -> {} ({} bytes, {}x{}, {:?})",
        input.display(),
        output.display(),
        conversion.packed.len(),
        config.width,
        config.height,
        config.mode,
    );

    Ok(())
}

fn run_verify(
    config_path: Option<&Path>,
    input: &Path,
    output: &Path,
    bpp: Option<u8>,
) -> anyhow::Result<()> {
    let config = load_config(config_path, None)?;

    let forced_depth = match bpp {
        None => None,
        Some(1) => Some(BitDepth::Mono),
        Some(2) => Some(BitDepth::Gray4),
        Some(other) => anyhow::bail!("unsupported --bpp {other} (expected 1 or 2)"),
    };

    let payload = verify::read_payload(input)?;
    let decoded = verify::decode_payload(
        payload,
        config.width as usize,
        config.height as usize,
        forced_depth,
    )?;

    preview::save_png(&decoded.grid, output)?;

    println!(
        "Decoded {} -> {} ({}x{}, {} bpp)",
        input.display(),
        output.display(),
        decoded.grid.width(),
        decoded.grid.height(),
        decoded.depth.bits_per_pixel(),
    );

    Ok(())
}

/// Display configuration and usage information.
fn run_status(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("inkframe v{VERSION}");
    println!("Photo to dot-matrix converter for e-paper panels\n");

    match AppConfig::load(config_path) {
        Ok(config) => {
            let mode = match config.mode {
                DisplayMode::Bw => "bw (1-bit)".to_string(),
                DisplayMode::Gray => format!("gray ({} levels)", config.levels),
            };
            println!("Configuration:");
            println!(
                "  Source: {}",
                config_path
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(defaults)".to_string())
            );
            println!("  Panel:  {}x{}", config.width, config.height);
            println!("  Mode:   {mode}");
            println!(
                "  Buffer: {} bytes",
                config
                    .bit_depth()
                    .expected_len(config.width as usize, config.height as usize)
            );
        }
        Err(e) => println!("Configuration error: {e}"),
    }

    println!("\nCommands:");
    println!("  inkframe convert <image>   Convert a photo to packed data");
    println!("  inkframe verify <data>     Decode exported data to a PNG");
    println!("\nRun 'inkframe --help' for more details.");
}
