//! Offline batch CLI: read a WAV file, run the spectral-subtraction
//! denoiser, write the cleaned WAV back out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vxdenoise::{denoise, wav, DenoiseConfig};

/// Denoise a mono/stereo 16-bit PCM WAV recording via offline spectral
/// subtraction.
#[derive(Parser, Debug)]
#[command(name = "vxdenoise", version)]
struct Args {
    /// Input WAV file (16-bit PCM, mono or stereo).
    input: PathBuf,

    /// Output WAV file (16-bit PCM mono, same sample rate as input).
    output: PathBuf,

    /// Count of leading frames averaged into the noise template.
    #[arg(long, default_value_t = DenoiseConfig::default().noise_frames)]
    noise_frames: usize,

    /// Scalar multiplier applied to the noise template before subtraction.
    #[arg(long, default_value_t = DenoiseConfig::default().over_subtract)]
    over_subtract: f64,

    /// Minimum fraction of a bin's own magnitude retained after subtraction.
    #[arg(long, default_value_t = DenoiseConfig::default().spectral_floor)]
    spectral_floor: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (samples, sample_rate) = wav::read_wav(&args.input)
        .with_context(|| format!("failed to read input WAV '{}'", args.input.display()))?;

    log::info!(
        "loaded '{}': {} samples at {} Hz ({:.2}s)",
        args.input.display(),
        samples.len(),
        sample_rate,
        samples.len() as f64 / sample_rate as f64
    );

    let cfg = DenoiseConfig {
        noise_frames: args.noise_frames,
        over_subtract: args.over_subtract,
        spectral_floor: args.spectral_floor,
        ..DenoiseConfig::default()
    };

    let cleaned = denoise(&samples, sample_rate, &cfg);

    wav::write_wav(&args.output, &cleaned, sample_rate)
        .with_context(|| format!("failed to write output WAV '{}'", args.output.display()))?;

    log::info!("wrote '{}': {} samples", args.output.display(), cleaned.len());
    Ok(())
}
