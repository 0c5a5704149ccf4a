//! Encode command implementation
//!
//! Loads an image, converts it to grayscale, synthesizes the tone sequence,
//! and writes a mono WAV file with the codec metadata embedded.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use pixeltone_codec::{encode, EncoderConfig, ScanOrder};

use crate::img;
use crate::wav::WavResult;

/// Run the encode command
///
/// # Arguments
/// * `input` - Path to the input image
/// * `output` - Path to the output WAV file
/// * `config` - Codec parameters
/// * `order` - Pixel scan order (must match the later decode)
///
/// # Returns
/// Exit code: 0 on success
pub fn run(input: &str, output: &str, config: &EncoderConfig, order: ScanOrder) -> Result<ExitCode> {
    let raster = img::load_gray(Path::new(input))?;

    let out = encode(&raster, config, order).context("encoding failed")?;
    let result = WavResult::from_mono(
        &out.samples,
        out.metadata.sample_rate,
        &out.metadata.to_json(),
    );

    std::fs::write(output, &result.wav_data)
        .with_context(|| format!("failed to write {output}"))?;

    println!("{} {} -> {}", "encoded".green().bold(), input, output);
    println!("  resolution: {}x{}", out.metadata.width, out.metadata.height);
    println!("  duration:   {:.2} s", result.duration_seconds());
    println!("  pcm hash:   {}", result.pcm_hash);

    Ok(ExitCode::SUCCESS)
}
