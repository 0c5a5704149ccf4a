//! Decode command implementation
//!
//! Reads an encoded WAV file, recovers the codec metadata from its `pxtm`
//! chunk, runs the frequency estimator, and saves the reconstructed image.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use colored::Colorize;

use pixeltone_codec::{decode, CodecMetadata, ScanOrder};

use crate::img;
use crate::wav;

/// Run the decode command
///
/// # Arguments
/// * `input` - Path to the encoded WAV file
/// * `output` - Path to the output image
/// * `order` - Pixel scan order (must match the encode)
///
/// # Returns
/// Exit code: 0 on success
pub fn run(input: &str, output: &str, order: ScanOrder) -> Result<ExitCode> {
    let bytes = std::fs::read(input).with_context(|| format!("failed to read {input}"))?;
    let file = wav::read_wav(&bytes).with_context(|| format!("failed to parse {input}"))?;

    let json = file.metadata_json.as_deref().ok_or_else(|| {
        anyhow!("{input} carries no codec metadata; was it produced by `pixeltone encode`?")
    })?;
    let metadata = CodecMetadata::from_json(json)?;

    // The estimator trusts the metadata over the container header, same as
    // re-slicing requires; a mismatch usually means the file was resampled.
    if file.format.sample_rate != metadata.sample_rate {
        eprintln!(
            "{} container sample rate {} differs from metadata {}; using metadata",
            "warning:".yellow().bold(),
            file.format.sample_rate,
            metadata.sample_rate
        );
    }

    let raster = decode(&file.samples, &metadata, order).context("decoding failed")?;
    img::save_gray(Path::new(output), &raster)?;

    println!("{} {} -> {}", "decoded".green().bold(), input, output);
    println!("  resolution: {}x{}", raster.width(), raster.height());

    Ok(ExitCode::SUCCESS)
}
