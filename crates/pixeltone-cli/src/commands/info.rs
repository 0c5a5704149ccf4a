//! Info command implementation
//!
//! Prints the codec metadata embedded in an encoded WAV file, either
//! human-readable or as the raw JSON contract.

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};

use pixeltone_codec::CodecMetadata;

use crate::wav;

/// Run the info command
///
/// # Arguments
/// * `input` - Path to the encoded WAV file
/// * `json` - Emit machine-readable JSON instead of the human summary
///
/// # Returns
/// Exit code: 0 on success
pub fn run(input: &str, json: bool) -> Result<ExitCode> {
    let bytes = std::fs::read(input).with_context(|| format!("failed to read {input}"))?;
    let file = wav::read_wav(&bytes).with_context(|| format!("failed to parse {input}"))?;

    let raw = file.metadata_json.as_deref().ok_or_else(|| {
        anyhow!("{input} carries no codec metadata; was it produced by `pixeltone encode`?")
    })?;
    let metadata = CodecMetadata::from_json(raw)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&metadata).context("failed to serialize metadata")?
        );
    } else {
        println!("resolution:        {}x{}", metadata.width, metadata.height);
        println!("frequency band:    {} .. {} Hz", metadata.f_min, metadata.f_max);
        println!("sample rate:       {} Hz", metadata.sample_rate);
        println!("samples per pixel: {}", metadata.samples_per_pixel);
        println!("fft size:          {}", metadata.fft_size);
        println!("duration:          {:.2} s", metadata.duration_seconds());
        println!(
            "samples:           {} in file, {} expected",
            file.samples.len(),
            metadata.expected_samples()
        );
    }

    Ok(ExitCode::SUCCESS)
}
