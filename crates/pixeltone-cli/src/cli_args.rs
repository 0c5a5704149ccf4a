//! CLI argument definitions for the pixeltone command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// Pixeltone - hide images in audio and get them back
#[derive(Parser)]
#[command(name = "pixeltone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode an image into an audible WAV file with embedded codec metadata
    Encode {
        /// Path to the input image (converted to grayscale)
        #[arg(short, long)]
        input: String,

        /// Path to the output WAV file
        #[arg(short, long)]
        output: String,

        /// Frequency mapped to black, in Hz
        #[arg(long, default_value_t = 500.0)]
        f_min: f64,

        /// Frequency mapped to white, in Hz
        #[arg(long, default_value_t = 3000.0)]
        f_max: f64,

        /// Audio sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Tone burst length per pixel, in samples
        #[arg(long, default_value_t = 48)]
        samples_per_pixel: u32,

        /// FFT size the decoder will use (recorded in the metadata)
        #[arg(long, default_value_t = 512)]
        fft_size: u32,

        /// Scan pixels row by row instead of column by column
        #[arg(long)]
        row_major: bool,
    },

    /// Decode an encoded WAV file back into a grayscale image
    Decode {
        /// Path to the encoded WAV file
        #[arg(short, long)]
        input: String,

        /// Path to the output image (PNG)
        #[arg(short, long)]
        output: String,

        /// Scan pixels row by row instead of column by column (must match encode)
        #[arg(long)]
        row_major: bool,
    },

    /// Print the codec metadata embedded in an encoded WAV file
    Info {
        /// Path to the encoded WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}
