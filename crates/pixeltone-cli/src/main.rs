//! Pixeltone CLI - encode images into audible waveforms and back
//!
//! This binary parses arguments and dispatches to the command
//! implementations in the library crate.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use pixeltone_cli::cli_args::{Cli, Commands};
use pixeltone_cli::commands;
use pixeltone_codec::{EncoderConfig, ScanOrder};

fn scan_order(row_major: bool) -> ScanOrder {
    if row_major {
        ScanOrder::RowMajor
    } else {
        ScanOrder::ColumnMajor
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            f_min,
            f_max,
            sample_rate,
            samples_per_pixel,
            fft_size,
            row_major,
        } => {
            let config = EncoderConfig {
                f_min,
                f_max,
                sample_rate,
                samples_per_pixel,
                fft_size,
            };
            commands::encode::run(&input, &output, &config, scan_order(row_major))
        }
        Commands::Decode {
            input,
            output,
            row_major,
        } => commands::decode::run(&input, &output, scan_order(row_major)),
        Commands::Info { input, json } => commands::info::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
