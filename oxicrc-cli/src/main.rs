//! OxiCRC CLI - The Oxidized CRC
//!
//! A Pure Rust checksum utility for every CRC-8, CRC-16 and CRC-32 algorithm
//! of the RevEng catalogue, plus arbitrary custom parameter sets.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{Input, cmd_check, cmd_list, cmd_reciprocal, cmd_sum};
use oxicrc_core::{CrcError, CrcParams, Width, catalog};
use std::path::PathBuf;
use utils::parse_number;

#[derive(Parser)]
#[command(name = "oxicrc")]
#[command(author, version, about = "The Oxidized CRC - Pure Rust checksum utility")]
#[command(long_about = "
OxiCRC computes CRC-8, CRC-16 and CRC-32 checksums for any algorithm of the
CRC RevEng catalogue, or for a custom parameter set.

Examples:
  oxicrc sum -a CRC-16/MODBUS frame.bin
  oxicrc sum -a CRC-32/IEEE --string 123456789
  oxicrc custom --width 16 --poly 0x8005 --refin --refout --string 123456789
  oxicrc list --width 16
  oxicrc check
  oxicrc reciprocal --width 16 0x1021
")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Checksum files, standard input or a string with a catalog algorithm
    #[command(alias = "s")]
    Sum {
        /// Algorithm name or alias (see `oxicrc list`)
        #[arg(short, long, default_value = "CRC-32/ISO-HDLC")]
        algorithm: String,

        /// Checksum this string instead of files
        #[arg(short, long)]
        string: Option<String>,

        /// Files to checksum ("-" for standard input)
        files: Vec<PathBuf>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Checksum with a custom parameter set
    Custom {
        /// Register width in bits (8, 16 or 32)
        #[arg(short, long)]
        width: u8,

        /// Generator polynomial, normal notation
        #[arg(short, long, value_parser = parse_number)]
        poly: u32,

        /// Initial register value
        #[arg(short, long, value_parser = parse_number, default_value = "0")]
        init: u32,

        /// Reflect input bytes
        #[arg(long)]
        refin: bool,

        /// Reflect the register before the final XOR
        #[arg(long)]
        refout: bool,

        /// Final XOR value
        #[arg(short, long, value_parser = parse_number, default_value = "0")]
        xorout: u32,

        /// Checksum this string instead of files
        #[arg(short, long)]
        string: Option<String>,

        /// Files to checksum ("-" for standard input)
        files: Vec<PathBuf>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// List catalog algorithms
    #[command(alias = "l")]
    List {
        /// Only show algorithms of this width (8, 16 or 32)
        #[arg(short, long)]
        width: Option<u8>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Verify every catalog algorithm against its check value
    Check,

    /// Convert a polynomial between normal and reversed reciprocal notation
    Reciprocal {
        /// Polynomial to convert
        #[arg(value_parser = parse_number)]
        polynomial: u32,

        /// Register width in bits (8, 16 or 32)
        #[arg(short, long, default_value = "16")]
        width: u8,

        /// Treat the input as reversed reciprocal (Koopman) notation
        #[arg(short, long)]
        inverse: bool,
    },
}

fn collect_inputs(string: Option<String>, files: Vec<PathBuf>) -> Vec<Input> {
    match string {
        Some(s) => vec![Input::Text(s)],
        None if files.is_empty() => vec![Input::Path(PathBuf::from("-"))],
        None => files.into_iter().map(Input::Path).collect(),
    }
}

fn run(command: Commands, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Sum {
            algorithm,
            string,
            files,
            json,
        } => {
            let entry =
                catalog::find(&algorithm).ok_or_else(|| CrcError::unknown_algorithm(&algorithm))?;
            cmd_sum(entry.name, entry.params, &collect_inputs(string, files), json)
        }
        Commands::Custom {
            width,
            poly,
            init,
            refin,
            refout,
            xorout,
            string,
            files,
            json,
        } => {
            let params = CrcParams::new(Width::from_bits(width)?, poly, init, refin, refout, xorout)?;
            cmd_sum("custom", params, &collect_inputs(string, files), json)
        }
        Commands::List { width, json } => {
            let width = width.map(Width::from_bits).transpose()?;
            cmd_list(width, json)
        }
        Commands::Check => cmd_check(verbose),
        Commands::Reciprocal {
            polynomial,
            width,
            inverse,
        } => cmd_reciprocal(polynomial, Width::from_bits(width)?, inverse),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli.command, cli.verbose > 0) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
