//! Sum command implementation.

use crate::utils::{byte_string, hex};
use oxicrc_core::{Checksum, CrcParams, checksum_reader};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Something to checksum.
#[derive(Debug, Clone)]
pub enum Input {
    /// A literal string, checksummed as UTF-8 bytes.
    Text(String),
    /// A file, or standard input for `-`.
    Path(PathBuf),
}

impl Input {
    fn label(&self) -> String {
        match self {
            Self::Text(s) => format!("\"{}\"", s),
            Self::Path(p) => p.display().to_string(),
        }
    }

    fn checksum(&self, params: CrcParams) -> Result<Checksum, Box<dyn std::error::Error>> {
        let checksum = match self {
            Self::Text(s) => oxicrc_core::Crc::compute(params, s.as_bytes())?,
            Self::Path(p) if p.as_os_str() == "-" => checksum_reader(params, io::stdin().lock())?,
            Self::Path(p) => checksum_reader(params, BufReader::new(File::open(p)?))?,
        };
        Ok(checksum)
    }
}

#[derive(Serialize)]
struct SumJson {
    input: String,
    algorithm: String,
    width: u32,
    value: u32,
    hex: String,
    bytes: String,
}

pub fn cmd_sum(
    algorithm: &str,
    params: CrcParams,
    inputs: &[Input],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("{}: {}", algorithm, params);

    let mut results = Vec::with_capacity(inputs.len());
    for input in inputs {
        let checksum = input.checksum(params)?;
        log::debug!("{} -> {}", input.label(), checksum);

        if json {
            results.push(SumJson {
                input: input.label(),
                algorithm: algorithm.to_string(),
                width: checksum.width().bits(),
                value: checksum.value(),
                hex: hex(&checksum),
                bytes: byte_string(&checksum),
            });
        } else {
            println!("{}  {}", checksum, input.label());
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    Ok(())
}
