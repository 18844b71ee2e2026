//! List command implementation.

use oxicrc_core::{CATALOG, CatalogEntry, Width};
use serde::Serialize;

#[derive(Serialize)]
struct EntryJson {
    name: &'static str,
    aliases: &'static [&'static str],
    width: u32,
    poly: String,
    init: String,
    refin: bool,
    refout: bool,
    xorout: String,
    check: String,
}

impl From<&CatalogEntry> for EntryJson {
    fn from(entry: &CatalogEntry) -> Self {
        let p = &entry.params;
        let d = p.width.hex_digits();
        Self {
            name: entry.name,
            aliases: entry.aliases,
            width: p.width.bits(),
            poly: format!("0x{:0d$x}", p.polynomial),
            init: format!("0x{:0d$x}", p.init),
            refin: p.reflect_in,
            refout: p.reflect_out,
            xorout: format!("0x{:0d$x}", p.xor_out),
            check: format!("0x{:0d$x}", entry.check),
        }
    }
}

pub fn cmd_list(width: Option<Width>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<&CatalogEntry> = CATALOG
        .iter()
        .filter(|e| width.is_none_or(|w| e.params.width == w))
        .collect();

    if json {
        let out: Vec<EntryJson> = entries.iter().map(|e| EntryJson::from(*e)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{:<26} {:>5} {:>10} {:>10} {:>5} {:>6} {:>10} {:>10}",
        "Name", "Width", "Poly", "Init", "RefIn", "RefOut", "XorOut", "Check"
    );
    println!("{}", "-".repeat(90));
    for entry in &entries {
        let p = &entry.params;
        let d = p.width.hex_digits();
        println!(
            "{:<26} {:>5} {:>10} {:>10} {:>5} {:>6} {:>10} {:>10}",
            entry.name,
            p.width.bits(),
            format!("0x{:0d$X}", p.polynomial),
            format!("0x{:0d$X}", p.init),
            p.reflect_in,
            p.reflect_out,
            format!("0x{:0d$X}", p.xor_out),
            format!("0x{:0d$X}", entry.check),
        );
        if !entry.aliases.is_empty() {
            println!("    aliases: {}", entry.aliases.join(", "));
        }
    }
    println!();
    println!("{} algorithms", entries.len());

    Ok(())
}
