//! Check command implementation.

use oxicrc_core::CATALOG;

/// Verify every catalog entry against its published check value.
pub fn cmd_check(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut failed = Vec::new();

    for entry in CATALOG {
        let computed = entry.compute_check()?;
        let ok = computed.value() == entry.check;
        if verbose || !ok {
            println!(
                "{:<26} {:>10} {}",
                entry.name,
                format!("{:#x}", computed),
                if ok { "OK" } else { "FAILED" }
            );
        }
        if !ok {
            failed.push(entry.name);
        }
    }

    if failed.is_empty() {
        println!("All {} algorithms OK", CATALOG.len());
        Ok(())
    } else {
        Err(format!(
            "{} of {} algorithms failed: {}",
            failed.len(),
            CATALOG.len(),
            failed.join(", ")
        )
        .into())
    }
}
