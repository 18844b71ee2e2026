//! Reciprocal command implementation.

use oxicrc_core::Width;
use oxicrc_core::reciprocal::{
    from_reversed_reciprocal, reciprocal, reversed, to_reversed_reciprocal,
};

/// Print all four notations of a polynomial.
///
/// With `inverse`, the input is taken in reversed reciprocal (Koopman)
/// notation instead of normal notation.
pub fn cmd_reciprocal(
    polynomial: u32,
    width: Width,
    inverse: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if polynomial & !width.mask() != 0 {
        return Err(format!("polynomial {:#x} does not fit in {} bits", polynomial, width).into());
    }

    let normal = if inverse {
        from_reversed_reciprocal(polynomial, width)
    } else {
        polynomial
    };
    let d = width.hex_digits();

    println!("Normal:              0x{:0d$X}", normal);
    println!("Reversed:            0x{:0d$X}", reversed(normal, width));
    println!("Reciprocal:          0x{:0d$X}", reciprocal(normal, width));
    println!(
        "Reversed reciprocal: 0x{:0d$X}",
        to_reversed_reciprocal(normal, width)
    );

    Ok(())
}
