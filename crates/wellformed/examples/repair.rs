//! Generates a code unit sequence salted with lone surrogates, repairs it,
//! and prints the before/after well-formedness report.
//!
//! The input mix is ~5% lone high surrogates, ~5% lone low surrogates and
//! ~90% printable ASCII, produced by a small deterministic LCG.
//!
//! Run with
//!
//! ```bash
//! cargo run -p wellformed --example repair
//! ```

use wellformed::{is_well_formed, to_well_formed};

#[allow(clippy::cast_possible_truncation)]
fn pseudo_random_units(len: usize, mut seed: u32) -> Vec<u16> {
    let mut units = Vec::with_capacity(len);
    for _ in 0..len {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let unit = match seed % 100 {
            0..=4 => 0xD800 + (seed % 1024) as u16,
            5..=9 => 0xDC00 + (seed % 1024) as u16,
            _ => 32 + (seed % 95) as u16,
        };
        units.push(unit);
    }
    units
}

fn main() {
    let units = pseudo_random_units(1024, 0xDEAD_BEEF);
    println!("generated {} code units", units.len());
    println!("well-formed before: {}", is_well_formed(&units));

    let fixed = to_well_formed(&units);
    let replaced = units
        .iter()
        .zip(fixed.iter())
        .filter(|(a, b)| a != b)
        .count();

    println!("well-formed after:  {}", is_well_formed(&fixed));
    println!("length after:       {}", fixed.len());
    println!("replaced units:     {replaced}");

    // The repaired sequence decodes cleanly.
    let text = String::from_utf16(&fixed).expect("repair guarantees valid UTF-16");
    println!("decoded chars:      {}", text.chars().count());
}
