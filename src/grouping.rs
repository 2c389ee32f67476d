//! Magnitude-group partitioning of an integer
//!
//! Large integers are segmented into chunks of up to three decimal digits,
//! each paired with its scale position, before spelling. The partition is
//! lossless: re-concatenating the groups' digits (leading group unpadded,
//! the rest zero-padded to three) reconstructs the decimal digit string of
//! the input exactly.

/// A chunk of up to three decimal digits with its scale position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeGroup {
    /// Group value in 0..=999
    pub value: u16,
    /// Position counted from the least significant group (0 = units,
    /// 1 = thousands, 2 = millions, ...)
    pub scale: usize,
}

/// Split a non-negative integer into magnitude groups, most significant first
pub fn magnitude_groups(n: u128) -> Vec<MagnitudeGroup> {
    if n == 0 {
        return vec![MagnitudeGroup { value: 0, scale: 0 }];
    }

    let mut chunks = Vec::new();
    let mut rest = n;
    while rest > 0 {
        chunks.push((rest % 1000) as u16);
        rest /= 1000;
    }

    chunks
        .iter()
        .enumerate()
        .rev()
        .map(|(scale, &value)| MagnitudeGroup { value, scale })
        .collect()
}
