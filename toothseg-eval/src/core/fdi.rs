use std::ops::RangeInclusive;

use crate::core::shared::{CategoricalLabel, FdiNumber};

/// The piecewise quadrant arithmetic, kept as an explicit table so the
/// closed-inclusive block boundaries can be audited and tested in
/// isolation. Each block covers 8 categorical indices; quadrants 1 and 3
/// are numbered in reverse (central incisor carries the highest index).
const QUADRANT_RULES: [(RangeInclusive<u8>, fn(u8) -> u8); 4] = [
    (2..=9, |n| 20 - n),   // quadrant 1, reversed
    (10..=17, |n| n + 11), // quadrant 2
    (18..=25, |n| 56 - n), // quadrant 3, reversed
    (26..=33, |n| n + 15), // quadrant 4
];

/// Remaps a categorical label to its FDI tooth number. Total and
/// deterministic: indices outside the four quadrant blocks (0, 1, 34, 35
/// and anything out of palette range) pass through unchanged.
pub fn to_fdi(label: CategoricalLabel) -> FdiNumber {
    let n = label.get();
    for (block, rule) in QUADRANT_RULES.iter() {
        if block.contains(&n) {
            return FdiNumber::new(rule(n));
        }
    }
    FdiNumber::new(n)
}
