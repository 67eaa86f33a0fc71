use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::shared::CategoricalLabel;

/// The fixed 36-entry color palette used to encode predicted classes into
/// point colors. Index 0 is gingiva / no tooth; the remaining entries cover
/// the four quadrant blocks plus auxiliary background classes. The sequence
/// is order-sensitive: a point's categorical label is the position of its
/// rounded color in this table.
pub const PALETTE: [[f32; 3]; 36] = [
    [1.0, 1.0, 1.0], [1.0, 0.6, 0.0], [1.0, 1.0, 0.8], [0.4, 0.8, 0.6],
    [0.5, 0.9, 0.0], [0.0, 0.0, 0.8], [0.3, 0.2, 0.5], [1.0, 0.8, 0.7],
    [0.8, 0.3, 0.3], [0.8, 0.5, 0.0], [1.0, 1.0, 0.0], [0.5, 1.0, 0.8],
    [0.0, 1.0, 0.2], [0.1, 0.5, 1.0], [0.4, 0.3, 0.8], [1.0, 0.9, 0.7],
    [0.5, 0.2, 0.2], [1.0, 0.5, 0.0], [1.0, 0.8, 0.0], [0.0, 0.4, 0.0],
    [0.8, 1.0, 0.8], [0.0, 0.7, 1.0], [0.5, 0.4, 1.0], [0.5, 0.5, 0.4],
    [0.9, 0.3, 0.2], [0.9, 0.6, 0.0], [0.8, 0.6, 0.1], [0.3, 0.4, 0.2],
    [0.8, 1.0, 0.4], [0.3, 0.5, 0.7], [0.6, 0.0, 0.8], [0.8, 0.7, 0.6],
    [1.0, 0.0, 0.6], [1.0, 0.7, 0.8], [0.7, 0.5, 0.0], [0.6, 0.7, 0.5],
];

/// Rounds a color channel to two decimals and scales it to an integer, so
/// palette lookups compare rounded values exactly instead of comparing
/// floats at full precision.
fn quantize(color: [f32; 3]) -> [i16; 3] {
    [
        (color[0] * 100.0).round() as i16,
        (color[1] * 100.0).round() as i16,
        (color[2] * 100.0).round() as i16,
    ]
}

lazy_static! {
    static ref PALETTE_LOOKUP: HashMap<[i16; 3], CategoricalLabel> = {
        let mut map = HashMap::with_capacity(PALETTE.len());
        for (idx, color) in PALETTE.iter().enumerate() {
            // First match wins, as the table is position-indexed.
            map.entry(quantize(*color))
                .or_insert(CategoricalLabel::new(idx as u8));
        }
        map
    };
}

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum Err {
    #[error("color {0:?} is not in the palette")]
    UnknownColor([f32; 3]),
}

/// Decodes one color into its categorical label by exact lookup of the
/// 2-decimal-rounded value. There is deliberately no nearest-neighbor or
/// tolerance fallback: a color either is a palette entry or it is not.
pub fn decode(color: [f32; 3]) -> Result<CategoricalLabel, Err> {
    PALETTE_LOOKUP
        .get(&quantize(color))
        .copied()
        .ok_or(Err::UnknownColor(color))
}

/// Result of decoding a whole color sequence. Colors that fail to decode
/// are excluded from `labels`, so `labels.len() + num_unknown` equals the
/// input length.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub labels: Vec<CategoricalLabel>,
    pub num_unknown: usize,
}

/// Decodes every color in the sequence. Failures are dropped from the
/// output and counted, never raised; the caller decides what an incomplete
/// decode means for the sample.
pub fn decode_all(colors: &[[f32; 3]]) -> Decoded {
    let mut labels = Vec::with_capacity(colors.len());
    let mut num_unknown = 0;
    for (point, color) in colors.iter().enumerate() {
        match decode(*color) {
            Ok(label) => labels.push(label),
            Err(e) => {
                tracing::debug!(point, %e, "dropping undecodable point");
                num_unknown += 1;
            }
        }
    }
    Decoded { labels, num_unknown }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn palette_entries_are_distinct_after_rounding() {
        let keys: HashSet<[i16; 3]> = PALETTE.iter().map(|c| quantize(*c)).collect();
        assert_eq!(keys.len(), PALETTE.len());
    }

    #[test]
    fn decode_is_a_left_inverse_of_palette_lookup() {
        for (idx, color) in PALETTE.iter().enumerate() {
            assert_eq!(decode(*color), Ok(CategoricalLabel::new(idx as u8)));
        }
    }

    #[test]
    fn decode_rounds_to_two_decimals_before_matching() {
        // 0.999 rounds to 1.00, 0.104 rounds to 0.10.
        assert_eq!(decode([0.999, 0.999, 0.999]), Ok(CategoricalLabel::new(0)));
        assert_eq!(decode([0.104, 0.496, 1.0]), Ok(CategoricalLabel::new(13)));
    }

    #[test]
    fn decode_rejects_colors_outside_the_palette() {
        for color in [[0.11, 0.22, 0.33], [0.0, 0.0, 0.0], [1.0, 1.0, 0.99]] {
            assert_eq!(decode(color), Err(super::Err::UnknownColor(color)));
        }
    }

    #[test]
    fn decode_all_excludes_failures_and_counts_them() {
        let colors = [PALETTE[2], [0.11, 0.22, 0.33], PALETTE[10]];
        let decoded = decode_all(&colors);
        assert_eq!(
            decoded.labels,
            vec![CategoricalLabel::new(2), CategoricalLabel::new(10)]
        );
        assert_eq!(decoded.num_unknown, 1);
    }

    #[test]
    fn decode_all_of_empty_input_is_empty() {
        let decoded = decode_all(&[]);
        assert!(decoded.labels.is_empty());
        assert_eq!(decoded.num_unknown, 0);
    }
}
