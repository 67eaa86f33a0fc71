use core::fmt;

use crate::core::fdi::to_fdi;
use crate::core::palette;
use crate::core::shared::FdiNumber;

/// Why a sample produced no accuracy value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The ground-truth label sequence is empty; the accuracy ratio is
    /// undefined for zero points.
    Empty,
    /// The decoded prediction and the ground truth cannot be aligned
    /// index-for-index; the sample is never truncated or padded to fit.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "ground truth has no points"),
            SkipReason::LengthMismatch { expected, actual } => write!(
                f,
                "decoded {actual} points but ground truth has {expected}"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleOutcome {
    /// Point-wise accuracy in `[0, 1]`.
    Scored(f64),
    /// No accuracy was computed; the sample does not count toward the mean.
    Skipped(SkipReason),
}

/// Scores one sample: decodes the predicted colors, remaps them to FDI
/// numbers, and counts position-wise agreement with the ground truth.
///
/// Points whose color fails to decode are dropped before the length check,
/// so a single unknown color in a length-matched prediction skips the
/// whole sample rather than scoring the rest.
pub fn evaluate(ground_truth: &[FdiNumber], colors: &[[f32; 3]]) -> SampleOutcome {
    if ground_truth.is_empty() {
        return SampleOutcome::Skipped(SkipReason::Empty);
    }

    let decoded = palette::decode_all(colors);
    if decoded.num_unknown > 0 {
        tracing::warn!(
            num_unknown = decoded.num_unknown,
            num_points = colors.len(),
            "dropped points with colors outside the palette"
        );
    }

    let predicted: Vec<FdiNumber> = decoded.labels.iter().map(|&l| to_fdi(l)).collect();
    if predicted.len() != ground_truth.len() {
        return SampleOutcome::Skipped(SkipReason::LengthMismatch {
            expected: ground_truth.len(),
            actual: predicted.len(),
        });
    }

    let matches = predicted
        .iter()
        .zip(ground_truth.iter())
        .filter(|&(p, g)| p == g)
        .count();
    SampleOutcome::Scored(matches as f64 / ground_truth.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::PALETTE;

    fn gt(labels: &[u8]) -> Vec<FdiNumber> {
        labels.iter().map(|&n| FdiNumber::new(n)).collect()
    }

    #[test]
    fn half_of_the_points_agree() {
        // Categorical 2 remaps to FDI 18, categorical 10 to FDI 21.
        let colors = [PALETTE[2], PALETTE[2], PALETTE[10], PALETTE[10]];
        let outcome = evaluate(&gt(&[11, 11, 21, 21]), &colors);
        assert_eq!(outcome, SampleOutcome::Scored(0.5));
    }

    #[test]
    fn perfect_and_zero_agreement() {
        let colors = [PALETTE[3], PALETTE[3]];
        assert_eq!(
            evaluate(&gt(&[17, 17]), &colors),
            SampleOutcome::Scored(1.0)
        );
        assert_eq!(
            evaluate(&gt(&[48, 48]), &colors),
            SampleOutcome::Scored(0.0)
        );
    }

    #[test]
    fn length_mismatch_skips_the_sample() {
        let colors = [PALETTE[2], PALETTE[2]];
        assert_eq!(
            evaluate(&gt(&[18, 18, 18]), &colors),
            SampleOutcome::Skipped(SkipReason::LengthMismatch {
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn unknown_color_shortens_the_prediction_and_skips() {
        let colors = [PALETTE[2], [0.11, 0.22, 0.33], PALETTE[2]];
        assert_eq!(
            evaluate(&gt(&[18, 18, 18]), &colors),
            SampleOutcome::Skipped(SkipReason::LengthMismatch {
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn empty_ground_truth_is_skipped_not_perfect() {
        assert_eq!(
            evaluate(&gt(&[]), &[]),
            SampleOutcome::Skipped(SkipReason::Empty)
        );
    }
}
