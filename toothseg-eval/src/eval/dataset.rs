use std::path::{Path, PathBuf};

use crate::core::shared::ConfigType;
use crate::eval::sample::{self, SampleOutcome};
use crate::io::{discover, metadata, ply};

/// A (raw-data root, prediction root) directory pair. The raw root holds
/// one folder per subject; the prediction root holds the matching
/// `{folder}_{jaw}_label.ply` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPair {
    pub raw: PathBuf,
    pub out: PathBuf,
}

impl RootPair {
    pub fn new(raw: PathBuf, out: PathBuf) -> Self {
        Self { raw, out }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Emit a progress line every this many folders. 0 disables progress.
    pub progress_interval: usize,
}

impl ConfigType for Config {
    fn default() -> Self {
        Self {
            progress_interval: 10,
        }
    }
}

/// Accumulated evaluation state: the running accuracy sum and the number
/// of samples that actually produced a score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetReport {
    valid_samples: usize,
    accuracy_sum: f64,
}

impl DatasetReport {
    pub fn valid_samples(&self) -> usize {
        self.valid_samples
    }

    /// Arithmetic mean of the per-sample accuracies, or `None` when no
    /// sample was scored. The empty case is never reported as 0.0 or NaN.
    pub fn mean_accuracy(&self) -> Option<f64> {
        if self.valid_samples > 0 {
            Some(self.accuracy_sum / self.valid_samples as f64)
        } else {
            None
        }
    }

    fn record(&mut self, accuracy: f64) {
        self.accuracy_sum += accuracy;
        self.valid_samples += 1;
    }
}

#[remain::sorted]
#[derive(Debug, thiserror::Error)]
pub enum Err {
    #[error("discovery error: {0}")]
    Discover(#[from] discover::Err),
}

/// Evaluates every subject under every root pair, in order, and returns
/// the accumulated report.
///
/// Per-folder failures never abort the run: a folder without a metadata
/// record, without a matching prediction file, or with an unreadable
/// prediction is skipped, as is any sample the evaluator refuses to score.
/// Only an unenumerable raw root is an error.
pub fn run(pairs: &[RootPair], cfg: &Config) -> Result<DatasetReport, Err> {
    let mut report = DatasetReport::default();
    for pair in pairs {
        let folders = discover::subject_folders(&pair.raw)?;
        let total = folders.len();
        for (iter, folder) in folders.iter().enumerate() {
            if cfg.progress_interval > 0 && iter % cfg.progress_interval == 0 {
                tracing::info!(
                    "Processing {}/{} in {}: {}...",
                    iter,
                    total,
                    pair.raw.display(),
                    folder_name(folder)
                );
            }
            match evaluate_folder(folder, &pair.out) {
                Some(SampleOutcome::Scored(accuracy)) => report.record(accuracy),
                Some(SampleOutcome::Skipped(reason)) => {
                    tracing::warn!(folder = %folder_name(folder), %reason, "sample skipped");
                }
                None => {}
            }
        }
    }
    Ok(report)
}

/// Scores one subject folder, or `None` when the folder has nothing to
/// score: no metadata record, a malformed record, no prediction file, or
/// an unreadable prediction.
fn evaluate_folder(folder: &Path, out_root: &Path) -> Option<SampleOutcome> {
    let record = discover::find_metadata(folder)?;
    let meta = match metadata::read_metadata(&record) {
        Ok(meta) => meta,
        Err(e) => {
            tracing::debug!(%e, "skipping folder");
            return None;
        }
    };

    let name = folder_name(folder);
    let pred_file = out_root.join(format!("{}_{}_label.ply", name, meta.jaw));
    let cloud = match ply::read_point_cloud(&pred_file) {
        Ok(cloud) => cloud,
        Err(ply::Err::NotFound(_)) => {
            // Expected: not every raw sample has a prediction.
            tracing::debug!(folder = %name, "no prediction file");
            return None;
        }
        Err(e) => {
            tracing::warn!(%e, "skipping unreadable prediction");
            return None;
        }
    };

    Some(sample::evaluate(&meta.labels, &cloud.colors))
}

fn folder_name(folder: &Path) -> std::borrow::Cow<'_, str> {
    folder
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or(std::borrow::Cow::Borrowed(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_over_zero_samples_has_no_mean() {
        let report = DatasetReport::default();
        assert_eq!(report.valid_samples(), 0);
        assert_eq!(report.mean_accuracy(), None);
    }

    #[test]
    fn mean_is_the_arithmetic_mean_of_recorded_accuracies() {
        let mut report = DatasetReport::default();
        for accuracy in [1.0, 0.5, 0.0] {
            report.record(accuracy);
        }
        assert_eq!(report.valid_samples(), 3);
        assert_eq!(report.mean_accuracy(), Some(0.5));
    }
}
