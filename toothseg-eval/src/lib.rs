// lib.rs

/// Contains the fixed color palette codec, the FDI numbering remapper,
/// and the shared value types.
pub mod core;

/// Defines the sample-level and dataset-level accuracy evaluation.
pub mod eval;

/// Contains the interface between the evaluator and the on-disk dataset:
/// PLY point clouds, JSON ground-truth records, and folder discovery.
pub mod io;

/// Contains the most commonly used traits, types, and functions.
pub mod prelude {
    pub use crate::core::fdi::to_fdi;
    pub use crate::core::palette::{decode, decode_all, PALETTE};
    pub use crate::core::shared::{CategoricalLabel, ConfigType, FdiNumber, JawType};
    pub use crate::eval::dataset::{run, Config, DatasetReport, RootPair};
    pub use crate::eval::sample::{evaluate, SampleOutcome, SkipReason};
}
