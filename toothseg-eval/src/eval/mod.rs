pub mod dataset;
pub mod sample;

pub use dataset::{run, Config, DatasetReport, RootPair};
pub use sample::{evaluate, SampleOutcome, SkipReason};
