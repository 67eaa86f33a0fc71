use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::shared::{FdiNumber, JawType};

/// One subject's ground-truth record: which arch was scanned, the
/// per-point FDI labels, and the per-point instance ids. Instance ids are
/// carried for completeness but not used by the accuracy metric.
#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    pub jaw: JawType,
    pub labels: Vec<FdiNumber>,
    #[serde(default)]
    pub instances: Vec<u32>,
}

#[remain::sorted]
#[derive(Debug, thiserror::Error)]
pub enum Err {
    #[error("malformed metadata record {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to read metadata record {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Reads one JSON ground-truth record.
pub fn read_metadata<P: AsRef<Path>>(path: P) -> Result<Metadata, Err> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| Err::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| Err::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
