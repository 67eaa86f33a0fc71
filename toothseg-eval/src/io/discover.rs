use std::fs;
use std::path::{Path, PathBuf};

#[remain::sorted]
#[derive(Debug, thiserror::Error)]
pub enum Err {
    #[error("failed to enumerate {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Lists the subject folders under a raw-data root, lexically sorted.
/// Plain files in the root are not subjects and are skipped.
pub fn subject_folders<P: AsRef<Path>>(raw_root: P) -> Result<Vec<PathBuf>, Err> {
    let raw_root = raw_root.as_ref();
    let read_dir = |source| Err::ReadDir {
        path: raw_root.to_path_buf(),
        source,
    };
    let mut folders = Vec::new();
    for entry in fs::read_dir(raw_root).map_err(read_dir)? {
        let path = entry.map_err(read_dir)?.path();
        if path.is_dir() {
            folders.push(path);
        }
    }
    folders.sort();
    Ok(folders)
}

/// Finds the subject's metadata record: the lexically first `.json` file in
/// the folder. Sorting keeps the "first found" choice deterministic when a
/// folder holds more than one record.
pub fn find_metadata<P: AsRef<Path>>(folder: P) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(folder.as_ref())
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().map_or(false, |ext| ext == "json")
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_folders_are_sorted_and_exclude_files() {
        let folders = subject_folders("tests/data/raw").unwrap();
        let names: Vec<_> = folders
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["case_a", "case_b", "case_c", "case_d", "case_e"]);
    }

    #[test]
    fn find_metadata_picks_the_lexically_first_record() {
        let meta = find_metadata("tests/data/raw/case_a").unwrap();
        assert_eq!(meta.file_name().unwrap(), "case_a.json");
    }

    #[test]
    fn find_metadata_is_none_without_a_record() {
        assert!(find_metadata("tests/data/proc").is_none());
        assert!(find_metadata("tests/data/no_such_folder").is_none());
    }

    #[test]
    fn missing_root_is_an_error() {
        assert!(subject_folders("tests/data/no_such_root").is_err());
    }
}
