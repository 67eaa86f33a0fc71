use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};

/// A predicted point cloud: per-point colors in unit range and per-point
/// positions, index-aligned 1:1.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    pub colors: Vec<[f32; 3]>,
    pub positions: Vec<[f32; 3]>,
}

#[remain::sorted]
#[derive(Debug, thiserror::Error)]
pub enum Err {
    #[error("{path}: vertex property '{name}' is missing or has an unsupported type")]
    MissingProperty { path: PathBuf, name: &'static str },
    #[error("{path}: point cloud has no vertex element")]
    MissingVertexElement { path: PathBuf },
    #[error("point cloud not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to parse point cloud: {0}")]
    Parse(#[from] std::io::Error),
}

/// Reads a PLY point cloud, returning its vertex colors and positions.
///
/// A missing file is reported as `NotFound`, distinct from a cloud that
/// parses to zero vertices. Integer color channels are normalized to
/// `[0, 1]` by /255, matching how the prediction pipeline wrote them;
/// float channels pass through unchanged.
pub fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud, Err> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Err::NotFound(path.to_path_buf()));
    }

    let mut reader = BufReader::new(File::open(path)?);
    let cloud = Parser::<DefaultElement>::new().read_ply(&mut reader)?;
    let vertices = cloud
        .payload
        .get("vertex")
        .ok_or_else(|| Err::MissingVertexElement {
            path: path.to_path_buf(),
        })?;

    let mut colors = Vec::with_capacity(vertices.len());
    let mut positions = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        colors.push([
            unit_channel(vertex.get("red")).ok_or_else(|| missing(path, "red"))?,
            unit_channel(vertex.get("green")).ok_or_else(|| missing(path, "green"))?,
            unit_channel(vertex.get("blue")).ok_or_else(|| missing(path, "blue"))?,
        ]);
        positions.push([
            coordinate(vertex.get("x")).ok_or_else(|| missing(path, "x"))?,
            coordinate(vertex.get("y")).ok_or_else(|| missing(path, "y"))?,
            coordinate(vertex.get("z")).ok_or_else(|| missing(path, "z"))?,
        ]);
    }

    Ok(PointCloud { colors, positions })
}

fn missing(path: &Path, name: &'static str) -> Err {
    Err::MissingProperty {
        path: path.to_path_buf(),
        name,
    }
}

fn unit_channel(prop: Option<&Property>) -> Option<f32> {
    match prop? {
        Property::UChar(v) => Some(*v as f32 / 255.0),
        Property::Float(v) => Some(*v),
        Property::Double(v) => Some(*v as f32),
        _ => None,
    }
}

fn coordinate(prop: Option<&Property>) -> Option<f32> {
    match prop? {
        Property::Float(v) => Some(*v),
        Property::Double(v) => Some(*v as f32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uchar_colors_normalize_to_unit_range() {
        let cloud = read_point_cloud("tests/data/proc/case_b_upper_label.ply").unwrap();
        assert_eq!(cloud.colors.len(), 2);
        assert_eq!(cloud.positions.len(), 2);
        assert_eq!(cloud.colors[0], [102.0 / 255.0, 204.0 / 255.0, 153.0 / 255.0]);
    }

    #[test]
    fn float_colors_pass_through() {
        let cloud = read_point_cloud("tests/data/proc/case_c_lower_label.ply").unwrap();
        assert_eq!(cloud.colors, vec![[1.0, 1.0, 1.0], [1.0, 1.0, 1.0]]);
    }

    #[test]
    fn missing_file_is_not_found() {
        assert!(matches!(
            read_point_cloud("tests/data/proc/absent.ply"),
            Err(super::Err::NotFound(_))
        ));
    }
}
