use std::path::{Path, PathBuf};
use std::time::Duration;

use tileview_common::MeshId;

/// Showcase configuration: placement spacing, display cadence, asset lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseConfig {
    /// Distance from the centre tile to each placed neighbor.
    pub neighbor_spacing: f32,
    /// How long each prototype stays on screen.
    pub interval: Duration,
    /// Directory mesh ids are resolved against.
    pub asset_root: PathBuf,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            neighbor_spacing: 3.0,
            interval: Duration::from_secs(5),
            asset_root: PathBuf::from("models"),
        }
    }
}

impl ShowcaseConfig {
    /// File path a renderer should load for `mesh`.
    pub fn mesh_path(&self, mesh: &MeshId) -> PathBuf {
        self.asset_root.join(mesh.as_str())
    }

    pub fn with_asset_root(mut self, root: impl AsRef<Path>) -> Self {
        self.asset_root = root.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ShowcaseConfig::default();
        assert_eq!(c.neighbor_spacing, 3.0);
        assert_eq!(c.interval, Duration::from_secs(5));
    }

    #[test]
    fn mesh_path_joins_asset_root() {
        let c = ShowcaseConfig::default().with_asset_root("assets/tiles");
        let mesh = MeshId::new("corner.glb").unwrap();
        assert_eq!(c.mesh_path(&mesh), Path::new("assets/tiles/corner.glb"));
    }
}
