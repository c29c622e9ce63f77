use serde::Serialize;
use tileview_catalog::{Catalog, CatalogError, Cursor, NeighborCandidate};
use tileview_common::{Direction, MeshId, Rotation, Transform};

use crate::config::ShowcaseConfig;

/// A mesh ready to be instanced: what to draw, and where.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub mesh: MeshId,
    /// Declared orientation in degrees; `transform.rotation` is derived from it.
    pub rotation: Rotation,
    pub transform: Transform,
    /// Side of the centre tile this neighbor sits on; `None` for the centre.
    pub direction: Option<Direction>,
}

impl Placement {
    pub fn center(mesh: MeshId, rotation: Rotation) -> Self {
        Self {
            mesh,
            rotation,
            transform: Transform::placed(glam::Vec3::ZERO, rotation),
            direction: None,
        }
    }

    pub fn neighbor(candidate: &NeighborCandidate, direction: Direction, spacing: f32) -> Self {
        Self {
            mesh: candidate.mesh.clone(),
            rotation: candidate.rotation,
            transform: Transform::placed(direction.offset() * spacing, candidate.rotation),
            direction: Some(direction),
        }
    }
}

/// One displayed state: a prototype at the origin plus its first neighbor
/// candidate on each side that declares one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowcaseFrame {
    pub index: usize,
    pub center: Placement,
    pub neighbors: Vec<Placement>,
}

impl ShowcaseFrame {
    /// Lay out the prototype at `index`. Neighbors come in direction index
    /// order; sides with no candidate are skipped.
    pub fn compose(
        catalog: &Catalog,
        index: usize,
        config: &ShowcaseConfig,
    ) -> Result<Self, CatalogError> {
        let prototype = catalog.get(index)?;
        let neighbors = Direction::ALL
            .into_iter()
            .filter_map(|d| {
                prototype
                    .first_neighbor(d)
                    .map(|c| Placement::neighbor(c, d, config.neighbor_spacing))
            })
            .collect::<Vec<_>>();

        tracing::trace!(
            index,
            mesh = %prototype.mesh(),
            neighbors = neighbors.len(),
            "composed frame"
        );
        Ok(Self {
            index,
            center: Placement::center(prototype.mesh().clone(), prototype.rotation()),
            neighbors,
        })
    }

    /// Centre followed by neighbors.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        std::iter::once(&self.center).chain(self.neighbors.iter())
    }
}

/// Display driver: walks a catalog with its own cursor, one frame per call.
///
/// Timing is the caller's business; `config.interval` is only advisory.
#[derive(Debug)]
pub struct Showcase<'a> {
    catalog: &'a Catalog,
    cursor: Cursor,
    config: ShowcaseConfig,
}

impl<'a> Showcase<'a> {
    pub fn new(catalog: &'a Catalog, config: ShowcaseConfig) -> Self {
        Self {
            catalog,
            cursor: catalog.cursor(),
            config,
        }
    }

    /// Start the cycle at `index` instead of 0.
    pub fn starting_at(mut self, index: usize) -> Self {
        self.cursor = Cursor::starting_at(self.catalog.len(), index);
        self
    }

    /// Compose the frame under the cursor, then advance it.
    pub fn next_frame(&mut self) -> Result<ShowcaseFrame, CatalogError> {
        let frame = ShowcaseFrame::compose(self.catalog, self.cursor.current(), &self.config)?;
        self.cursor.advance();
        Ok(frame)
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }
}
