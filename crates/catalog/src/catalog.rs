use std::collections::HashSet;

use serde::Serialize;
use serde_yaml::Value;
use tileview_common::{Direction, MeshId};

use crate::cursor::Cursor;
use crate::document;
use crate::error::CatalogError;
use crate::prototype::{NeighborCandidate, Prototype};

/// Immutable, ordered collection of prototypes.
///
/// Order matches declaration order in the source document, and a prototype's
/// position is its identity. A `Catalog` only exists once a document has been
/// fully validated; there is no partially built or mutable state, so it can be
/// shared freely across readers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    prototypes: Vec<Prototype>,
}

impl Catalog {
    /// Build a catalog from a decoded document.
    ///
    /// Fails with [`CatalogError::MalformedDocument`] on the first structural
    /// violation; no partial catalog is ever produced.
    pub fn build_from(document: &Value) -> Result<Self, CatalogError> {
        let _span = tracing::info_span!("catalog_build").entered();
        let prototypes = document::parse_document(document)?;
        tracing::info!(count = prototypes.len(), "catalog built");
        Ok(Self { prototypes })
    }

    /// Decode YAML text and build a catalog from it.
    pub fn from_yaml_str(text: &str) -> Result<Self, CatalogError> {
        let document: Value = serde_yaml::from_str(text)
            .map_err(|e| CatalogError::malformed(None, format!("invalid YAML: {e}")))?;
        Self::build_from(&document)
    }

    /// Prototype at `index`.
    pub fn get(&self, index: usize) -> Result<&Prototype, CatalogError> {
        self.prototypes
            .get(index)
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                len: self.prototypes.len(),
            })
    }

    /// Prototype under `cursor`.
    pub fn current(&self, cursor: &Cursor) -> Result<&Prototype, CatalogError> {
        self.get(cursor.current())
    }

    /// Candidates declared for `prototype` in `direction`; empty when none were.
    pub fn neighbors_for<'p>(
        &self,
        prototype: &'p Prototype,
        direction: Direction,
    ) -> &'p [NeighborCandidate] {
        prototype.neighbors(direction)
    }

    /// Candidates for the prototype at `index` in the direction with wire
    /// index `direction`.
    pub fn neighbors_at(
        &self,
        index: usize,
        direction: i64,
    ) -> Result<&[NeighborCandidate], CatalogError> {
        let direction = Direction::from_index(direction)?;
        Ok(self.get(index)?.neighbors(direction))
    }

    /// A fresh cursor over this catalog, positioned at the first prototype.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.prototypes.len())
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prototype> {
        self.prototypes.iter()
    }

    /// Position and prototype of the first entry using `mesh`.
    pub fn find_by_mesh(&self, mesh: &str) -> Option<(usize, &Prototype)> {
        self.prototypes
            .iter()
            .enumerate()
            .find(|(_, p)| p.mesh().as_str() == mesh)
    }

    /// Every distinct mesh referenced by prototypes or their candidates, in
    /// first-seen order.
    pub fn meshes(&self) -> Vec<&MeshId> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for prototype in &self.prototypes {
            let candidates = prototype
                .neighbor_table()
                .iter()
                .flat_map(|(_, c)| c.iter().map(|c| &c.mesh));
            for mesh in std::iter::once(prototype.mesh()).chain(candidates) {
                if seen.insert(mesh) {
                    out.push(mesh);
                }
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Prototype;
    type IntoIter = std::slice::Iter<'a, Prototype>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
