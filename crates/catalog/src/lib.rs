//! Prototype Catalog: tile definitions and their directional neighbor rules.
//!
//! # Invariants
//! - A catalog is built once from a fully validated document and never mutated.
//! - Construction is all-or-nothing: one malformed entry rejects the document.
//! - Neighbor selection is deterministic: the first declared candidate wins.
//! - Cursors are owned by their drivers; the catalog holds no selection state.

mod catalog;
mod cursor;
mod document;
mod error;
pub mod loader;
mod prototype;

pub use catalog::Catalog;
pub use cursor::Cursor;
pub use error::CatalogError;
pub use loader::{LoadError, load_catalog};
pub use prototype::{NeighborCandidate, NeighborTable, Prototype};

pub fn crate_info() -> &'static str {
    "tileview-catalog v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileview_common::Direction;

    const SAMPLE: &str = include_str!("../../../assets/prototypes.yaml");

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("catalog"));
    }

    #[test]
    fn sample_document_builds() {
        let catalog = Catalog::from_yaml_str(SAMPLE).unwrap();
        assert!(!catalog.is_empty());
        for prototype in &catalog {
            for (direction, candidates) in prototype.neighbor_table().iter() {
                assert_eq!(
                    prototype.first_neighbor(direction),
                    candidates.first(),
                    "{} {direction}",
                    prototype.mesh()
                );
            }
        }
    }

    #[test]
    fn sample_neighbors_reference_catalog_meshes() {
        let catalog = Catalog::from_yaml_str(SAMPLE).unwrap();
        for prototype in &catalog {
            for direction in Direction::ALL {
                for candidate in prototype.neighbors(direction) {
                    assert!(
                        catalog.find_by_mesh(candidate.mesh.as_str()).is_some(),
                        "{} is not a prototype",
                        candidate.mesh
                    );
                }
            }
        }
    }
}
