//! Shared types: grid directions, mesh ids, rotations and transforms.
//!
//! # Invariants
//! - Direction indices are a frozen wire format; see [`Direction`].
//! - Everything here is pure and allocation-light.

pub mod direction;
pub mod types;

pub use direction::{Direction, DirectionError, index_to_vector, vector_to_index};
pub use types::{BlankMeshId, MeshId, Rotation, Transform};

pub fn crate_info() -> &'static str {
    "tileview-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
