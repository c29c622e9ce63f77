use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Errors from converting between direction codes and grid vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DirectionError {
    #[error("invalid direction index {0}: expected 0..=5")]
    Index(i64),
    #[error("invalid direction vector {0}: expected an axis-aligned unit vector")]
    Vector(IVec3),
}

/// One of the six axis-aligned grid directions.
///
/// The index assignment is a wire format shared with prototype documents and
/// must never change:
///
/// | index | direction | vector     |
/// |-------|-----------|------------|
/// | 0     | `PosX`    | (+1, 0, 0) |
/// | 1     | `NegX`    | (-1, 0, 0) |
/// | 2     | `PosY`    | (0, +1, 0) |
/// | 3     | `NegY`    | (0, -1, 0) |
/// | 4     | `PosZ`    | (0, 0, +1) |
/// | 5     | `NegZ`    | (0, 0, -1) |
///
/// Serializes as its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Direction {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Direction {
    /// Number of grid directions.
    pub const COUNT: usize = 6;

    /// All directions in index order.
    pub const ALL: [Direction; Self::COUNT] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosY,
        Direction::NegY,
        Direction::PosZ,
        Direction::NegZ,
    ];

    /// Decode a direction from its wire index.
    pub fn from_index(index: i64) -> Result<Self, DirectionError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(DirectionError::Index(index))
    }

    /// Wire index of this direction, in `0..=5`.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Unit grid vector pointing in this direction.
    pub fn to_ivec3(self) -> IVec3 {
        match self {
            Direction::PosX => IVec3::X,
            Direction::NegX => IVec3::NEG_X,
            Direction::PosY => IVec3::Y,
            Direction::NegY => IVec3::NEG_Y,
            Direction::PosZ => IVec3::Z,
            Direction::NegZ => IVec3::NEG_Z,
        }
    }

    /// Inverse of [`Direction::to_ivec3`].
    pub fn from_ivec3(v: IVec3) -> Result<Self, DirectionError> {
        Self::ALL
            .into_iter()
            .find(|d| d.to_ivec3() == v)
            .ok_or(DirectionError::Vector(v))
    }

    /// Unit offset in world space, for placing a neighbor mesh.
    pub fn offset(self) -> Vec3 {
        self.to_ivec3().as_vec3()
    }

    /// The direction pointing the other way along the same axis.
    pub fn opposite(self) -> Self {
        match self {
            Direction::PosX => Direction::NegX,
            Direction::NegX => Direction::PosX,
            Direction::PosY => Direction::NegY,
            Direction::NegY => Direction::PosY,
            Direction::PosZ => Direction::NegZ,
            Direction::NegZ => Direction::PosZ,
        }
    }
}

impl From<Direction> for u8 {
    fn from(d: Direction) -> u8 {
        d.index()
    }
}

impl TryFrom<u8> for Direction {
    type Error = DirectionError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(i64::from(index))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::PosX => "+x",
            Direction::NegX => "-x",
            Direction::PosY => "+y",
            Direction::NegY => "-y",
            Direction::PosZ => "+z",
            Direction::NegZ => "-z",
        };
        f.write_str(name)
    }
}

/// Convert a wire direction index to its unit grid vector.
pub fn index_to_vector(index: i64) -> Result<IVec3, DirectionError> {
    Direction::from_index(index).map(Direction::to_ivec3)
}

/// Convert an axis-aligned unit grid vector to its wire direction index.
pub fn vector_to_index(v: IVec3) -> Result<u8, DirectionError> {
    Direction::from_ivec3(v).map(Direction::index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_indices() {
        for i in 0..6 {
            let v = index_to_vector(i).unwrap();
            assert_eq!(i64::from(vector_to_index(v).unwrap()), i);
        }
    }

    #[test]
    fn frozen_assignment() {
        assert_eq!(index_to_vector(0).unwrap(), IVec3::new(1, 0, 0));
        assert_eq!(index_to_vector(1).unwrap(), IVec3::new(-1, 0, 0));
        assert_eq!(index_to_vector(2).unwrap(), IVec3::new(0, 1, 0));
        assert_eq!(index_to_vector(3).unwrap(), IVec3::new(0, -1, 0));
        assert_eq!(index_to_vector(4).unwrap(), IVec3::new(0, 0, 1));
        assert_eq!(index_to_vector(5).unwrap(), IVec3::new(0, 0, -1));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        for i in [-1, 6, 7, i64::MIN, i64::MAX] {
            assert_eq!(index_to_vector(i), Err(DirectionError::Index(i)));
        }
    }

    #[test]
    fn non_canonical_vectors_are_rejected() {
        for v in [
            IVec3::ZERO,
            IVec3::new(1, 1, 0),
            IVec3::new(2, 0, 0),
            IVec3::new(0, -3, 0),
            IVec3::ONE,
        ] {
            assert_eq!(vector_to_index(v), Err(DirectionError::Vector(v)));
        }
    }

    #[test]
    fn opposite_is_involution_and_negates() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.opposite().to_ivec3(), -d.to_ivec3());
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn all_is_in_index_order() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(usize::from(d.index()), i);
        }
    }

    #[test]
    fn offset_matches_grid_vector() {
        assert_eq!(Direction::NegZ.offset(), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(Direction::PosY.offset(), Vec3::Y);
    }

    #[test]
    fn try_from_u8() {
        assert_eq!(Direction::try_from(3u8), Ok(Direction::NegY));
        assert!(Direction::try_from(6u8).is_err());
    }
}
