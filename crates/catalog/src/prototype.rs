use serde::ser::{Serialize, SerializeMap, Serializer};
use tileview_common::{Direction, MeshId, Rotation};

/// A tile allowed next to a prototype in some direction.
///
/// Carries placement data only; neighbor lookups are one level deep.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NeighborCandidate {
    pub mesh: MeshId,
    pub rotation: Rotation,
}

impl NeighborCandidate {
    pub fn new(mesh: MeshId, rotation: Rotation) -> Self {
        Self { mesh, rotation }
    }
}

/// Ordered neighbor candidates for each of the six directions.
///
/// Serializes as a map from direction index to candidates, omitting
/// directions with no candidates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeighborTable {
    slots: [Vec<NeighborCandidate>; Direction::COUNT],
}

impl NeighborTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates declared for `direction`, empty if none.
    pub fn get(&self, direction: Direction) -> &[NeighborCandidate] {
        &self.slots[usize::from(direction.index())]
    }

    pub(crate) fn set(&mut self, direction: Direction, candidates: Vec<NeighborCandidate>) {
        self.slots[usize::from(direction.index())] = candidates;
    }

    /// Every direction in index order with its candidates, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &[NeighborCandidate])> {
        Direction::ALL
            .into_iter()
            .zip(self.slots.iter().map(Vec::as_slice))
    }

    /// Number of directions with at least one candidate.
    pub fn defined_directions(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// Total candidates across all directions.
    pub fn candidate_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}

impl Serialize for NeighborTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.defined_directions()))?;
        for (direction, candidates) in self.iter().filter(|(_, c)| !c.is_empty()) {
            map.serialize_entry(&direction, candidates)?;
        }
        map.end()
    }
}

/// One tile definition: mesh, orientation and directional neighbor rules.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Prototype {
    mesh: MeshId,
    rotation: Rotation,
    neighbors: NeighborTable,
}

impl Prototype {
    pub(crate) fn new(mesh: MeshId, rotation: Rotation, neighbors: NeighborTable) -> Self {
        Self {
            mesh,
            rotation,
            neighbors,
        }
    }

    pub fn mesh(&self) -> &MeshId {
        &self.mesh
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn neighbor_table(&self) -> &NeighborTable {
        &self.neighbors
    }

    /// Declared candidates for `direction`, in document order.
    pub fn neighbors(&self, direction: Direction) -> &[NeighborCandidate] {
        self.neighbors.get(direction)
    }

    /// The candidate used for placement: always the first one declared.
    pub fn first_neighbor(&self, direction: Direction) -> Option<&NeighborCandidate> {
        self.neighbors(direction).first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(mesh: &str) -> NeighborCandidate {
        NeighborCandidate::new(MeshId::new(mesh).unwrap(), Rotation::ZERO)
    }

    #[test]
    fn empty_table_has_no_candidates() {
        let table = NeighborTable::new();
        assert!(table.is_empty());
        for d in Direction::ALL {
            assert!(table.get(d).is_empty());
        }
        assert_eq!(table.iter().count(), Direction::COUNT);
    }

    #[test]
    fn first_candidate_wins() {
        let mut table = NeighborTable::new();
        table.set(Direction::PosY, vec![candidate("a"), candidate("b")]);
        let p = Prototype::new(MeshId::new("c").unwrap(), Rotation::ZERO, table);

        assert_eq!(p.first_neighbor(Direction::PosY).unwrap().mesh.as_str(), "a");
        assert!(p.first_neighbor(Direction::NegY).is_none());
        assert_eq!(p.neighbor_table().defined_directions(), 1);
        assert_eq!(p.neighbor_table().candidate_count(), 2);
    }

    #[test]
    fn table_serializes_only_defined_directions() {
        let mut table = NeighborTable::new();
        table.set(Direction::NegZ, vec![candidate("a")]);
        let json = serde_json::to_value(&table).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["5"][0]["mesh"], "a");
    }
}
