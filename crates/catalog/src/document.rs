//! Decoding of prototype documents.
//!
//! A document is a sequence of entries:
//!
//! ```yaml
//! - mesh: corner.glb            # required, non-blank
//!   rotation: { x: 0, y: 90 }   # optional, degrees, missing axes are 0
//!   neighbors:                  # optional
//!     0:                        # direction index 0..=5, integer or digits "0"
//!       - mesh: straight.glb
//!         rotation: { y: 90 }
//! ```
//!
//! Parsing is all-or-nothing. The first violation aborts with the position of
//! the offending entry.

use serde_yaml::{Mapping, Value};
use tileview_common::{Direction, MeshId, Rotation};

use crate::error::CatalogError;
use crate::prototype::{NeighborCandidate, NeighborTable, Prototype};

const ENTRY_KEYS: [&str; 3] = ["mesh", "rotation", "neighbors"];
const CANDIDATE_KEYS: [&str; 2] = ["mesh", "rotation"];
const AXIS_KEYS: [&str; 3] = ["x", "y", "z"];

/// Parse every top-level entry into a [`Prototype`], preserving order.
pub(crate) fn parse_document(document: &Value) -> Result<Vec<Prototype>, CatalogError> {
    let entries = document.as_sequence().ok_or_else(|| {
        CatalogError::malformed(
            None,
            format!("top level must be a sequence, found {}", kind(document)),
        )
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let prototype =
                parse_prototype(entry).map_err(|reason| CatalogError::malformed(Some(i), reason))?;
            tracing::debug!(
                entry = i,
                mesh = %prototype.mesh(),
                directions = prototype.neighbor_table().defined_directions(),
                "parsed prototype"
            );
            Ok(prototype)
        })
        .collect()
}

fn parse_prototype(entry: &Value) -> Result<Prototype, String> {
    let map = entry
        .as_mapping()
        .ok_or_else(|| format!("entry must be a mapping, found {}", kind(entry)))?;
    note_unknown_keys(map, "entry", &ENTRY_KEYS);

    let mesh = parse_mesh(map, "mesh")?;
    let rotation = parse_rotation(map.get("rotation"), "rotation")?;
    let neighbors = parse_neighbors(map.get("neighbors"))?;
    Ok(Prototype::new(mesh, rotation, neighbors))
}

fn parse_candidate(value: &Value, path: &str) -> Result<NeighborCandidate, String> {
    let map = value
        .as_mapping()
        .ok_or_else(|| format!("{path} must be a mapping, found {}", kind(value)))?;
    note_unknown_keys(map, path, &CANDIDATE_KEYS);

    let mesh = parse_mesh(map, &format!("{path}.mesh"))?;
    let rotation = parse_rotation(map.get("rotation"), &format!("{path}.rotation"))?;
    Ok(NeighborCandidate::new(mesh, rotation))
}

fn parse_mesh(map: &Mapping, path: &str) -> Result<MeshId, String> {
    match map.get("mesh") {
        None | Some(Value::Null) => Err(format!("{path} is missing")),
        Some(Value::String(s)) => MeshId::new(s.as_str()).map_err(|e| format!("{path}: {e}")),
        Some(other) => Err(format!("{path} must be a string, found {}", kind(other))),
    }
}

fn parse_rotation(value: Option<&Value>, path: &str) -> Result<Rotation, String> {
    let map = match value {
        None | Some(Value::Null) => return Ok(Rotation::ZERO),
        Some(Value::Mapping(map)) => map,
        Some(other) => {
            return Err(format!("{path} must be a mapping, found {}", kind(other)));
        }
    };
    note_unknown_keys(map, path, &AXIS_KEYS);

    Ok(Rotation::from_degrees(
        parse_angle(map.get("x"), path, "x")?,
        parse_angle(map.get("y"), path, "y")?,
        parse_angle(map.get("z"), path, "z")?,
    ))
}

fn parse_angle(value: Option<&Value>, path: &str, axis: &str) -> Result<f32, String> {
    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => match n.as_f64().map(|deg| deg as f32) {
            Some(deg) if deg.is_finite() => Ok(deg),
            _ => Err(format!("{path}.{axis} must be a finite f32, found {n}")),
        },
        Some(other) => Err(format!(
            "{path}.{axis} must be a number, found {}",
            kind(other)
        )),
    }
}

fn parse_neighbors(value: Option<&Value>) -> Result<NeighborTable, String> {
    let map = match value {
        None | Some(Value::Null) => return Ok(NeighborTable::new()),
        Some(Value::Mapping(map)) => map,
        Some(other) => {
            return Err(format!("neighbors must be a mapping, found {}", kind(other)));
        }
    };

    let mut table = NeighborTable::new();
    let mut seen = [false; Direction::COUNT];
    for (key, candidates) in map {
        let direction = parse_direction_key(key)?;
        let slot = usize::from(direction.index());
        if seen[slot] {
            return Err(format!("neighbors declares direction {slot} more than once"));
        }
        seen[slot] = true;

        let candidates = match candidates {
            Value::Null => Vec::new(),
            Value::Sequence(seq) => seq
                .iter()
                .enumerate()
                .map(|(j, c)| parse_candidate(c, &format!("neighbors.{slot}[{j}]")))
                .collect::<Result<Vec<_>, _>>()?,
            other => {
                return Err(format!(
                    "neighbors.{slot} must be a sequence, found {}",
                    kind(other)
                ));
            }
        };
        table.set(direction, candidates);
    }
    Ok(table)
}

/// Direction keys are integers `0..=5`, or strings of bare digits such as `"3"`.
fn parse_direction_key(key: &Value) -> Result<Direction, String> {
    let index = match key {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| format!("neighbors key {n} is not an integer direction index"))?,
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => s
            .parse::<i64>()
            .map_err(|_| format!("neighbors key {s:?} is not a direction index"))?,
        Value::String(s) => {
            return Err(format!("neighbors key {s:?} is not a direction index"));
        }
        other => {
            return Err(format!(
                "neighbors key must be a direction index, found {}",
                kind(other)
            ));
        }
    };
    Direction::from_index(index).map_err(|e| format!("neighbors key: {e}"))
}

fn note_unknown_keys(map: &Mapping, path: &str, known: &[&str]) {
    for key in map.keys() {
        if !key.as_str().is_some_and(|k| known.contains(&k)) {
            tracing::debug!(?key, path, "ignoring unknown key");
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
