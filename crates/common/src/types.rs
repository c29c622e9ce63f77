use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Opaque reference to a renderable mesh asset.
///
/// Never opened or interpreted here; only passed through to whatever
/// resolves and draws it. Always non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MeshId(String);

/// Returned when a mesh id would be empty or whitespace only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("mesh id must not be blank")]
pub struct BlankMeshId;

impl MeshId {
    pub fn new(id: impl Into<String>) -> Result<Self, BlankMeshId> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(BlankMeshId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MeshId {
    type Error = BlankMeshId;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<MeshId> for String {
    fn from(id: MeshId) -> String {
        id.0
    }
}

impl std::fmt::Display for MeshId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Intrinsic orientation in degrees, applied about X, then Y, then Z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn from_degrees(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Quaternion equivalent: rotate about local X, then local Y, then local Z.
    pub fn to_quat(&self) -> Quat {
        Quat::from_rotation_x(self.x.to_radians())
            * Quat::from_rotation_y(self.y.to_radians())
            * Quat::from_rotation_z(self.z.to_radians())
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Transform placing an oriented mesh at `position` with unit scale.
    pub fn placed(position: Vec3, rotation: Rotation) -> Self {
        Self {
            position,
            rotation: rotation.to_quat(),
            scale: Vec3::ONE,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_id_rejects_blank() {
        assert_eq!(MeshId::new(""), Err(BlankMeshId));
        assert_eq!(MeshId::new("   "), Err(BlankMeshId));
        assert_eq!(MeshId::new("corner.glb").unwrap().as_str(), "corner.glb");
    }

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn zero_rotation_is_identity() {
        assert_eq!(Rotation::ZERO.to_quat(), Quat::IDENTITY);
        assert_eq!(Rotation::default(), Rotation::ZERO);
    }

    #[test]
    fn yaw_quarter_turn_maps_x_to_neg_z() {
        let q = Rotation::from_degrees(0.0, 90.0, 0.0).to_quat();
        assert!((q * Vec3::X).abs_diff_eq(Vec3::NEG_Z, 1e-5));
    }

    #[test]
    fn rotation_order_is_x_then_y_then_z() {
        let r = Rotation::from_degrees(90.0, 90.0, 0.0);
        let expected = Quat::from_rotation_x(90f32.to_radians())
            * Quat::from_rotation_y(90f32.to_radians());
        assert!(r.to_quat().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn placed_transform_has_unit_scale() {
        let t = Transform::placed(Vec3::new(3.0, 0.0, 0.0), Rotation::ZERO);
        assert_eq!(t.position, Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(t.scale, Vec3::ONE);
    }
}
