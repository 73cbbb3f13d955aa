use std::collections::BTreeMap;

use cgmath::{One, Quaternion, Vector3};
use cubemaster_core::{CubieId, FaceColors, Position, position_vec3};
use serde::Serialize;

/// Visual placement of a cubie for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubieTransform {
    /// Center of the cubie.
    pub position: Vector3<f32>,
    /// Rotation from the cubie's committed orientation.
    pub orientation: Quaternion<f32>,
}
impl CubieTransform {
    /// Returns the transform of a cubie that is not turning.
    pub fn at_rest(position: Position) -> Self {
        Self {
            position: position_vec3(position),
            orientation: Quaternion::one(),
        }
    }
}

/// Everything a renderer needs to draw one cubie.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderCubie {
    /// Identity of the cubie.
    pub id: CubieId,
    /// Committed lattice position.
    pub position: Position,
    /// Committed sticker colors. Colors are relabeled only when a turn
    /// commits, so during an animation they are rotated by
    /// [`CubieTransform::orientation`].
    pub colors: FaceColors,
    /// Placement for this frame, including any turn in flight.
    pub transform: CubieTransform,
}

/// Serializable form of [`RenderCubie`] with hex colors, for frontends that
/// draw from JSON.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct RenderCubieJson {
    pub id: String,
    pub position: [f32; 3],
    /// Rotation quaternion as `[w, x, y, z]`.
    pub orientation: [f32; 4],
    /// Hex color of each face slot, keyed by slot name.
    pub colors: BTreeMap<String, String>,
}
impl From<&RenderCubie> for RenderCubieJson {
    fn from(cubie: &RenderCubie) -> Self {
        let q = cubie.transform.orientation;
        Self {
            id: cubie.id.to_string(),
            position: cubie.transform.position.into(),
            orientation: [q.s, q.v.x, q.v.y, q.v.z],
            colors: cubie
                .colors
                .iter()
                .map(|(face, color)| (face.to_string(), color.hex()))
                .collect(),
        }
    }
}
