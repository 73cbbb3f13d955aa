use std::fmt;

use cgmath::Vector3;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::{FaceColors, Turn};

/// Integer lattice point in `{-1, 0, 1}^3`.
pub type Position = [i8; 3];

/// Identity of a cubie: its position on a solved cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubieId(pub Position);
impl fmt::Display for CubieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "{x}-{y}-{z}")
    }
}
impl CubieId {
    /// Returns the identities of all 26 visible cubies, ordered by x, then y,
    /// then z.
    pub fn all() -> impl Iterator<Item = CubieId> {
        iproduct!(-1..=1, -1..=1, -1..=1)
            .map(|(x, y, z)| [x, y, z])
            .filter(|&p| p != [0, 0, 0])
            .map(CubieId)
    }
    /// Returns the sticker colors the cubie carries.
    pub fn home_colors(self) -> FaceColors {
        FaceColors::for_home_position(self.0)
    }
    /// Returns the number of stickers on the cubie: 1 for a center, 2 for an
    /// edge, or 3 for a corner.
    pub fn sticker_count(self) -> usize {
        self.0.iter().filter(|&&c| c != 0).count()
    }
}

/// One of the 26 visible cubies.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cubie {
    /// Identity of the cubie.
    pub id: CubieId,
    /// Current position.
    pub position: Position,
    /// Color in each face slot.
    pub colors: FaceColors,
}
impl Cubie {
    /// Constructs a cubie in its solved position.
    pub fn new(id: CubieId) -> Self {
        Self {
            id,
            position: id.0,
            colors: id.home_colors(),
        }
    }

    /// Returns the cubie after a committed quarter turn, assuming the turn
    /// affects it.
    ///
    /// The new position is snapped back onto the integer lattice so that
    /// floating-point error never accumulates across turns.
    #[must_use]
    pub fn turned(&self, turn: Turn) -> Self {
        let rotated = turn.axis.rotation_matrix(turn.angle()) * position_vec3(self.position);
        Self {
            id: self.id,
            position: snap_to_lattice(rotated),
            colors: self.colors.cycled(crate::relabel_cycle(turn.axis, turn.sign)),
        }
    }
}

/// Converts a lattice position to a floating-point vector.
pub fn position_vec3(position: Position) -> Vector3<f32> {
    Vector3::from(position.map(f32::from))
}

/// Rounds each coordinate to the nearest integer.
pub fn snap_to_lattice(v: Vector3<f32>) -> Position {
    let v: [f32; 3] = v.into();
    v.map(|c| c.round() as i8)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cubie_ids() {
        let ids: Vec<CubieId> = CubieId::all().collect();
        assert_eq!(ids.len(), crate::CUBIE_COUNT);
        assert_eq!(ids[0].to_string(), "-1--1--1");
        assert_eq!(CubieId([1, 0, -1]).to_string(), "1-0--1");

        let centers = ids.iter().filter(|id| id.sticker_count() == 1).count();
        let edges = ids.iter().filter(|id| id.sticker_count() == 2).count();
        let corners = ids.iter().filter(|id| id.sticker_count() == 3).count();
        assert_eq!((centers, edges, corners), (6, 12, 8));
    }

    #[test]
    fn test_snap_to_lattice() {
        assert_eq!(snap_to_lattice(Vector3::new(0.999_99, -1e-7, -1.000_02)), [1, 0, -1]);
    }
}
