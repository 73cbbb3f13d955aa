//! Cubie registry and turn engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{Axis, CUBIE_COUNT, Cubie, CubieId, Face, InvariantError, Move, Position, Sign, Turn};

/// Face slot 4-cycle for each quarter turn, indexed by axis and then by sign
/// (negative first).
///
/// For a cycle `[a, b, c, d]`, slot `a` receives the color from `b`, `b`
/// from `c`, `c` from `d`, and `d` from `a`. The two slots along the turn
/// axis are never part of the cycle.
const RELABEL_CYCLES: [[[Face; 4]; 2]; 3] = {
    use Face::*;
    [
        // X
        [
            [Top, Front, Bottom, Back], // negative
            [Top, Back, Bottom, Front], // positive
        ],
        // Y
        [
            [Front, Right, Back, Left], // negative
            [Front, Left, Back, Right], // positive
        ],
        // Z
        [
            [Top, Left, Bottom, Right], // negative
            [Top, Right, Bottom, Left], // positive
        ],
    ]
};

/// Returns the face slot 4-cycle applied to the colors of every cubie
/// affected by a quarter turn about `axis` with sign `sign`.
///
/// See [`crate::FaceColors::cycled()`] for how the cycle is read.
pub fn relabel_cycle(axis: Axis, sign: Sign) -> &'static [Face; 4] {
    let sign_index = match sign {
        Sign::Neg => 0,
        Sign::Pos => 1,
    };
    &RELABEL_CYCLES[axis as usize][sign_index]
}

/// State of a 3x3x3 cube: the 26 visible cubies.
///
/// The order of cubies never changes; each cubie carries its own position.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    cubies: Vec<Cubie>,
}
impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
impl Cube {
    /// Constructs a solved cube in the canonical layout.
    pub fn new() -> Self {
        Self {
            cubies: CubieId::all().map(Cubie::new).collect(),
        }
    }

    /// Returns all cubies, in the canonical order of their identities.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }
    /// Returns the cubie currently at `position`, if any.
    pub fn cubie_at(&self, position: Position) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.position == position)
    }
    /// Returns the cubie with the given identity.
    pub fn cubie(&self, id: CubieId) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.id == id)
    }

    /// Returns the indices of cubies in the layer selected by `axis` and
    /// `layer`. A layer outside `{-1, 0, 1}` selects nothing.
    pub fn select_affected(&self, axis: Axis, layer: i8) -> Vec<usize> {
        let turn = Turn {
            axis,
            layer,
            sign: Sign::Pos,
        };
        (0..self.cubies.len())
            .filter(|&i| turn.affects(self.cubies[i].position))
            .collect()
    }

    /// Applies a quarter turn in place, touching only the cubies returned by
    /// [`Cube::select_affected()`].
    pub fn twist(&mut self, turn: Turn) {
        for i in self.select_affected(turn.axis, turn.layer) {
            self.cubies[i] = self.cubies[i].turned(turn);
        }
    }
    /// Returns the cube after a quarter turn.
    #[must_use]
    pub fn twisted(&self, turn: Turn) -> Self {
        let mut ret = self.clone();
        ret.twist(turn);
        ret
    }
    /// Applies a sequence of moves in place.
    pub fn apply_moves<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for m in moves {
            self.twist(m.turn());
        }
    }

    /// Returns whether every face of the cube shows a single color.
    ///
    /// This does not require centers to be in their home positions, so a cube
    /// that has only been reoriented by slice moves is still solved.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| {
            let axis = face.axis() as usize;
            let mut colors = self
                .cubies
                .iter()
                .filter(|c| c.position[axis] == face.sign().int())
                .map(|c| c.colors[face]);
            match colors.next() {
                Some(first) => first.is_sticker() && colors.all(|c| c == first),
                None => false,
            }
        })
    }

    /// Checks that positions form a permutation of the 26 visible lattice
    /// points and that every cubie carries exactly its own stickers.
    pub fn validate(&self) -> Result<(), InvariantError> {
        if self.cubies.len() != CUBIE_COUNT {
            return Err(InvariantError::WrongCubieCount(self.cubies.len()));
        }
        let mut seen_positions = HashSet::new();
        let mut seen_ids = HashSet::new();
        for cubie in &self.cubies {
            let p = cubie.position;
            if p == [0, 0, 0] || p.iter().any(|c| !(-1..=1).contains(c)) {
                return Err(InvariantError::InvalidPosition {
                    cubie: cubie.id,
                    position: p,
                });
            }
            if !seen_positions.insert(p) {
                return Err(InvariantError::DuplicatePosition(p));
            }
            if !seen_ids.insert(cubie.id) {
                return Err(InvariantError::DuplicateId(cubie.id));
            }
            if cubie.colors.sorted() != cubie.id.home_colors().sorted() {
                return Err(InvariantError::ColorsNotConserved(cubie.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cubie::position_vec3;
    use crate::{Color, MoveFace};

    #[test]
    fn test_relabel_cycles_match_geometry() {
        // The color leaving slot `cycle[i + 1]` lands in slot `cycle[i]`, so
        // rotating the normal of the source slot must give the normal of the
        // destination slot.
        for axis in Axis::iter() {
            for sign in [Sign::Neg, Sign::Pos] {
                let turn = Turn {
                    axis,
                    layer: 1,
                    sign,
                };
                let m = axis.rotation_matrix(turn.angle());
                let cycle = relabel_cycle(axis, sign);
                for i in 0..4 {
                    let src = cycle[(i + 1) % 4];
                    let dst = cycle[i];
                    let rotated = crate::cubie::snap_to_lattice(m * position_vec3(src.normal()));
                    assert_eq!(Face::from_normal(rotated), Some(dst), "{axis} {sign:?}");
                }
                for face in Face::iter() {
                    assert_eq!(cycle.contains(&face), face.axis() != axis);
                }
            }
        }
    }

    #[test]
    fn test_opposite_signs_are_inverse_cycles() {
        for axis in Axis::iter() {
            let mut neg = *relabel_cycle(axis, Sign::Neg);
            neg.reverse();
            let pos = relabel_cycle(axis, Sign::Pos);
            // Same cycle traversed backwards, up to rotation.
            assert!((0..4).any(|k| {
                let mut rotated = neg;
                rotated.rotate_left(k);
                rotated == *pos
            }));
        }
    }

    #[test]
    fn test_new_cube_is_valid_and_solved() {
        let cube = Cube::new();
        assert_eq!(cube.validate(), Ok(()));
        assert!(cube.is_solved());
    }

    #[test]
    fn test_layer_selection() {
        let cube = Cube::new();
        for axis in Axis::iter() {
            assert_eq!(cube.select_affected(axis, 1).len(), 9);
            assert_eq!(cube.select_affected(axis, 0).len(), 8);
            assert_eq!(cube.select_affected(axis, -1).len(), 9);
            assert_eq!(cube.select_affected(axis, 2).len(), 0);
        }
    }

    #[test]
    fn test_out_of_range_layer_is_identity() {
        let cube = Cube::new();
        let turn = Turn {
            axis: Axis::X,
            layer: 5,
            sign: Sign::Pos,
        };
        assert_eq!(cube.twisted(turn), cube);
    }

    #[test]
    fn test_single_u_turn() {
        let cube = Cube::new();
        let after = cube.twisted(Move::new(MoveFace::U).turn());

        for (before, after) in cube.cubies().iter().zip(after.cubies()) {
            if before.position[1] == -1 {
                assert_eq!(before, after);
            }
            if before.position[1] != 1 {
                assert_eq!(before.position, after.position);
            }
        }

        // The front-right-top corner moves to front-left-top, keeping white on
        // top; its front sticker (green) now faces left and its right
        // sticker (red) now faces front.
        let corner = after.cubie(CubieId([1, 1, 1])).unwrap();
        assert_eq!(corner.position, [-1, 1, 1]);
        assert_eq!(corner.colors.top, Color::White);
        assert_eq!(corner.colors.left, Color::Green);
        assert_eq!(corner.colors.front, Color::Red);
        assert_eq!(corner.colors.right, Color::Blank);

        // The whole front row of the top layer now shows red.
        for x in -1..=1 {
            let c = after.cubie_at([x, 1, 1]).unwrap();
            assert_eq!(c.colors.front, Color::Red);
        }
        assert!(!after.is_solved());
        assert_eq!(after.validate(), Ok(()));
    }

    #[test]
    fn test_sexy_move_order() {
        // (R U R' U') has order 6.
        let sexy = Move::parse_sequence("R U R' U'").unwrap();
        let mut cube = Cube::new();
        for i in 1..=6 {
            cube.apply_moves(&sexy);
            assert_eq!(cube.is_solved(), i == 6);
        }
        assert_eq!(cube, Cube::new());
    }

    #[test]
    fn test_slice_moves_reorient_but_stay_solved() {
        let mut cube = Cube::new();
        cube.apply_moves(&Move::parse_sequence("M' R L'").unwrap()); // x rotation
        assert!(cube.is_solved());
        assert_ne!(cube, Cube::new());
        let top_center = cube.cubie_at([0, 1, 0]).unwrap();
        assert_eq!(top_center.colors.top, Color::Green);
    }

    #[test]
    fn test_validate_catches_duplicates() {
        let mut cube = Cube::new();
        cube.cubies[1].position = cube.cubies[0].position;
        assert!(matches!(
            cube.validate(),
            Err(InvariantError::DuplicatePosition(_)),
        ));

        let mut cube = Cube::new();
        cube.cubies[0].colors.top = Color::Red;
        assert!(matches!(
            cube.validate(),
            Err(InvariantError::ColorsNotConserved(_)),
        ));
    }
}
