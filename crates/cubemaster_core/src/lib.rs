//! Cube state and turn engine for a virtual 3x3x3 twisty puzzle.
//!
//! The [`Cube`] owns the 26 visible [`Cubie`]s. A [`Move`] decodes to a
//! [`Turn`], which selects one layer along one axis and rotates it by a
//! quarter turn. Committing a turn permutes cubie positions and relabels
//! which face slot holds which sticker color.

mod color;
mod cube;
mod cubie;
mod errors;
mod notation;
mod scramble;


pub use color::{Color, Face, FaceColors};
pub use cube::{Cube, relabel_cycle};
pub use cubie::{Cubie, CubieId, Position, position_vec3, snap_to_lattice};
pub use errors::{InvariantError, ParseMoveError};
pub use notation::{Axis, Move, MoveFace, MoveSet, Sign, Turn};
pub use scramble::ScrambleParams;

/// Number of visible cubies on a 3x3x3 cube.
pub const CUBIE_COUNT: usize = 26;

/// Default number of moves in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: u32 = 20;
