use thiserror::Error;

use crate::CubieId;

/// Error produced when parsing a move token.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseMoveError {
    /// Empty token
    #[error("empty move")]
    Empty,
    /// Letter outside the move vocabulary
    #[error("unknown move letter {0:?}")]
    UnknownLetter(char),
    /// Anything after the letter other than the inverse marker
    #[error("invalid move suffix {0:?}")]
    BadSuffix(String),
}

/// Error produced when a cube state breaks an invariant of the cubie
/// registry.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvariantError {
    /// Wrong number of cubies
    #[error("expected 26 cubies; got {0}")]
    WrongCubieCount(usize),
    /// Cubie outside the 26 visible lattice points
    #[error("cubie {cubie} is at invalid position {position:?}")]
    InvalidPosition {
        /// Cubie identity.
        cubie: CubieId,
        /// Offending position.
        position: [i8; 3],
    },
    /// Two cubies at the same position
    #[error("more than one cubie at position {0:?}")]
    DuplicatePosition([i8; 3]),
    /// Two cubies with the same identity
    #[error("more than one cubie with ID {0}")]
    DuplicateId(CubieId),
    /// Sticker colors gained, lost, or duplicated
    #[error("colors of cubie {0} are not conserved")]
    ColorsNotConserved(CubieId),
}
