//! Move vocabulary: face letters, the inverse marker, and their decoding into
//! an axis, a layer, and a signed quarter-turn angle.

use std::fmt;
use std::str::FromStr;

use cgmath::{Deg, Matrix3, Rad, Vector3};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::ParseMoveError;

/// Suffix marking the inverse of a move.
pub const INVERSE_MARKER: char = '\'';

/// Principal axis of the cube frame.
///
/// X points from the left face to the right face, Y from the bottom face to
/// the top face, and Z from the back face to the front face. The frame is
/// right-handed.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display,
    EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}
impl Axis {
    /// Returns the unit vector along the axis.
    pub fn unit_vec3(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
    /// Returns the right-handed rotation matrix about the axis.
    pub fn rotation_matrix(self, angle: impl Into<Rad<f32>>) -> Matrix3<f32> {
        match self {
            Axis::X => Matrix3::from_angle_x(angle),
            Axis::Y => Matrix3::from_angle_y(angle),
            Axis::Z => Matrix3::from_angle_z(angle),
        }
    }
}

/// Sign of a quarter-turn angle, using the right-hand rule about the turn
/// axis.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative (clockwise, looking down the axis from its positive end).
    Neg = -1,
    /// Positive (counterclockwise, looking down the axis from its positive
    /// end).
    Pos = 1,
}
impl std::ops::Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Sign {
    /// Returns an integer representation of the sign (either -1 or 1).
    pub const fn int(self) -> i8 {
        match self {
            Sign::Neg => -1,
            Sign::Pos => 1,
        }
    }
    /// Returns a floating-point representation of the sign (either -1.0 or
    /// 1.0).
    pub const fn float(self) -> f32 {
        self.int() as f32
    }
}

/// Quarter turn of one layer of the cube, decoded from a [`Move`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    /// Axis of rotation.
    pub axis: Axis,
    /// Which layer along `axis` to turn: -1, 0 (middle slice), or 1.
    pub layer: i8,
    /// Direction of rotation.
    pub sign: Sign,
}
impl Turn {
    /// Quarter turn angle.
    pub const QUARTER_TURN: Deg<f32> = Deg(90.0);

    /// Returns the signed rotation angle.
    pub fn angle(self) -> Rad<f32> {
        (Self::QUARTER_TURN * self.sign.float()).into()
    }
    /// Returns the turn in the opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            sign: -self.sign,
            ..self
        }
    }
    /// Returns whether a cubie at `position` is in the turned layer.
    ///
    /// Membership is all-or-nothing and depends only on the coordinate along
    /// the turn axis.
    pub fn affects(self, position: [i8; 3]) -> bool {
        position[self.axis as usize] == self.layer
    }
}

/// Letter of a move, naming which layer to turn.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display,
    EnumString, EnumIter,
)]
pub enum MoveFace {
    /// Up layer.
    U,
    /// Down layer.
    D,
    /// Left layer.
    L,
    /// Right layer.
    R,
    /// Front layer.
    F,
    /// Back layer.
    B,
    /// Middle slice between L and R, turning like L.
    M,
    /// Equatorial slice between U and D, turning like D.
    E,
    /// Standing slice between F and B, turning like F.
    S,
}
impl MoveFace {
    /// Returns whether the letter names a middle slice.
    pub const fn is_slice(self) -> bool {
        matches!(self, MoveFace::M | MoveFace::E | MoveFace::S)
    }
    /// Returns the turn axis.
    pub const fn axis(self) -> Axis {
        match self {
            MoveFace::L | MoveFace::R | MoveFace::M => Axis::X,
            MoveFace::U | MoveFace::D | MoveFace::E => Axis::Y,
            MoveFace::F | MoveFace::B | MoveFace::S => Axis::Z,
        }
    }
    /// Returns the layer along [`MoveFace::axis()`].
    pub const fn layer(self) -> i8 {
        match self {
            MoveFace::U | MoveFace::R | MoveFace::F => 1,
            MoveFace::D | MoveFace::L | MoveFace::B => -1,
            MoveFace::M | MoveFace::E | MoveFace::S => 0,
        }
    }
    /// Returns the sign of the clockwise turn, as seen from outside the face.
    ///
    /// Clockwise seen from the positive end of an axis is a negative angle,
    /// so U, R, and F turn negatively while D, L, and B turn positively.
    /// Slices copy the face they follow.
    pub const fn clockwise_sign(self) -> Sign {
        match self {
            MoveFace::U | MoveFace::R | MoveFace::F | MoveFace::S => Sign::Neg,
            MoveFace::D | MoveFace::L | MoveFace::B | MoveFace::M | MoveFace::E => Sign::Pos,
        }
    }
}

/// Move token such as `R` or `U'`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    /// Layer letter.
    pub face: MoveFace,
    /// Whether the move carries the inverse marker (counterclockwise seen from
    /// outside the face).
    pub inverse: bool,
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if self.inverse {
            write!(f, "{INVERSE_MARKER}")?;
        }
        Ok(())
    }
}
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParseMoveError::Empty)?;
        let face = MoveFace::from_str(letter.encode_utf8(&mut [0; 4]))
            .map_err(|_| ParseMoveError::UnknownLetter(letter))?;
        let inverse = match chars.as_str() {
            "" => false,
            "'" => true,
            suffix => return Err(ParseMoveError::BadSuffix(suffix.to_owned())),
        };
        Ok(Move { face, inverse })
    }
}
impl Serialize for Move {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
impl Move {
    /// Constructs a clockwise move.
    pub const fn new(face: MoveFace) -> Self {
        Self {
            face,
            inverse: false,
        }
    }
    /// Constructs a counterclockwise move.
    pub const fn new_inverse(face: MoveFace) -> Self {
        Self {
            face,
            inverse: true,
        }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            inverse: !self.inverse,
        }
    }

    /// Decodes the move into an axis, a layer, and a signed angle.
    pub fn turn(self) -> Turn {
        let clockwise = self.face.clockwise_sign();
        Turn {
            axis: self.face.axis(),
            layer: self.face.layer(),
            sign: if self.inverse { -clockwise } else { clockwise },
        }
    }

    /// Returns the move bound to a key, with shift selecting the inverse.
    /// Only the six outer faces have key bindings.
    pub fn from_key(key: char, shift: bool) -> Option<Self> {
        let face = match key.to_ascii_uppercase() {
            'U' => MoveFace::U,
            'D' => MoveFace::D,
            'L' => MoveFace::L,
            'R' => MoveFace::R,
            'F' => MoveFace::F,
            'B' => MoveFace::B,
            _ => return None,
        };
        Some(Self {
            face,
            inverse: shift,
        })
    }

    /// Parses a whitespace-separated sequence of moves.
    pub fn parse_sequence(s: &str) -> Result<Vec<Move>, ParseMoveError> {
        s.split_whitespace().map(str::parse).collect()
    }
    /// Formats a sequence of moves separated by spaces.
    pub fn format_sequence<'a>(moves: impl IntoIterator<Item = &'a Move>) -> String {
        moves.into_iter().join(" ")
    }
}

/// Set of moves available to the user and to the scrambler.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MoveSet {
    /// The six outer faces, each in both directions (12 moves).
    #[default]
    Faces,
    /// The six outer faces and the three middle slices, each in both
    /// directions (18 moves).
    FacesAndSlices,
}
impl MoveSet {
    /// Returns every move in the set, clockwise before counterclockwise.
    pub fn moves(self) -> Vec<Move> {
        let faces = MoveFace::iter().filter(|f| self.contains_face(*f)).collect_vec();
        let clockwise = faces.iter().map(|&f| Move::new(f));
        let counterclockwise = faces.iter().map(|&f| Move::new_inverse(f));
        clockwise.chain(counterclockwise).collect()
    }
    /// Returns the number of moves in the set.
    pub fn size(self) -> usize {
        match self {
            MoveSet::Faces => 12,
            MoveSet::FacesAndSlices => 18,
        }
    }
    /// Returns whether the set contains the move.
    pub fn contains(self, m: Move) -> bool {
        self.contains_face(m.face)
    }
    fn contains_face(self, face: MoveFace) -> bool {
        match self {
            MoveSet::Faces => !face.is_slice(),
            MoveSet::FacesAndSlices => true,
        }
    }
}
