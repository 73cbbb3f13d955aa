//! Sticker colors and the six logical face slots of a cubie.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::{Axis, Sign};

/// Sticker color.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display,
    EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
    /// Interior-facing slot with no sticker.
    Blank,
}
impl Color {
    /// Returns the display color as 8-bit RGB.
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Color::White => [0xFF, 0xFF, 0xFF],
            Color::Yellow => [0xFF, 0xD7, 0x00],
            Color::Red => [0xFF, 0x00, 0x00],
            Color::Orange => [0xFF, 0x8C, 0x00],
            Color::Blue => [0x00, 0x00, 0xFF],
            Color::Green => [0x00, 0x80, 0x00],
            Color::Blank => [0x11, 0x11, 0x11],
        }
    }
    /// Returns the display color as a hex string such as `#FFD700`.
    pub fn hex(self) -> String {
        let [r, g, b] = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
    /// Returns whether this is a real sticker (not [`Color::Blank`]).
    pub const fn is_sticker(self) -> bool {
        !matches!(self, Color::Blank)
    }
}

/// Logical face slot on a cubie.
///
/// Slots are named relative to the fixed cube frame, not the cubie body, so
/// a committed turn moves colors between slots instead of rotating the slots.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display,
    EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum Face {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}
impl Face {
    /// Returns the axis perpendicular to the face.
    pub const fn axis(self) -> Axis {
        match self {
            Face::Left | Face::Right => Axis::X,
            Face::Top | Face::Bottom => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }
    /// Returns which end of [`Face::axis()`] the face lies on.
    pub const fn sign(self) -> Sign {
        match self {
            Face::Top | Face::Right | Face::Front => Sign::Pos,
            Face::Bottom | Face::Left | Face::Back => Sign::Neg,
        }
    }
    /// Returns the outward unit normal of the face.
    pub fn normal(self) -> [i8; 3] {
        let mut ret = [0; 3];
        ret[self.axis() as usize] = self.sign().int();
        ret
    }
    /// Returns the face with the given outward unit normal, if there is one.
    pub fn from_normal(normal: [i8; 3]) -> Option<Face> {
        Face::iter().find(|f| f.normal() == normal)
    }
    /// Returns the face on the other side of the cube.
    pub const fn opposite(self) -> Face {
        match self {
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }
    /// Returns the color on this face of a solved cube.
    pub const fn home_color(self) -> Color {
        match self {
            Face::Top => Color::White,
            Face::Bottom => Color::Yellow,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
        }
    }
}

/// Color in each of the six face slots of a cubie.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct FaceColors {
    pub top: Color,
    pub bottom: Color,
    pub left: Color,
    pub right: Color,
    pub front: Color,
    pub back: Color,
}
impl Index<Face> for FaceColors {
    type Output = Color;

    fn index(&self, face: Face) -> &Self::Output {
        match face {
            Face::Top => &self.top,
            Face::Bottom => &self.bottom,
            Face::Left => &self.left,
            Face::Right => &self.right,
            Face::Front => &self.front,
            Face::Back => &self.back,
        }
    }
}
impl IndexMut<Face> for FaceColors {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        match face {
            Face::Top => &mut self.top,
            Face::Bottom => &mut self.bottom,
            Face::Left => &mut self.left,
            Face::Right => &mut self.right,
            Face::Front => &mut self.front,
            Face::Back => &mut self.back,
        }
    }
}
impl FaceColors {
    /// Returns the stickers of a cubie that starts at `position` on a solved
    /// cube. Slots facing the interior are [`Color::Blank`].
    pub fn for_home_position(position: [i8; 3]) -> Self {
        let mut ret = Self::blank();
        for face in Face::iter() {
            if position[face.axis() as usize] == face.sign().int() {
                ret[face] = face.home_color();
            }
        }
        ret
    }
    /// Returns colors with every slot blank.
    pub const fn blank() -> Self {
        Self {
            top: Color::Blank,
            bottom: Color::Blank,
            left: Color::Blank,
            right: Color::Blank,
            front: Color::Blank,
            back: Color::Blank,
        }
    }

    /// Moves colors along a 4-cycle of slots: `cycle[0]` receives the color
    /// from `cycle[1]`, `cycle[1]` from `cycle[2]`, `cycle[2]` from
    /// `cycle[3]`, and `cycle[3]` from `cycle[0]`. Slots outside the cycle
    /// keep their colors.
    #[must_use]
    pub fn cycled(&self, cycle: &[Face; 4]) -> Self {
        let mut ret = *self;
        for i in 0..4 {
            ret[cycle[i]] = self[cycle[(i + 1) % 4]];
        }
        ret
    }

    /// Returns an iterator over every slot and its color.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (Face, Color)> {
        Face::iter().map(|face| (face, self[face]))
    }
    /// Returns the colors sorted, for comparing multisets.
    pub fn sorted(&self) -> [Color; 6] {
        let mut ret = [
            self.top,
            self.bottom,
            self.left,
            self.right,
            self.front,
            self.back,
        ];
        ret.sort();
        ret
    }
}
