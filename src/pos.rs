use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Neg, Sub},
};

/// A signed grid coordinate
///
/// Board cells live at non-negative coordinates, but neighbour arithmetic
/// is done in `i32` so that stepping off the edge yields an out-of-bounds
/// position instead of wrapping around.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn one() -> Self {
        Self { x: 1, y: 1 }
    }

    /// The eight Moore-neighbourhood positions around `self`, row by row
    pub fn moore(self) -> impl Iterator<Item = Pos2> {
        MOORE_OFFSETS.iter().map(move |&offset| self + offset)
    }
}

/// Offsets of the eight cells surrounding a cell, excluding the cell itself
pub const MOORE_OFFSETS: [Pos2; 8] = [
    Pos2::new(-1, -1),
    Pos2::new(0, -1),
    Pos2::new(1, -1),
    Pos2::new(-1, 0),
    Pos2::new(1, 0),
    Pos2::new(-1, 1),
    Pos2::new(0, 1),
    Pos2::new(1, 1),
];

impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major: y coordinate first, then x coordinate
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl fmt::Display for Pos2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl Neg for Pos2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Pos2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
