//! Physical piece shapes and per-swatch availability.

use std::fmt;

/// The physical piece types a catalog color can be bought in.
///
/// The discriminant is the column position of the availability flag in a
/// catalog record and the index used by part counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeCategory {
    /// 1x1 plate
    Plate = 0,
    /// 1x1 flat tile
    Tile = 1,
    /// 1x1 round plate
    RoundSmall = 2,
    /// 2x2 round plate
    RoundLarge = 3,
}

impl ShapeCategory {
    pub const COUNT: usize = 4;

    /// All categories in flag order.
    pub const ALL: [ShapeCategory; Self::COUNT] = [
        ShapeCategory::Plate,
        ShapeCategory::Tile,
        ShapeCategory::RoundSmall,
        ShapeCategory::RoundLarge,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index()`](Self::index).
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
}

impl fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeCategory::Plate => "plate 1x1",
            ShapeCategory::Tile => "tile 1x1",
            ShapeCategory::RoundSmall => "round 1x1",
            ShapeCategory::RoundLarge => "round 2x2",
        };
        f.write_str(name)
    }
}

/// Which shapes a swatch can be built with, one flag per [`ShapeCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Availability([bool; ShapeCategory::COUNT]);

impl Availability {
    /// Available in every shape.
    pub const ALL: Availability = Availability([true; ShapeCategory::COUNT]);

    #[inline]
    pub fn new(flags: [bool; ShapeCategory::COUNT]) -> Self {
        Self(flags)
    }

    /// Available in exactly one shape.
    pub fn only(shape: ShapeCategory) -> Self {
        let mut flags = [false; ShapeCategory::COUNT];
        flags[shape.index()] = true;
        Self(flags)
    }

    /// Parse the catalog flag characters: `+` is available, anything else
    /// is not.
    pub fn from_flags(flags: [char; ShapeCategory::COUNT]) -> Self {
        Self(flags.map(|c| c == '+'))
    }

    #[inline]
    pub fn allows(&self, shape: ShapeCategory) -> bool {
        self.0[shape.index()]
    }

    pub fn flags(&self) -> [bool; ShapeCategory::COUNT] {
        self.0
    }
}
