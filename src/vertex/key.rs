use std::fmt;

use crate::grid::{AxialCoord, Corner, Face, TileKey};

/// One of the two corners a tile owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexSlot {
    /// The tile's bottom-right corner.
    BottomRight = 0,
    /// The tile's top-right corner.
    TopRight = 1,
}

impl VertexSlot {
    /// Unit offset of this slot from the owning tile's centre, in circumradii.
    #[must_use]
    pub fn unit_offset(self) -> (f64, f64) {
        match self {
            VertexSlot::BottomRight => Corner::BottomRight.unit_offset(),
            VertexSlot::TopRight => Corner::TopRight.unit_offset(),
        }
    }
}

/// Canonical identity of a physical hex corner.
///
/// Each corner is shared by up to three tiles but owned by exactly one of
/// them, so two keys are equal iff they name the same point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey {
    pub tile: TileKey,
    pub slot: VertexSlot,
}

impl VertexKey {
    #[must_use]
    pub fn new(tile: impl Into<TileKey>, slot: VertexSlot) -> Self {
        Self {
            tile: tile.into(),
            slot,
        }
    }

    /// Names corner `corner` of `tile`.
    ///
    /// Corners on the right side are owned by `tile`; the other four belong
    /// to the left-side neighbors.
    #[must_use]
    pub fn from_corner(tile: AxialCoord, corner: Corner) -> Self {
        let (owner, slot) = match corner {
            Corner::Top => (tile.neighbor(Face::TopLeft), VertexSlot::BottomRight),
            Corner::TopLeft => (tile.neighbor(Face::Left), VertexSlot::TopRight),
            Corner::BottomLeft => (tile.neighbor(Face::Left), VertexSlot::BottomRight),
            Corner::Bottom => (tile.neighbor(Face::BottomLeft), VertexSlot::TopRight),
            Corner::BottomRight => (tile, VertexSlot::BottomRight),
            Corner::TopRight => (tile, VertexSlot::TopRight),
        };
        Self::new(owner, slot)
    }

    /// The two corner keys delimiting `face` of `tile`, in counter-clockwise
    /// screen order around `tile`.
    #[must_use]
    pub fn face_ends(tile: AxialCoord, face: Face) -> (Self, Self) {
        let (a, b) = face.corners();
        (Self::from_corner(tile, a), Self::from_corner(tile, b))
    }
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tile, self.slot as u8)
    }
}
