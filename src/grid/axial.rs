use std::fmt;
use std::str::FromStr;

use super::direction::Face;
use crate::error::GridError;

/// Integer hex address in axial coordinates.
///
/// The implicit third cube coordinate is `s = -q - r`. Grid arithmetic
/// (`s`, `neighbor`, outline extraction) is defined for addressable tiles,
/// those with `|q|`, `|r|` and `|s|` all at most [`AxialCoord::LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    /// Largest absolute cube coordinate of an addressable tile.
    ///
    /// Leaves headroom so that a neighbor, and the cube coordinate `s` of
    /// that neighbor, still fit in an `i32`.
    pub const LIMIT: i32 = 1 << 30;

    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Whether grid arithmetic on this tile stays within `i32`.
    #[must_use]
    pub fn is_addressable(self) -> bool {
        let limit = i64::from(Self::LIMIT);
        let q = i64::from(self.q);
        let r = i64::from(self.r);
        q.abs() <= limit && r.abs() <= limit && (q + r).abs() <= limit
    }

    /// Implicit third cube coordinate.
    #[must_use]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// The tile across `face`.
    ///
    /// `self` must be addressable; see [`AxialCoord::checked_neighbor`].
    #[must_use]
    pub fn neighbor(self, face: Face) -> Self {
        let (dq, dr) = face.offset();
        Self::new(self.q + dq, self.r + dr)
    }

    /// The tile across `face`, or `None` if it does not fit in an `i32`.
    #[must_use]
    pub fn checked_neighbor(self, face: Face) -> Option<Self> {
        let (dq, dr) = face.offset();
        Some(Self::new(self.q.checked_add(dq)?, self.r.checked_add(dr)?))
    }

    /// All six neighbors, in face order.
    #[must_use]
    pub fn neighbors(self) -> [AxialCoord; 6] {
        Face::ALL.map(|face| self.neighbor(face))
    }

    /// Hex distance (number of steps) between two tiles.
    #[must_use]
    pub fn distance(self, other: Self) -> u64 {
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        (dq.unsigned_abs() + dr.unsigned_abs() + (dq + dr).unsigned_abs()) / 2
    }

    /// Every tile within `radius` steps of `self`, ordered by `q` then `r`.
    ///
    /// Tiles whose coordinates would not fit in an `i32` are left out.
    #[must_use]
    pub fn range(self, radius: u32) -> Vec<AxialCoord> {
        let radius = i64::from(radius);
        let mut result = Vec::new();
        for dq in -radius..=radius {
            let Ok(q) = i32::try_from(i64::from(self.q) + dq) else {
                continue;
            };
            let lo = (-radius).max(-dq - radius);
            let hi = radius.min(-dq + radius);
            for dr in lo..=hi {
                if let Ok(r) = i32::try_from(i64::from(self.r) + dr) {
                    result.push(Self::new(q, r));
                }
            }
        }
        result
    }
}

/// Canonical mapping key for a tile.
///
/// Converts losslessly to and from [`AxialCoord`]; its text form is `"q:r"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey(i32, i32);

impl TileKey {
    #[must_use]
    pub fn coord(self) -> AxialCoord {
        AxialCoord::new(self.0, self.1)
    }
}

impl From<AxialCoord> for TileKey {
    fn from(coord: AxialCoord) -> Self {
        Self(coord.q, coord.r)
    }
}

impl From<TileKey> for AxialCoord {
    fn from(key: TileKey) -> Self {
        key.coord()
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.0, self.1)
    }
}

impl FromStr for TileKey {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidTileKey(s.to_owned());
        let (q, r) = s.split_once(':').ok_or_else(invalid)?;
        let q = q.parse().map_err(|_| invalid())?;
        let r = r.parse().map_err(|_| invalid())?;
        Ok(Self(q, r))
    }
}
