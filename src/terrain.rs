//! Interface to the terrain collaborator that owns tile data.

use crate::grid::AxialCoord;
use crate::vertex::JitterSource;

/// Identifier of a camp (a faction controlling tiles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CampId(pub u32);

/// Terrain type of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Earth,
    Fire,
    Air,
    Water,
}

/// What the terrain knows about one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRecord {
    pub camp: Option<CampId>,
    pub element: Element,
    pub population: u32,
    pub resource: bool,
    /// Deterministic per-tile value in `[0, 1)`.
    pub jitter: f64,
}

/// Tile lookup provided by the terrain.
pub trait Terrain {
    fn tile(&self, coord: AxialCoord) -> TileRecord;
}

/// Feeds a terrain's per-tile jitter into vertex resolution.
#[derive(Debug)]
pub struct TerrainJitter<'a, T: ?Sized>(pub &'a T);

impl<T: Terrain + ?Sized> JitterSource for TerrainJitter<'_, T> {
    fn jitter(&self, tile: AxialCoord) -> f64 {
        self.0.tile(tile).jitter
    }
}
