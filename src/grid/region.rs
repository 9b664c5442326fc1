use std::collections::BTreeSet;

use super::axial::{AxialCoord, TileKey};
use crate::error::GridError;

/// A set of tiles whose outline is to be traced.
///
/// Iteration is in key order, so anything derived from a region is
/// deterministic regardless of how it was built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    tiles: BTreeSet<TileKey>,
}

impl Region {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tile; returns `false` if it was already a member.
    pub fn insert(&mut self, tile: impl Into<TileKey>) -> bool {
        self.tiles.insert(tile.into())
    }

    /// Removes a tile; returns `false` if it was not a member.
    pub fn remove(&mut self, tile: impl Into<TileKey>) -> bool {
        self.tiles.remove(&tile.into())
    }

    #[must_use]
    pub fn contains(&self, tile: impl Into<TileKey>) -> bool {
        self.tiles.contains(&tile.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TileKey> + '_ {
        self.tiles.iter().copied()
    }

    /// Checks that every member is an addressable tile.
    ///
    /// # Errors
    ///
    /// Returns `GridError::TileOutOfRange` naming the first member, in key
    /// order, that is not.
    pub fn ensure_addressable(&self) -> Result<(), GridError> {
        match self.iter().find(|key| !key.coord().is_addressable()) {
            Some(key) => Err(GridError::TileOutOfRange(key)),
            None => Ok(()),
        }
    }
}

impl FromIterator<TileKey> for Region {
    fn from_iter<I: IntoIterator<Item = TileKey>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<AxialCoord> for Region {
    fn from_iter<I: IntoIterator<Item = AxialCoord>>(iter: I) -> Self {
        iter.into_iter().map(TileKey::from).collect()
    }
}

impl Extend<TileKey> for Region {
    fn extend<I: IntoIterator<Item = TileKey>>(&mut self, iter: I) {
        self.tiles.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership() {
        let mut region = Region::new();
        assert!(region.is_empty());
        assert!(region.insert(AxialCoord::new(1, 2)));
        assert!(!region.insert(AxialCoord::new(1, 2)));
        assert!(region.contains(AxialCoord::new(1, 2)));
        assert!(!region.contains(AxialCoord::new(2, 1)));
        assert_eq!(region.len(), 1);
        assert!(region.remove(AxialCoord::new(1, 2)));
        assert!(!region.remove(AxialCoord::new(1, 2)));
        assert!(region.is_empty());
    }

    #[test]
    fn iteration_order_ignores_insertion_order() {
        let a: Region = [AxialCoord::new(3, 0), AxialCoord::new(-1, 4), AxialCoord::new(0, 0)]
            .into_iter()
            .collect();
        let b: Region = [AxialCoord::new(0, 0), AxialCoord::new(3, 0), AxialCoord::new(-1, 4)]
            .into_iter()
            .collect();
        assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_member_is_named() {
        let mut region: Region = [AxialCoord::new(0, 0)].into_iter().collect();
        assert_eq!(region.ensure_addressable(), Ok(()));
        region.insert(AxialCoord::new(i32::MAX, 0));
        region.insert(AxialCoord::new(5, i32::MIN));
        assert_eq!(
            region.ensure_addressable(),
            Err(GridError::TileOutOfRange(TileKey::from(AxialCoord::new(5, i32::MIN))))
        );
    }
}
