use crate::error::GridError;
use crate::grid::{Face, Region};
use crate::vertex::VertexKey;

/// One hex face separating a region member from a non-member.
///
/// Matching treats the edge as unordered; `a -> b` records the
/// counter-clockwise screen orientation around the member tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryEdge {
    pub a: VertexKey,
    pub b: VertexKey,
}

impl BoundaryEdge {
    #[must_use]
    pub fn new(a: VertexKey, b: VertexKey) -> Self {
        Self { a, b }
    }

    /// The endpoint opposite `v`, or `None` if `v` is not an endpoint.
    #[must_use]
    pub fn other(&self, v: VertexKey) -> Option<VertexKey> {
        if self.a == v {
            Some(self.b)
        } else if self.b == v {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Collects every boundary edge of `region`.
///
/// Edges are emitted in region order, then face order, which fixes the
/// stitching order downstream.
///
/// # Errors
///
/// Returns `GridError::TileOutOfRange` if a member is not addressable.
pub fn collect_boundary_edges(region: &Region) -> Result<Vec<BoundaryEdge>, GridError> {
    region.ensure_addressable()?;
    let mut edges = Vec::new();
    for key in region.iter() {
        let tile = key.coord();
        for face in Face::ALL {
            if !region.contains(tile.neighbor(face)) {
                let (a, b) = VertexKey::face_ends(tile, face);
                edges.push(BoundaryEdge::new(a, b));
            }
        }
    }
    Ok(edges)
}
