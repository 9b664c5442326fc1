//! Boundary extraction: from a tile region to closed outline polygons.

mod edges;
mod stitch;

pub use edges::{collect_boundary_edges, BoundaryEdge};

use crate::error::Result;
use crate::grid::Region;
use crate::math::Point2;
use crate::vertex::{VertexKey, VertexResolver};

/// Parameters controlling boundary stitching.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryParams {
    /// Maximum number of steps a single loop walk may take.
    pub max_walk_steps: usize,
}

impl Default for BoundaryParams {
    fn default() -> Self {
        Self {
            max_walk_steps: 65_536,
        }
    }
}

/// Traces the outline of a tile region.
///
/// Every face separating a member from a non-member becomes a boundary
/// edge; the edges are stitched into closed, simple loops of vertex keys.
/// Outer boundaries run counter-clockwise on screen and holes clockwise;
/// telling them apart is left to the caller.
#[derive(Debug)]
pub struct BoundaryExtractor<'r> {
    region: &'r Region,
    params: BoundaryParams,
}

impl<'r> BoundaryExtractor<'r> {
    /// Creates a new extraction over `region` with default parameters.
    #[must_use]
    pub fn new(region: &'r Region) -> Self {
        Self {
            region,
            params: BoundaryParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(self, params: BoundaryParams) -> Self {
        Self { params, ..self }
    }

    /// Executes the extraction, returning one vertex-key loop per boundary.
    ///
    /// An empty region yields no loops.
    ///
    /// # Errors
    ///
    /// Returns `GridError::TileOutOfRange` if the region holds a tile that is
    /// not addressable, or `BoundaryError` if the edges cannot be closed into
    /// loops.
    pub fn execute(&self) -> Result<Vec<Vec<VertexKey>>> {
        let edges = collect_boundary_edges(self.region)?;
        let loops = stitch::stitch(&edges, self.params.max_walk_steps)?;
        tracing::debug!(
            tiles = self.region.len(),
            edges = edges.len(),
            polygons = loops.len(),
            "extracted region boundary"
        );
        Ok(loops)
    }

    /// Executes the extraction and resolves every loop to screen pixels.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError` if the edges cannot be closed into loops.
    pub fn execute_resolved(&self, resolver: &VertexResolver<'_>) -> Result<Vec<Vec<Point2>>> {
        Ok(self
            .execute()?
            .iter()
            .map(|keys| resolver.polygon(keys))
            .collect())
    }
}

/// Outline polygons of `region` in screen pixels, with default parameters.
///
/// # Errors
///
/// Returns `BoundaryError` if the edges cannot be closed into loops.
pub fn boundary_polygons(region: &Region, resolver: &VertexResolver<'_>) -> Result<Vec<Vec<Point2>>> {
    BoundaryExtractor::new(region).execute_resolved(resolver)
}
