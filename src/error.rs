use thiserror::Error;

use crate::grid::TileKey;
use crate::vertex::VertexKey;

/// Top-level error type for the hexborder geometry core.
#[derive(Debug, Error)]
pub enum HexBorderError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}

/// Errors related to hex addressing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("face index {0} is out of range [0, 6)")]
    InvalidFace(usize),

    #[error("corner index {0} is out of range [0, 6)")]
    InvalidCorner(usize),

    #[error("invalid tile key: {0:?}")]
    InvalidTileKey(String),

    #[error("tile {0} lies outside the addressable grid")]
    TileOutOfRange(TileKey),
}

/// Errors related to layout and rendering parameters.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("hex size must be finite and positive, got {0}")]
    InvalidHexSize(f64),

    #[error("viewport {width}x{height} must have finite positive dimensions")]
    InvalidViewport { width: f64, height: f64 },

    #[error("jitter scale must be finite and non-negative, got {0}")]
    InvalidJitterScale(f64),

    #[error("pixel ({x}, {y}) does not map to an addressable tile")]
    PixelOutOfRange { x: f64, y: f64 },
}

/// Errors raised while stitching boundary edges into polygons.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("malformed boundary: vertex {vertex} has odd degree {degree}")]
    OddDegree { vertex: VertexKey, degree: usize },

    #[error("malformed boundary: loop starting at {start} is stuck at {stuck_at}")]
    UnclosedLoop { start: VertexKey, stuck_at: VertexKey },

    #[error("boundary walk from {start} exceeded {limit} steps")]
    WalkLimitExceeded { start: VertexKey, limit: usize },
}

/// Convenience type alias for results using [`HexBorderError`].
pub type Result<T> = std::result::Result<T, HexBorderError>;
