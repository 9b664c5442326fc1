//! Hex-grid geometry and territory outline extraction.
//!
//! Converts between axial hex coordinates and screen pixels, names hex
//! corners canonically, traces the boundary of a tile region as closed
//! polygons and turns polygons into drawable paths. Drawing itself is left
//! to the caller's rendering backend.

pub mod boundary;
pub mod error;
pub mod grid;
pub mod math;
pub mod path;
pub mod terrain;
pub mod vertex;

pub use error::{HexBorderError, Result};
