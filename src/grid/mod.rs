//! Hex addressing and the axial ⇄ pixel coordinate system.
//!
//! Hexes are pointy-top. Faces are numbered counter-clockwise on screen
//! from the right face; corners counter-clockwise from the top corner.

mod axial;
mod direction;
mod layout;
mod region;
mod viewport;

pub use axial::{AxialCoord, TileKey};
pub use direction::{Corner, Face, FaceMask};
pub use layout::{cube_round, HexLayout};
pub use region::Region;
pub use viewport::{visible_tiles, Viewport, VisibleTiles};
