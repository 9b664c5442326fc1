//! Canonical identity of hex corners and their resolution to pixels.

mod jitter;
mod key;
mod resolve;

pub use jitter::{JitterParams, JitterSource};
pub use key::{VertexKey, VertexSlot};
pub use resolve::{point_from_vertex_key, VertexResolver};
