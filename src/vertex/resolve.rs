use super::jitter::{JitterParams, JitterSource};
use super::key::VertexKey;
use crate::grid::HexLayout;
use crate::math::{Point2, Vector2};

/// Resolves vertex keys to screen pixels for one layout.
///
/// Without jitter, a key resolves to the exact corner position. With
/// jitter, the corner is nudged by an offset derived from the owning tile's
/// jitter value, so repeated resolutions are pixel-identical.
#[derive(Clone, Copy)]
pub struct VertexResolver<'a> {
    layout: HexLayout,
    jitter: Option<(&'a dyn JitterSource, JitterParams)>,
}

impl<'a> VertexResolver<'a> {
    /// Creates a jitter-free resolver.
    #[must_use]
    pub fn new(layout: HexLayout) -> Self {
        Self {
            layout,
            jitter: None,
        }
    }

    /// Enables jitter from `source`.
    #[must_use]
    pub fn with_jitter(self, source: &'a dyn JitterSource, params: JitterParams) -> Self {
        Self {
            jitter: Some((source, params)),
            ..self
        }
    }

    /// Screen position of a vertex.
    #[must_use]
    pub fn point(&self, key: &VertexKey) -> Point2 {
        let tile = key.tile.coord();
        let size = self.layout.size();
        let (ux, uy) = key.slot.unit_offset();
        let mut p = self.layout.pixel_from_axial(tile) + Vector2::new(ux, uy) * size;
        if let Some((source, params)) = self.jitter {
            let d = params.offset(source.jitter(tile), size);
            p += Vector2::new(d, d);
        }
        p
    }

    /// Screen positions of a sequence of vertices.
    #[must_use]
    pub fn polygon(&self, keys: &[VertexKey]) -> Vec<Point2> {
        keys.iter().map(|key| self.point(key)).collect()
    }
}

impl std::fmt::Debug for VertexResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexResolver")
            .field("layout", &self.layout)
            .field("jitter", &self.jitter.map(|(_, params)| params))
            .finish()
    }
}

/// Screen position of a vertex, optionally jittered with default parameters.
#[must_use]
pub fn point_from_vertex_key(
    key: &VertexKey,
    layout: &HexLayout,
    jitter: Option<&dyn JitterSource>,
) -> Point2 {
    let resolver = VertexResolver::new(*layout);
    match jitter {
        Some(source) => resolver
            .with_jitter(source, JitterParams::default())
            .point(key),
        None => resolver.point(key),
    }
}
