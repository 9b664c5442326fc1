use super::axial::TileKey;
use super::direction::Face;
use super::layout::HexLayout;
use super::region::Region;
use crate::error::{LayoutError, Result};
use crate::math::Point2;

/// Screen dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a new viewport.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidViewport` unless both dimensions are
    /// finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(LayoutError::InvalidViewport { width, height }.into());
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Tiles covering a viewport.
#[derive(Debug, Clone, Default)]
pub struct VisibleTiles {
    /// Every tile touching the screen, plus a one-tile margin.
    pub all: Region,
    /// Tiles whose bounding box lies strictly inside the screen.
    pub fully_visible: Region,
}

/// Computes the tiles covering `viewport` for the given layout.
///
/// Rows of tile centres are walked starting one row above the tile under
/// the top-left screen pixel, shifting every other row by half a tile.
///
/// # Errors
///
/// Returns `LayoutError::PixelOutOfRange` if part of the screen lies
/// beyond the addressable grid.
pub fn visible_tiles(viewport: &Viewport, layout: &HexLayout) -> Result<VisibleTiles> {
    let horiz = layout.horizontal_spacing();
    let vert = layout.vertical_spacing();

    let top_left = layout.axial_from_pixel(&Point2::origin())?;
    let start = layout.pixel_from_axial(top_left.neighbor(Face::TopLeft));

    let mut tiles = VisibleTiles::default();
    let mut shifted = false;
    let mut cy = start.y;
    while cy - vert < viewport.height {
        let mut cx = if shifted { start.x - horiz / 2.0 } else { start.x };
        while cx - horiz < viewport.width {
            let centre = Point2::new(cx, cy);
            let key = TileKey::from(layout.axial_from_pixel(&centre)?);
            tiles.all.insert(key);
            if cx - horiz / 2.0 > 0.0
                && cx + horiz / 2.0 < viewport.width
                && cy - vert / 2.0 > 0.0
                && cy + vert / 2.0 < viewport.height
            {
                tiles.fully_visible.insert(key);
            }
            cx += horiz;
        }
        cy += vert;
        shifted = !shifted;
    }
    Ok(tiles)
}
