use super::axial::AxialCoord;
use super::direction::Corner;
use crate::error::{LayoutError, Result};
use crate::math::{Point2, Vector2, SQRT_3};

/// Maps axial hex coordinates to screen pixels and back.
///
/// `origin` is the map position of the top-left screen pixel; `size` is the
/// circumradius of a hexagon (radius of the smallest disk containing it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    origin: Vector2,
    size: f64,
}

impl HexLayout {
    /// Creates a new layout.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidHexSize` if `size` is not finite and positive.
    pub fn new(origin: Vector2, size: f64) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(LayoutError::InvalidHexSize(size).into());
        }
        Ok(Self { origin, size })
    }

    #[must_use]
    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns a copy of this layout scrolled to a new origin.
    #[must_use]
    pub fn with_origin(&self, origin: Vector2) -> Self {
        Self { origin, ..*self }
    }

    /// Distance between the centres of two horizontally adjacent hexes.
    #[must_use]
    pub fn horizontal_spacing(&self) -> f64 {
        self.size * SQRT_3
    }

    /// Distance between two rows of hexes.
    #[must_use]
    pub fn vertical_spacing(&self) -> f64 {
        self.size * 1.5
    }

    /// Screen pixel of a hex centre.
    #[must_use]
    pub fn pixel_from_axial(&self, coord: AxialCoord) -> Point2 {
        let q = f64::from(coord.q);
        let r = f64::from(coord.r);
        Point2::new(
            self.size * SQRT_3 * (q + r / 2.0) - self.origin.x,
            self.size * 1.5 * r - self.origin.y,
        )
    }

    /// The hex whose cell contains the screen pixel `pixel`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::PixelOutOfRange` if the pixel is not finite or
    /// its hex is not addressable.
    pub fn axial_from_pixel(&self, pixel: &Point2) -> Result<AxialCoord> {
        let xm = pixel.x + self.origin.x;
        let ym = pixel.y + self.origin.y;
        cube_round(
            (SQRT_3 * xm - ym) / (3.0 * self.size),
            2.0 * ym / (3.0 * self.size),
        )
        .ok_or_else(|| {
            LayoutError::PixelOutOfRange {
                x: pixel.x,
                y: pixel.y,
            }
            .into()
        })
    }

    /// Exact screen position of one corner of a hex.
    #[must_use]
    pub fn corner(&self, coord: AxialCoord, corner: Corner) -> Point2 {
        let (ux, uy) = corner.unit_offset();
        self.pixel_from_axial(coord) + Vector2::new(ux, uy) * self.size
    }

    /// All six corners of a hex in corner order.
    #[must_use]
    pub fn corners(&self, coord: AxialCoord) -> [Point2; 6] {
        Corner::ALL.map(|corner| self.corner(coord, corner))
    }
}

/// Rounds fractional axial coordinates to the nearest hex.
///
/// All three cube coordinates are rounded; the one with the largest
/// rounding error is then recomputed from the other two so that
/// `q + r + s == 0` holds exactly.
///
/// Returns `None` for non-finite input or when the nearest hex is not
/// addressable.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn cube_round(q: f64, r: f64) -> Option<AxialCoord> {
    let s = -q - r;
    let mut rq = q.round();
    let mut rr = r.round();
    let rs = s.round();

    let q_err = (rq - q).abs();
    let r_err = (rr - r).abs();
    let s_err = (rs - s).abs();

    if q_err > r_err && q_err > s_err {
        rq = -rr - rs;
    } else if r_err > s_err {
        rr = -rq - rs;
    }

    let limit = f64::from(AxialCoord::LIMIT);
    if !(rq.abs() <= limit && rr.abs() <= limit && (rq + rr).abs() <= limit) {
        return None;
    }
    Some(AxialCoord::new(rq as i32, rr as i32))
}
