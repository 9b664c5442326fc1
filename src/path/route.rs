use super::DrawablePath;
use crate::grid::{AxialCoord, HexLayout};
use crate::math::pixel_2d::midpoint;
use crate::math::Vector2;

/// Smooth path through the centres of consecutive tiles, ending in an arrowhead.
///
/// Each centre but the last is the control point of a curve ending halfway
/// to the next centre. The arrowhead's size is a tenth of the last hop.
/// Fewer than two tiles yield an empty path.
#[must_use]
pub fn route_path(tiles: &[AxialCoord], layout: &HexLayout) -> DrawablePath {
    let mut path = DrawablePath::new(false);
    if tiles.len() < 2 {
        return path;
    }

    let centres: Vec<_> = tiles.iter().map(|t| layout.pixel_from_axial(*t)).collect();
    path.move_to(centres[0]);
    for pair in centres.windows(2) {
        path.quad_to(pair[0], midpoint(&pair[0], &pair[1]));
    }

    let last = centres[centres.len() - 1];
    let penultimate = centres[centres.len() - 2];
    let back: Vector2 = (penultimate - last) / 10.0;
    let side = Vector2::new(-back.y, back.x) * (2.0 / 3.0);
    let base = last + back;
    path.line_to(base);
    path.line_to(base + side);
    path.line_to(last);
    path.line_to(base - side);
    path.line_to(base);
    path
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::Point2;
    use crate::path::PathSegment;

    #[test]
    fn too_short_routes_are_empty() {
        let l = HexLayout::new(Vector2::zeros(), 10.0).unwrap();
        assert!(route_path(&[], &l).is_empty());
        assert!(route_path(&[AxialCoord::new(0, 0)], &l).is_empty());
    }

    #[test]
    fn route_curves_and_arrow() {
        let l = HexLayout::new(Vector2::zeros(), 10.0).unwrap();
        let tiles = [AxialCoord::new(0, 0), AxialCoord::new(1, 0), AxialCoord::new(2, 0)];
        let path = route_path(&tiles, &l);
        assert_eq!(path.move_count(), 1);
        assert_eq!(path.curve_count(), 2);
        assert_eq!(path.line_count(), 5);

        let last = l.pixel_from_axial(tiles[2]);
        let hop = l.horizontal_spacing();
        let PathSegment::LineTo(base) = path.segments[3] else {
            panic!("expected arrow base, got {:?}", path.segments[3]);
        };
        assert_abs_diff_eq!(base, Point2::new(last.x - hop / 10.0, last.y), epsilon = 1e-9);
        assert_eq!(path.segments[5], PathSegment::LineTo(last));
        assert_eq!(path.segments[7], PathSegment::LineTo(base));
    }
}
