use super::straight::straight_path;
use super::DrawablePath;
use crate::boundary::boundary_polygons;
use crate::error::Result;
use crate::grid::Region;
use crate::math::pixel_2d::midpoint;
use crate::math::Point2;
use crate::vertex::VertexResolver;

/// Rounds the corners of a closed polygon.
///
/// The path runs through the midpoint of every edge; each original vertex
/// becomes the control point of the quadratic curve joining the midpoints
/// on either side of it, so the curve stays inside the polygon.
///
/// In dashed mode every other curve is replaced by a move, leaving the
/// anchors exactly where the solid version has them. Polygons with fewer
/// than three points are drawn as a plain polyline.
#[must_use]
pub fn smooth_path(polygon: &[Point2], dashed: bool) -> DrawablePath {
    let n = polygon.len();
    if n < 3 {
        let mut path = straight_path(polygon);
        path.dashed = dashed;
        return path;
    }

    let anchors: Vec<Point2> = (0..n)
        .map(|i| midpoint(&polygon[i], &polygon[(i + 1) % n]))
        .collect();

    let mut path = DrawablePath::new(dashed);
    path.move_to(anchors[0]);
    for i in 1..n {
        if dashed && i % 2 == 0 {
            path.move_to(anchors[i]);
        } else {
            path.quad_to(polygon[i], anchors[i]);
        }
    }
    if !dashed {
        path.quad_to(polygon[0], anchors[0]);
    }
    path
}

/// Smooth paths of several polygons, concatenated into one path.
#[must_use]
pub fn smooth_paths(polygons: &[Vec<Point2>], dashed: bool) -> DrawablePath {
    let mut path = DrawablePath::new(dashed);
    for polygon in polygons {
        path.extend(smooth_path(polygon, dashed));
    }
    path
}

/// Smooth outline of a whole region: its boundary polygons, resolved and
/// rounded.
///
/// # Errors
///
/// Returns `BoundaryError` if the region's edges cannot be closed into loops.
pub fn smooth_outline(
    region: &Region,
    resolver: &VertexResolver<'_>,
    dashed: bool,
) -> Result<DrawablePath> {
    let polygons = boundary_polygons(region, resolver)?;
    Ok(smooth_paths(&polygons, dashed))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::path::PathSegment;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn solid_square_has_four_curves() {
        let path = smooth_path(&square(), false);
        assert!(!path.dashed);
        assert_eq!(path.curve_count(), 4);
        assert_eq!(path.move_count(), 1);
        assert_eq!(
            path.segments,
            vec![
                PathSegment::MoveTo(Point2::new(5.0, 0.0)),
                PathSegment::QuadTo {
                    ctrl: Point2::new(10.0, 0.0),
                    to: Point2::new(10.0, 5.0),
                },
                PathSegment::QuadTo {
                    ctrl: Point2::new(10.0, 10.0),
                    to: Point2::new(5.0, 10.0),
                },
                PathSegment::QuadTo {
                    ctrl: Point2::new(0.0, 10.0),
                    to: Point2::new(0.0, 5.0),
                },
                PathSegment::QuadTo {
                    ctrl: Point2::new(0.0, 0.0),
                    to: Point2::new(5.0, 0.0),
                },
            ]
        );
    }

    #[test]
    fn dashed_square_has_two_curves_and_two_moves() {
        let path = smooth_path(&square(), true);
        assert!(path.dashed);
        assert_eq!(path.curve_count(), 2);
        assert_eq!(path.move_count(), 2);
    }

    #[test]
    fn dashed_anchors_match_solid_anchors() {
        let polygon = vec![
            Point2::new(0.0, 0.0),
            Point2::new(8.0, -2.0),
            Point2::new(12.0, 5.0),
            Point2::new(6.0, 11.0),
            Point2::new(-1.0, 7.0),
        ];
        let endpoints = |path: &DrawablePath| -> Vec<Point2> {
            path.segments
                .iter()
                .filter_map(|s| match s {
                    PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(*p),
                    PathSegment::QuadTo { to, .. } => Some(*to),
                    PathSegment::Close => None,
                })
                .collect()
        };
        let solid = endpoints(&smooth_path(&polygon, false));
        let dashed = endpoints(&smooth_path(&polygon, true));
        assert_eq!(&solid[..dashed.len()], &dashed[..]);
    }

    #[test]
    fn curves_stay_inside_the_polygon_hull() {
        let path = smooth_path(&square(), false);
        for s in &path.segments {
            if let PathSegment::QuadTo { ctrl, to } = s {
                for p in [ctrl, to] {
                    assert!((0.0..=10.0).contains(&p.x) && (0.0..=10.0).contains(&p.y));
                }
            }
        }
    }

    #[test]
    fn short_polygons_are_polylines() {
        let two = vec![Point2::new(1.0, 1.0), Point2::new(4.0, 5.0)];
        let path = smooth_path(&two, false);
        assert_eq!(path.curve_count(), 0);
        assert_eq!(
            path.segments,
            vec![
                PathSegment::MoveTo(Point2::new(1.0, 1.0)),
                PathSegment::LineTo(Point2::new(4.0, 5.0)),
                PathSegment::Close,
            ]
        );
        assert!(smooth_path(&[], true).is_empty());
    }

    #[test]
    fn region_outline_with_hole_has_two_sub_paths() {
        use crate::grid::{AxialCoord, HexLayout};
        use crate::math::Vector2;

        let layout = HexLayout::new(Vector2::zeros(), 40.0).unwrap();
        let resolver = VertexResolver::new(layout);
        let centre = AxialCoord::new(0, 0);
        let ring: Region = centre.neighbors().into_iter().collect();
        let path = smooth_outline(&ring, &resolver, false).unwrap();
        assert_eq!(path.move_count(), 2);
        assert_eq!(path.curve_count(), 18 + 6);
        assert!(smooth_outline(&Region::new(), &resolver, true).unwrap().is_empty());
    }

    #[test]
    fn multiple_polygons_concatenate() {
        let path = smooth_paths(&[square(), square()], false);
        assert_eq!(path.curve_count(), 8);
        assert_eq!(path.move_count(), 2);
    }
}
