use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// In screen coordinates (y down) a loop that runs counter-clockwise on
/// screen has a negative area.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let next = points.iter().cycle().skip(1);
    let twice: f64 = points
        .iter()
        .zip(next)
        .map(|(p, q)| p.x * q.y - q.x * p.y)
        .sum();
    twice * 0.5
}

/// Returns the average of the polygon's vertices.
#[cfg(test)]
#[must_use]
pub(crate) fn centroid(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point2::new(sx / n, sy / n))
}
