use std::f64::consts::PI;

use super::Point2;

/// Returns the point halfway between `a` and `b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    Point2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
}

/// Euclidean distance in pixels between two points.
#[must_use]
pub fn pixel_distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Orientation of `to` as seen from `from`, in radians, trigonometric direction.
///
/// Screen y grows downward, so a point straight above `from` is at `π/2`.
/// The result lies in `(-π, π]`.
#[must_use]
pub fn orientation(from: &Point2, to: &Point2) -> f64 {
    let angle = (from.y - to.y).atan2(to.x - from.x);
    if angle <= -PI {
        angle + 2.0 * PI
    } else {
        angle
    }
}
