//! Drawable paths handed to a rendering backend.

mod route;
mod smooth;
mod straight;

pub use route::route_path;
pub use smooth::{smooth_outline, smooth_path, smooth_paths};
pub use straight::{hex_outline, region_grid_outline, straight_path, straight_paths};

use crate::math::Point2;

/// One drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Starts a new sub-path without drawing.
    MoveTo(Point2),
    /// Straight line to a point.
    LineTo(Point2),
    /// Quadratic curve bending towards `ctrl` and ending at `to`.
    QuadTo { ctrl: Point2, to: Point2 },
    /// Straight line back to the start of the current sub-path.
    Close,
}

impl PathSegment {
    fn map(self, f: impl Fn(Point2) -> Point2) -> Self {
        match self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(f(p)),
            PathSegment::LineTo(p) => PathSegment::LineTo(f(p)),
            PathSegment::QuadTo { ctrl, to } => PathSegment::QuadTo {
                ctrl: f(ctrl),
                to: f(to),
            },
            PathSegment::Close => PathSegment::Close,
        }
    }
}

/// Ordered drawing commands plus the stroke style they were built for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawablePath {
    pub segments: Vec<PathSegment>,
    pub dashed: bool,
}

impl DrawablePath {
    #[must_use]
    pub fn new(dashed: bool) -> Self {
        Self {
            segments: Vec::new(),
            dashed,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn move_to(&mut self, p: Point2) {
        self.segments.push(PathSegment::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point2) {
        self.segments.push(PathSegment::LineTo(p));
    }

    pub fn quad_to(&mut self, ctrl: Point2, to: Point2) {
        self.segments.push(PathSegment::QuadTo { ctrl, to });
    }

    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    /// Appends all segments of `other`.
    pub fn extend(&mut self, other: DrawablePath) {
        self.segments.extend(other.segments);
    }

    /// Number of quadratic curve segments.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.count(|s| matches!(s, PathSegment::QuadTo { .. }))
    }

    /// Number of move segments.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.count(|s| matches!(s, PathSegment::MoveTo(_)))
    }

    /// Number of straight line segments.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.count(|s| matches!(s, PathSegment::LineTo(_)))
    }

    fn count(&self, pred: impl Fn(&PathSegment) -> bool) -> usize {
        self.segments.iter().filter(|s| pred(s)).count()
    }

    /// Copy of this path with every coordinate rounded to a whole pixel.
    #[must_use]
    pub fn quantized(&self) -> Self {
        Self {
            segments: self
                .segments
                .iter()
                .map(|s| s.map(|p| Point2::new(p.x.round(), p.y.round())))
                .collect(),
            dashed: self.dashed,
        }
    }
}
