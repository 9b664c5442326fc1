pub mod pixel_2d;
pub mod polygon_2d;

/// Screen-space point, real-valued until a path is quantized for drawing.
pub type Point2 = nalgebra::Point2<f64>;

/// Screen-space offset.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// √3, the ratio between a pointy-top hex's width and its circumradius.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;
