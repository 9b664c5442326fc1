use crate::error::{LayoutError, Result};
use crate::grid::AxialCoord;

/// Supplies the deterministic per-tile jitter value, expected in `[0, 1)`.
///
/// The value must depend only on the tile so that outlines are stable from
/// one frame to the next.
pub trait JitterSource {
    fn jitter(&self, tile: AxialCoord) -> f64;
}

impl<F> JitterSource for F
where
    F: Fn(AxialCoord) -> f64,
{
    fn jitter(&self, tile: AxialCoord) -> f64 {
        self(tile)
    }
}

/// Amplitude of the jitter applied to resolved vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterParams {
    scale: f64,
}

impl JitterParams {
    /// Creates jitter parameters.
    ///
    /// `scale` is the maximum offset along each axis as a fraction of the
    /// hex size.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidJitterScale` if `scale` is negative or
    /// not finite.
    pub fn new(scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(LayoutError::InvalidJitterScale(scale).into());
        }
        Ok(Self { scale })
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Offset, applied equally on both axes, for a jitter value and hex size.
    ///
    /// Values outside `[0, 1)` are clamped; NaN means no offset. Runs once
    /// per resolved vertex, so clamping is only logged at debug level.
    #[must_use]
    pub fn offset(&self, jitter: f64, size: f64) -> f64 {
        let jitter = if jitter.is_nan() {
            tracing::debug!("NaN jitter value, using no offset");
            0.5
        } else if !(0.0..1.0).contains(&jitter) {
            tracing::debug!(jitter, "jitter value outside [0, 1), clamping");
            jitter.clamp(0.0, 1.0)
        } else {
            jitter
        };
        (jitter * 2.0 - 1.0) * self.scale * size
    }
}

impl Default for JitterParams {
    fn default() -> Self {
        Self { scale: 0.125 }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged_at(level: tracing::Level, f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn new_with_valid_scale() {
        let params = JitterParams::new(0.5).unwrap();
        assert!((params.scale() - 0.5).abs() < f64::EPSILON);
        assert!(JitterParams::new(0.0).is_ok());
    }

    #[test]
    fn new_with_negative_scale_fails() {
        assert!(JitterParams::new(-0.1).is_err());
        assert!(JitterParams::new(f64::NAN).is_err());
    }

    #[test]
    fn offset_spans_symmetric_range() {
        let params = JitterParams::new(0.25).unwrap();
        assert!((params.offset(0.0, 40.0) + 10.0).abs() < 1e-12);
        assert!(params.offset(0.5, 40.0).abs() < 1e-12);
        assert!((params.offset(0.75, 40.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn offset_clamps_out_of_range_values() {
        let params = JitterParams::default();
        assert!((params.offset(3.0, 8.0) - params.offset(1.0, 8.0)).abs() < 1e-12);
        assert!((params.offset(-2.0, 8.0) - params.offset(0.0, 8.0)).abs() < 1e-12);
        assert!(params.offset(f64::NAN, 8.0).abs() < 1e-12);
    }

    #[test]
    fn closures_are_sources() {
        let source = |tile: AxialCoord| if tile.q > 0 { 0.9 } else { 0.1 };
        assert!((source.jitter(AxialCoord::new(1, 0)) - 0.9).abs() < f64::EPSILON);
        assert!((source.jitter(AxialCoord::new(0, 0)) - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn clamping_stays_out_of_warn_logs() {
        let params = JitterParams::default();
        let resolve_frame = || {
            for _ in 0..100 {
                let _ = params.offset(7.5, 40.0);
                let _ = params.offset(f64::NAN, 40.0);
            }
        };
        assert!(logged_at(tracing::Level::WARN, resolve_frame).is_empty());
        assert!(logged_at(tracing::Level::DEBUG, resolve_frame).contains("clamping"));
    }
}
