use crate::error::{ScorecardError, ScorecardResult};

pub use kurbo::{Point, Rect, Vec2};

/// Output canvas dimensions in pixels.
///
/// Fixed for the lifetime of one [`crate::CardGenerator`]; a different size
/// requires constructing a new generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> ScorecardResult<Self> {
        if width == 0 || height == 0 {
            return Err(ScorecardError::validation(
                "canvas width and height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Full-canvas rectangle with origin at (0, 0).
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(Canvas::new(0, 630).is_err());
        assert!(Canvas::new(1200, 0).is_err());
        assert!(Canvas::new(1200, 630).is_ok());
    }

    #[test]
    fn rect_spans_full_canvas() {
        let c = Canvas::new(1200, 630).unwrap();
        let r = c.rect();
        assert_eq!(r.width(), 1200.0);
        assert_eq!(r.height(), 630.0);
        assert_eq!(r.origin(), Point::new(0.0, 0.0));
    }
}
