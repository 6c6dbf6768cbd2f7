use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::color::Color;
use crate::core::{Point, Rect, Vec2};

/// A source of per-pixel color, procedural or image-backed.
///
/// `sample` is a total function: every integer coordinate yields a color, and
/// coordinates outside a texture's region yield transparent rather than an
/// error. Implementations are pure for fixed construction parameters, which
/// is what makes the per-pixel compositor safe to evaluate in parallel.
pub trait Texture {
    /// Color of the texture at pixel coordinates `(x, y)`.
    fn sample(&self, x: i32, y: i32) -> Color;
}

/// Image-backed texture clipped to a target rectangle.
///
/// The source raster is resampled to the rectangle's pixel size once at
/// construction, not per sample.
pub struct ImageTexture {
    resampled: RgbaImage,
    left: i32,
    top: i32,
}

impl ImageTexture {
    /// Resample `source` into `rect` (rounded to whole pixels).
    ///
    /// A zero-area rectangle produces a texture that samples fully
    /// transparent everywhere.
    pub fn new(source: &RgbaImage, rect: Rect) -> Self {
        let w = rect.width().max(0.0).round() as u32;
        let h = rect.height().max(0.0).round() as u32;
        let resampled = if w == 0 || h == 0 || source.width() == 0 || source.height() == 0 {
            RgbaImage::new(0, 0)
        } else if source.width() == w && source.height() == h {
            source.clone()
        } else {
            imageops::resize(source, w, h, FilterType::Triangle)
        };
        Self {
            resampled,
            left: rect.x0.round() as i32,
            top: rect.y0.round() as i32,
        }
    }
}

impl Texture for ImageTexture {
    fn sample(&self, x: i32, y: i32) -> Color {
        let lx = x - self.left;
        let ly = y - self.top;
        if lx < 0
            || ly < 0
            || lx as u32 >= self.resampled.width()
            || ly as u32 >= self.resampled.height()
        {
            return Color::TRANSPARENT;
        }
        let p = self.resampled.get_pixel(lx as u32, ly as u32).0;
        Color::from_bytes(p[0], p[1], p[2], p[3])
    }
}

/// Procedural linear gradient between two points.
///
/// Conceptually infinite: the query point is projected onto the from->to axis
/// and the interpolation parameter is clamped, so samples beyond either stop
/// return that stop's color. Callers mask it to a finite region.
pub struct LinearGradientTexture {
    from: Point,
    axis: Vec2,
    axis_len_sq: f64,
    from_color: Color,
    to_color: Color,
}

impl LinearGradientTexture {
    /// Gradient running from `from` (at `from_color`) to `to` (at `to_color`).
    pub fn new(from: Point, to: Point, from_color: Color, to_color: Color) -> Self {
        let axis = to - from;
        Self {
            from,
            axis,
            axis_len_sq: axis.hypot2(),
            from_color,
            to_color,
        }
    }
}

impl Texture for LinearGradientTexture {
    fn sample(&self, x: i32, y: i32) -> Color {
        // Degenerate axis: constant color, no division by zero.
        if self.axis_len_sq == 0.0 {
            return self.from_color;
        }
        let offset = Point::new(f64::from(x), f64::from(y)) - self.from;
        let t = offset.dot(self.axis) / self.axis_len_sq;
        Color::lerp_clamped(self.from_color, self.to_color, t as f32)
    }
}

/// Procedural rounded-rectangle mask with one pixel of edge falloff.
pub struct RoundedRectTexture {
    fill: Color,
    center_x: f64,
    center_y: f64,
    half_w: f64,
    half_h: f64,
    radius: f64,
}

impl RoundedRectTexture {
    /// Rounded rectangle filling `rect` with corner radius `radius`.
    pub fn new(fill: Color, rect: Rect, radius: f64) -> Self {
        Self {
            fill,
            center_x: (rect.x0 + rect.x1) / 2.0,
            center_y: (rect.y0 + rect.y1) / 2.0,
            half_w: rect.width().max(0.0) / 2.0,
            half_h: rect.height().max(0.0) / 2.0,
            radius: radius.max(0.0),
        }
    }
}

impl Texture for RoundedRectTexture {
    fn sample(&self, x: i32, y: i32) -> Color {
        // Reflect into the positive quadrant, then measure against the
        // straight-edge half-extents (the rectangle shrunk by the radius).
        let dx = (f64::from(x) - self.center_x).abs();
        let dy = (f64::from(y) - self.center_y).abs();
        if dx > self.half_w || dy > self.half_h {
            return Color::TRANSPARENT;
        }

        let cx = dx - (self.half_w - self.radius);
        let cy = dy - (self.half_h - self.radius);
        if cx <= 0.0 || cy <= 0.0 {
            return self.fill;
        }

        // Corner zone: one pixel of anti-aliased falloff around the arc.
        let dist = (cx * cx + cy * cy).sqrt();
        let coverage = (self.radius + 1.0 - dist).clamp(0.0, 1.0);
        self.fill.alpha_mask(Color::rgba(0.0, 0.0, 0.0, coverage as f32))
    }
}
