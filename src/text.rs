use image::RgbaImage;

use crate::color::Color;
use crate::core::Rect;
use crate::error::{ScorecardError, ScorecardResult};

/// Vertical-weight correction applied when centering text.
///
/// Font metrics reserve descender space below most glyphs; centering on the
/// full measured height makes text sit visually low. The factor is
/// font-metric dependent and tuned visually per font, not a universal law.
pub const VISUAL_HEIGHT_FACTOR: f64 = 0.8;

const FIT_STEPS: u32 = 40;
const ELLIPSIS: char = '…';

/// Measured extent of a laid-out string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextExtent {
    /// Advance width in pixels.
    pub width: f64,
    /// Line height in pixels.
    pub height: f64,
}

/// A font capable of measuring and rendering UTF-8 text at arbitrary sizes.
///
/// The font itself is an external collaborator; this trait is the seam the
/// generator consumes. Implementations must be pure with respect to
/// measurement: the same (text, px) pair always measures the same.
pub trait FontResource: Send + Sync {
    /// Measure `text` at `px` pixels.
    fn measure(&self, text: &str, px: f32) -> TextExtent;

    /// Draw `text` onto `canvas` with its top-left corner at `origin`.
    fn draw(&self, canvas: &mut RgbaImage, text: &str, px: f32, origin: (f64, f64), color: Color);
}

/// Result of the auto-fit search: possibly truncated text and the chosen size.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedText {
    /// Text to render, truncated with an ellipsis when nothing larger fits.
    pub text: String,
    /// Chosen font size in pixels.
    pub px: f32,
}

/// Find the largest font size that fits `text` inside `rect`, truncating when
/// no size of at least `min_px` fits.
///
/// Step search from the rectangle height down toward zero. On exhaustion,
/// trailing whole words are dropped first (stopping below three words), then
/// characters from the end, each candidate re-measured at `min_px` with an
/// ellipsis appended; a final size search runs on the truncated string. The
/// returned text never measures wider than the rectangle; the worst case
/// degrades to an empty string rather than an error.
pub fn fit_text(font: &dyn FontResource, text: &str, rect: Rect, min_px: f32) -> FittedText {
    let max_width = rect.width();

    if let Some(px) = search_size(font, text, rect, min_px) {
        return FittedText {
            text: text.to_owned(),
            px,
        };
    }

    // Word-level truncation: drop trailing words while at least 3 remain.
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut kept = words.len();
    while kept > 3 {
        kept -= 1;
        let candidate = ellipsize(&words[..kept].join(" "));
        if font.measure(&candidate, min_px).width < max_width {
            return refit_truncated(font, candidate, rect, min_px);
        }
    }

    // Character-level truncation from the end.
    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate = ellipsize(&chars.iter().collect::<String>());
        if font.measure(&candidate, min_px).width < max_width {
            return refit_truncated(font, candidate, rect, min_px);
        }
    }

    FittedText {
        text: String::new(),
        px: min_px,
    }
}

// The truncated string may fit a slightly larger size than the floor.
fn refit_truncated(
    font: &dyn FontResource,
    truncated: String,
    rect: Rect,
    min_px: f32,
) -> FittedText {
    let px = search_size(font, &truncated, rect, min_px).unwrap_or(min_px);
    FittedText {
        text: truncated,
        px,
    }
}

// Descending step search; widths grow monotonically with size, so the first
// size that fits is the largest. Returns None when that size is below the
// floor.
fn search_size(font: &dyn FontResource, text: &str, rect: Rect, min_px: f32) -> Option<f32> {
    let max_px = rect.height() as f32;
    if max_px <= 0.0 || rect.width() <= 0.0 {
        return None;
    }
    for step in 0..FIT_STEPS {
        let px = max_px * ((FIT_STEPS - step) as f32 / FIT_STEPS as f32);
        if font.measure(text, px).width < rect.width() {
            return (px >= min_px).then_some(px);
        }
    }
    None
}

fn ellipsize(s: &str) -> String {
    let mut out = s.trim_end().to_owned();
    out.push(ELLIPSIS);
    out
}

/// Draw auto-fit text centered inside `rect`.
///
/// Horizontal centering uses the measured width; vertical centering uses the
/// measured height scaled by [`VISUAL_HEIGHT_FACTOR`].
pub fn draw_fitted(
    font: &dyn FontResource,
    canvas: &mut RgbaImage,
    fitted: &FittedText,
    rect: Rect,
    color: Color,
) {
    if fitted.text.is_empty() {
        return;
    }
    let extent = font.measure(&fitted.text, fitted.px);
    let cx = (rect.x0 + rect.x1) / 2.0;
    let cy = (rect.y0 + rect.y1) / 2.0;
    let origin = (
        cx - extent.width / 2.0,
        cy - extent.height * VISUAL_HEIGHT_FACTOR / 2.0,
    );
    font.draw(canvas, &fitted.text, fitted.px, origin, color);
}

/// Draw fixed-size text with its horizontal start at `left` and vertically
/// centered on `center_y` using the visual-weight rule.
///
/// Used for the badge label, which has one fixed font size and no auto-fit.
pub fn draw_anchored(
    font: &dyn FontResource,
    canvas: &mut RgbaImage,
    text: &str,
    px: f32,
    left: f64,
    center_y: f64,
    color: Color,
) {
    if text.is_empty() {
        return;
    }
    let extent = font.measure(text, px);
    let origin = (left, center_y - extent.height * VISUAL_HEIGHT_FACTOR / 2.0);
    font.draw(canvas, text, px, origin, color);
}

/// Fontdue-backed font resource.
pub struct TtfFont {
    font: fontdue::Font,
}

impl TtfFont {
    /// Parse a font from raw TTF/OTF bytes.
    pub fn from_bytes(bytes: &[u8]) -> ScorecardResult<Self> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(ScorecardError::font)?;
        Ok(Self { font })
    }
}

impl FontResource for TtfFont {
    fn measure(&self, text: &str, px: f32) -> TextExtent {
        let width: f32 = text
            .chars()
            .map(|ch| self.font.metrics(ch, px).advance_width)
            .sum();
        let height = self
            .font
            .horizontal_line_metrics(px)
            .map(|m| m.ascent - m.descent)
            .unwrap_or(px);
        TextExtent {
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    fn draw(&self, canvas: &mut RgbaImage, text: &str, px: f32, origin: (f64, f64), color: Color) {
        let ascent = self
            .font
            .horizontal_line_metrics(px)
            .map(|m| m.ascent)
            .unwrap_or(px);
        let baseline = origin.1 + f64::from(ascent);
        let mut cursor_x = origin.0;

        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }
            let (metrics, bitmap) = self.font.rasterize(ch, px);
            let glyph_left = cursor_x as i64 + i64::from(metrics.xmin);
            let glyph_top = baseline as i64 - i64::from(metrics.ymin) - metrics.height as i64;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = bitmap[gy * metrics.width + gx];
                    if coverage == 0 {
                        continue;
                    }
                    let x = glyph_left + gx as i64;
                    let y = glyph_top + gy as i64;
                    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height()
                    {
                        continue;
                    }
                    let dst = canvas.get_pixel(x as u32, y as u32).0;
                    let base = Color::from_bytes(dst[0], dst[1], dst[2], dst[3]);
                    let glyph = color.alpha_mask(Color::rgba(
                        0.0,
                        0.0,
                        0.0,
                        f32::from(coverage) / 255.0,
                    ));
                    let out = base.alpha_blend(glyph).to_bytes();
                    canvas.put_pixel(x as u32, y as u32, image::Rgba(out));
                }
            }
            cursor_x += f64::from(metrics.advance_width);
        }
    }
}
