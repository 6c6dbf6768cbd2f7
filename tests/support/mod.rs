//! Shared fixtures for the integration tests.

// Not every test target uses every fixture.
#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use scorecard::{Color, FontResource, TextExtent};

/// Deterministic fake font: every glyph advances 0.6 * px and draws a solid
/// block, so measurement is exact and overlay output is reproducible.
pub struct MonoFont;

impl FontResource for MonoFont {
    fn measure(&self, text: &str, px: f32) -> TextExtent {
        TextExtent {
            width: f64::from(px) * 0.6 * text.chars().count() as f64,
            height: f64::from(px),
        }
    }

    fn draw(&self, canvas: &mut RgbaImage, text: &str, px: f32, origin: (f64, f64), color: Color) {
        let extent = self.measure(text, px);
        let bytes = color.to_bytes();
        for y in origin.1 as i64..(origin.1 + extent.height) as i64 {
            for x in origin.0 as i64..(origin.0 + extent.width) as i64 {
                if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
                    canvas.put_pixel(x as u32, y as u32, Rgba(bytes));
                }
            }
        }
    }
}

/// Install the fmt subscriber once so traced test runs emit spans/events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn solid(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(px))
}
