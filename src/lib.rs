//! Score-card raster generator.
//!
//! Composites a fixed-layout card (avatar, cover art, gradient background,
//! difficulty badge, auto-fit text) into a single RGBA raster. The pipeline
//! is a per-pixel compositor evaluated in parallel over scanlines, followed
//! by a sequential text overlay pass:
//!
//! - Build a [`CardGenerator`] once per canvas size with the long-lived
//!   mask/icon assets and a font
//! - Call [`CardGenerator::render`] with a [`RenderRequest`] and the decoded
//!   cover/avatar rasters
//! - Encode the returned image however the surrounding service needs
//!
//! Decoding inputs, fetching assets, and serving the result are caller
//! concerns; nothing in this crate touches the network or the filesystem.
#![forbid(unsafe_code)]

mod assets;
mod blur;
mod color;
mod compositor;
mod core;
mod error;
mod generator;
mod layout;
mod math;
mod model;
mod text;
mod texture;

pub use crate::assets::CardAssets;
pub use crate::blur::blur_rgba;
pub use crate::color::Color;
pub use crate::compositor::Compositor;
pub use crate::core::{Canvas, Point, Rect, Vec2};
pub use crate::error::{ScorecardError, ScorecardResult};
pub use crate::generator::CardGenerator;
pub use crate::layout::{BadgeLayout, Layout};
pub use crate::model::RenderRequest;
pub use crate::text::{
    FittedText, FontResource, TextExtent, TtfFont, VISUAL_HEIGHT_FACTOR, draw_anchored,
    draw_fitted, fit_text,
};
pub use crate::texture::{ImageTexture, LinearGradientTexture, RoundedRectTexture, Texture};
