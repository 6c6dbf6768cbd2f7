use std::sync::Arc;

use image::RgbaImage;
use rayon::prelude::*;

use crate::assets::CardAssets;
use crate::blur::blur_rgba;
use crate::color::Color;
use crate::compositor::Compositor;
use crate::core::{Canvas, Point};
use crate::error::ScorecardResult;
use crate::layout::Layout;
use crate::model::RenderRequest;
use crate::text::{self, FontResource};
use crate::texture::{ImageTexture, LinearGradientTexture, RoundedRectTexture};

// Tint multiplied into the blurred cover so overlaid text stays readable.
const COVER_TINT: Color = Color::rgba(0.6, 0.6, 0.6, 1.0);
const TEXT_COLOR: Color = Color::WHITE;

/// Score-card generator.
///
/// Owns the long-lived tier: the canvas size, the layout derived from it,
/// the shared mask/icon assets, and the font. All of that is immutable after
/// construction and safe to share across simultaneous renders; everything
/// built inside [`CardGenerator::render`] is exclusively owned by that one
/// call. A different canvas size requires a new generator.
pub struct CardGenerator {
    canvas: Canvas,
    layout: Layout,
    assets: Arc<CardAssets>,
    font: Box<dyn FontResource>,
}

impl CardGenerator {
    /// Build a generator for a fixed canvas size.
    pub fn new(
        canvas: Canvas,
        assets: CardAssets,
        font: Box<dyn FontResource>,
    ) -> ScorecardResult<Self> {
        Ok(Self {
            layout: Layout::new(canvas),
            canvas,
            assets: Arc::new(assets),
            font,
        })
    }

    /// Layout derived from the generator's canvas.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Render one card.
    ///
    /// `cover`, `avatar`, and the optional `avatar_border` are decoded
    /// rasters supplied by the caller. The returned image has the canvas's
    /// exact pixel dimensions; encoding is the caller's concern.
    #[tracing::instrument(skip_all, fields(w = self.canvas.width, h = self.canvas.height))]
    pub fn render(
        &self,
        req: &RenderRequest,
        cover: &RgbaImage,
        avatar: &RgbaImage,
        avatar_border: Option<&RgbaImage>,
    ) -> ScorecardResult<RgbaImage> {
        let compositor = self.build_compositor(req, cover, avatar, avatar_border)?;

        let mut out = RgbaImage::new(self.canvas.width, self.canvas.height);
        self.run_pixel_pass(&compositor, &mut out);
        self.draw_text_overlays(req, &mut out);
        tracing::debug!("card render complete");
        Ok(out)
    }

    fn build_compositor(
        &self,
        req: &RenderRequest,
        cover: &RgbaImage,
        avatar: &RgbaImage,
        avatar_border: Option<&RgbaImage>,
    ) -> ScorecardResult<Compositor> {
        let full = self.canvas.rect();
        let h = f64::from(self.canvas.height);

        // Synchronous pre-pass: the blur and all resampling happen here, not
        // inside the parallel pixel loop.
        let blur_radius = (h / 64.0).round().max(1.0) as u32;
        let blurred_cover = blur_rgba(cover, blur_radius, blur_radius as f32 / 2.0)?;
        tracing::debug!(blur_radius, "cover blurred");

        let badge_extent = self
            .font
            .measure(&req.badge_text(), self.layout.badge_font_px);
        let badge = self
            .layout
            .badge(badge_extent.width, badge_extent.height, req.has_stars());

        let shadow_rect = self.layout.avatar.inflate(
            self.layout.avatar.width() * 0.04,
            self.layout.avatar.height() * 0.04,
        );

        Ok(Compositor {
            gradient: LinearGradientTexture::new(
                Point::new(0.0, h / 2.0),
                Point::new(full.x1, h / 2.0),
                req.gradient_left,
                req.gradient_right,
            ),
            sharp_mask: ImageTexture::new(&self.assets.gradient_mask_sharp, full),
            blurred_mask: ImageTexture::new(&self.assets.gradient_mask_blurred, full),
            border_mask: ImageTexture::new(&self.assets.border_mask, full),
            badge_mask: RoundedRectTexture::new(Color::WHITE, badge.rect, badge.corner_radius),
            avatar: ImageTexture::new(avatar, self.layout.avatar),
            avatar_mask: ImageTexture::new(&self.assets.avatar_mask, self.layout.avatar),
            avatar_shadow: ImageTexture::new(&self.assets.avatar_shadow, shadow_rect),
            cover: ImageTexture::new(&blurred_cover, full),
            cover_tint: COVER_TINT,
            avatar_border: avatar_border.map(|img| ImageTexture::new(img, shadow_rect)),
            hue_shift_deg: req.hue_shift_deg,
            saturation: req.saturation,
            star: badge
                .star
                .map(|rect| ImageTexture::new(&self.assets.star_icon, rect)),
            difficulty_color: req.difficulty_color,
            composite_mask: ImageTexture::new(&self.assets.composite_mask, full),
            background: Color::TRANSPARENT,
        })
    }

    // Scanline-parallel pass. Rows are disjoint chunks of the destination
    // buffer, so workers never write the same bytes and the result is
    // byte-identical to a sequential pass.
    fn run_pixel_pass(&self, compositor: &Compositor, out: &mut RgbaImage) {
        let width = self.canvas.width as usize;
        let row_len = width * 4;
        (**out)
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| {
                for x in 0..width {
                    let color = compositor.get_pixel(x as i32, y as i32);
                    row[x * 4..x * 4 + 4].copy_from_slice(&color.to_bytes());
                }
            });
    }

    fn draw_text_overlays(&self, req: &RenderRequest, out: &mut RgbaImage) {
        let font = self.font.as_ref();
        let l = &self.layout;

        let name = text::fit_text(font, &req.player_name, l.player_name, l.player_name_min_px);
        text::draw_fitted(font, out, &name, l.player_name, TEXT_COLOR);

        let song_line = if req.modifiers.is_empty() {
            req.song_name.clone()
        } else {
            format!("{} [{}]", req.song_name, req.modifiers)
        };
        let song = text::fit_text(font, &song_line, l.song_name, l.song_name_min_px);
        text::draw_fitted(font, out, &song, l.song_name, TEXT_COLOR);

        let accuracy = text::fit_text(font, &req.accuracy_text(), l.accuracy, l.stats_min_px);
        text::draw_fitted(font, out, &accuracy, l.accuracy, TEXT_COLOR);

        let rank = text::fit_text(font, &req.rank_text(), l.rank, l.stats_min_px);
        text::draw_fitted(font, out, &rank, l.rank, TEXT_COLOR);

        // Badge text is fixed-size; its placement came from the badge layout.
        let badge_text = req.badge_text();
        let extent = font.measure(&badge_text, l.badge_font_px);
        let badge = l.badge(extent.width, extent.height, req.has_stars());
        let center_y = (badge.rect.y0 + badge.rect.y1) / 2.0;
        text::draw_anchored(
            font,
            out,
            &badge_text,
            l.badge_font_px,
            badge.text_origin.0,
            center_y,
            TEXT_COLOR,
        );
    }
}
