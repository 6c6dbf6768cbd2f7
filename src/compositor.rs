use crate::color::Color;
use crate::texture::{ImageTexture, LinearGradientTexture, RoundedRectTexture, Texture};

/// Per-render pixel shader.
///
/// Built fresh for each render from the layout, the request, and the shared
/// asset masks; never reused across requests. Holds no mutable state, so
/// [`Compositor::get_pixel`] is a pure function of `(x, y)` and the scanline
/// pass can evaluate it from many threads at once. Every blend below is
/// strictly ordered: `alpha_blend`, `alpha_mask`, and `add` do not commute,
/// and reordering changes visible output.
pub struct Compositor {
    /// Background gradient spanning the canvas.
    pub gradient: LinearGradientTexture,
    /// Hard-edged mask cutting the gradient for the border layer.
    pub sharp_mask: ImageTexture,
    /// Soft-edged mask cutting the gradient over the cover layer.
    pub blurred_mask: ImageTexture,
    /// Image border-frame mask.
    pub border_mask: ImageTexture,
    /// Procedural rounded badge mask, unioned with the border mask.
    pub badge_mask: RoundedRectTexture,
    /// Avatar image clipped to its layout rect.
    pub avatar: ImageTexture,
    /// Circular avatar cutout mask.
    pub avatar_mask: ImageTexture,
    /// Avatar drop shadow, used only when no border overlay exists.
    pub avatar_shadow: ImageTexture,
    /// Blurred cover art spanning the canvas.
    pub cover: ImageTexture,
    /// Tint multiplied into the cover layer.
    pub cover_tint: Color,
    /// Optional avatar-border overlay, resolved once at construction.
    pub avatar_border: Option<ImageTexture>,
    /// Hue shift applied to the border overlay, degrees.
    pub hue_shift_deg: f32,
    /// Saturation multiplier applied to the border overlay.
    pub saturation: f32,
    /// Optional star glyph, present only when a star rating is shown.
    pub star: Option<ImageTexture>,
    /// Fill color for the star glyph.
    pub difficulty_color: Color,
    /// Final mask rounding/clipping the whole card.
    pub composite_mask: ImageTexture,
    /// Backdrop behind everything.
    pub background: Color,
}

impl Compositor {
    /// Final color of the pixel at `(x, y)`.
    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        let gradient = self.gradient.sample(x, y);

        // Badge border layer: gradient cut by the sharp mask, then clipped to
        // the union of the border frame and the rounded badge.
        let border_union = self
            .border_mask
            .sample(x, y)
            .alpha_blend(self.badge_mask.sample(x, y));
        let border_layer = self
            .background
            .alpha_blend(gradient.alpha_mask(self.sharp_mask.sample(x, y)))
            .alpha_mask(border_union);

        let avatar = self
            .avatar
            .sample(x, y)
            .alpha_mask(self.avatar_mask.sample(x, y));

        // Cover layer.
        let mut acc = Color::BLACK
            .alpha_blend(self.cover.sample(x, y))
            .multiply(self.cover_tint)
            .alpha_blend(gradient.alpha_mask(self.blurred_mask.sample(x, y)))
            .alpha_blend(border_layer);

        match &self.avatar_border {
            Some(overlay) => {
                acc = acc.alpha_blend(avatar);
                let glow = overlay
                    .sample(x, y)
                    .apply_hsb(self.hue_shift_deg, self.saturation, 0.0);
                // Weight the additive glow by its own alpha so transparent
                // overlay pixels contribute nothing.
                acc = acc.add(Color::rgba(
                    glow.r * glow.a,
                    glow.g * glow.a,
                    glow.b * glow.a,
                    0.0,
                ));
            }
            None => {
                acc = acc
                    .alpha_blend(self.avatar_shadow.sample(x, y))
                    .alpha_blend(avatar);
            }
        }

        if let Some(star) = &self.star {
            acc = acc.alpha_blend(self.difficulty_color.alpha_mask(star.sample(x, y)));
        }

        acc.alpha_mask(self.composite_mask.sample(x, y))
    }
}
