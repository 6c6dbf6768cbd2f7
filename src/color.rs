use crate::math::{RGB_TO_YIQ, YIQ_TO_RGB};

/// Straight-alpha RGBA color with `f32` channels.
///
/// Channels are conceptually in `[0, 1]`; intermediate results of compositing
/// math may leave that range and are only clamped when converting to bytes.
/// All operations are pure and return a new value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Build a color from raw channel values.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert from 8-bit channels.
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Convert to 8-bit channels, saturating out-of-range values.
    pub fn to_bytes(self) -> [u8; 4] {
        fn to_u8(x: f32) -> u8 {
            (x * 255.0).clamp(0.0, 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// Standard "over" compositing of `top` onto `self`.
    ///
    /// A fully transparent top leaves `self` unchanged; a fully opaque top
    /// replaces it.
    pub fn alpha_blend(self, top: Self) -> Self {
        let ta = top.a;
        let ia = 1.0 - ta;
        Self::rgba(
            top.r * ta + self.r * ia,
            top.g * ta + self.g * ia,
            top.b * ta + self.b * ia,
            ta + self.a * ia,
        )
    }

    /// Scale self's alpha by the mask's alpha; RGB is unaffected.
    ///
    /// Cuts a shape out of a layer without altering its color.
    pub fn alpha_mask(self, mask: Self) -> Self {
        Self::rgba(self.r, self.g, self.b, self.a * mask.a)
    }

    /// Per-channel product (tint).
    pub fn multiply(self, other: Self) -> Self {
        Self::rgba(
            self.r * other.r,
            self.g * other.g,
            self.b * other.b,
            self.a * other.a,
        )
    }

    /// Per-channel sum (additive overlay).
    pub fn add(self, other: Self) -> Self {
        Self::rgba(
            self.r + other.r,
            self.g + other.g,
            self.b + other.b,
            self.a + other.a,
        )
    }

    /// Linear interpolation from `a` to `b` with `t` clamped to `[0, 1]`.
    ///
    /// The clamp guarantees gradients never overshoot past their stop colors.
    pub fn lerp_clamped(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::rgba(
            a.r + (b.r - a.r) * t,
            a.g + (b.g - a.g) * t,
            a.b + (b.b - a.b) * t,
            a.a + (b.a - a.a) * t,
        )
    }

    /// Hue/saturation/brightness transform through the YIQ basis.
    ///
    /// Converts RGB to (luma, chroma-pair), rotates the chroma pair by
    /// `-hue_shift_deg`, scales its magnitude by `saturation`, offsets luma by
    /// `brightness`, and converts back. Exact for arbitrary shift angles,
    /// including negative and wraparound (angle arithmetic is implicitly
    /// modular through `atan2`/`cos`/`sin`). Alpha passes through untouched.
    pub fn apply_hsb(self, hue_shift_deg: f32, saturation: f32, brightness: f32) -> Self {
        let [y, i, q] = RGB_TO_YIQ.apply([self.r, self.g, self.b]);

        let hue = q.atan2(i) - hue_shift_deg.to_radians();
        let chroma = (i * i + q * q).sqrt() * saturation;

        let [r, g, b] = YIQ_TO_RGB.apply([
            y + brightness,
            chroma * hue.cos(),
            chroma * hue.sin(),
        ]);
        Self::rgba(r, g, b, self.a)
    }
}
