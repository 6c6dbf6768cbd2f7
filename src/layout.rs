use crate::core::{Canvas, Rect};

/// All element rectangles for one canvas size.
///
/// Every rectangle is a fixed proportion of the canvas width/height, so the
/// composition scales losslessly to any output resolution. Computed once per
/// canvas and immutable for the lifetime of one render; a different size
/// means constructing a new `Layout`.
#[derive(Clone, Debug)]
pub struct Layout {
    /// Canvas the layout was derived from.
    pub canvas: Canvas,
    /// Square region holding the circular avatar.
    pub avatar: Rect,
    /// Player-name band, right of the avatar.
    pub player_name: Rect,
    /// Accuracy text band.
    pub accuracy: Rect,
    /// Rank / performance-points band.
    pub rank: Rect,
    /// Song-name band across the lower canvas.
    pub song_name: Rect,
    /// Smallest font size auto-fit may pick for the player name.
    pub player_name_min_px: f32,
    /// Smallest font size auto-fit may pick for the song name.
    pub song_name_min_px: f32,
    /// Smallest font size auto-fit may pick for the stat lines.
    pub stats_min_px: f32,
    /// Fixed font size for the difficulty badge (no auto-fit).
    pub badge_font_px: f32,
}

/// Geometry of the corner difficulty badge for one measured text extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BadgeLayout {
    /// Full rounded-rectangle badge region, flush to the top-right corner.
    pub rect: Rect,
    /// Corner radius for the badge mask.
    pub corner_radius: f64,
    /// Top-left origin for the badge text.
    pub text_origin: (f64, f64),
    /// Star glyph region, horizontally adjacent to the text. `None` when no
    /// star rating is shown.
    pub star: Option<Rect>,
}

// Horizontal padding inside the badge, as a fraction of the badge font size.
const BADGE_PADDING_FACTOR: f64 = 0.53;

impl Layout {
    /// Compute the layout for `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);

        let avatar_side = 0.5 * h;
        let avatar_cx = 0.5 * w - 0.22 * w;
        let avatar_cy = 0.5 * h;

        Self {
            canvas,
            avatar: centered_rect(avatar_cx, avatar_cy, avatar_side, avatar_side),
            player_name: centered_rect(0.60 * w, 0.30 * h, 0.56 * w, 0.14 * h),
            accuracy: centered_rect(0.60 * w, 0.50 * h, 0.56 * w, 0.12 * h),
            rank: centered_rect(0.60 * w, 0.64 * h, 0.56 * w, 0.10 * h),
            song_name: centered_rect(0.5 * w, 0.85 * h, 0.94 * w, 0.12 * h),
            player_name_min_px: (0.05 * h) as f32,
            song_name_min_px: (0.04 * h) as f32,
            stats_min_px: (0.03 * h) as f32,
            badge_font_px: (0.06 * h) as f32,
        }
    }

    /// Corner-badge geometry for measured badge text of `text_w` x `text_h`
    /// pixels, with a star glyph when `has_star`.
    ///
    /// The one dynamic layout computation: padding scales with the badge font
    /// size, the star glyph (a square the height of the text) sits directly
    /// right of the text, and the text+star unit is horizontally centered
    /// inside the badge.
    pub fn badge(&self, text_w: f64, text_h: f64, has_star: bool) -> BadgeLayout {
        let w = f64::from(self.canvas.width);
        let padding = BADGE_PADDING_FACTOR * f64::from(self.badge_font_px);
        let star_w = if has_star { text_h } else { 0.0 };

        let badge_w = text_w + star_w + 2.0 * padding;
        let badge_h = text_h + 2.0 * padding;
        let rect = Rect::new(w - badge_w, 0.0, w, badge_h);

        let unit_left = rect.x0 + (badge_w - text_w - star_w) / 2.0;
        let text_origin = (unit_left, rect.y0 + padding);
        let star = has_star.then(|| {
            Rect::new(
                unit_left + text_w,
                rect.y0 + padding,
                unit_left + text_w + star_w,
                rect.y0 + padding + text_h,
            )
        });

        BadgeLayout {
            rect,
            corner_radius: 0.25 * badge_h,
            text_origin,
            star,
        }
    }
}

fn centered_rect(cx: f64, cy: f64, w: f64, h: f64) -> Rect {
    Rect::new(cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0)
}
