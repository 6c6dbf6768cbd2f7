use crate::color::Color;

/// All caller-supplied inputs for one card render.
///
/// Fields are validated only by clamping at the point of use (byte conversion
/// saturates, interpolation clamps); nothing is mutated after construction.
/// The cover, avatar, and optional avatar-border rasters are passed to
/// [`crate::CardGenerator::render`] separately since they are decoded by an
/// external collaborator.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RenderRequest {
    /// Player display name.
    pub player_name: String,
    /// Song title.
    pub song_name: String,
    /// Score modifier string (may be empty).
    #[serde(default)]
    pub modifiers: String,
    /// Difficulty label shown in the corner badge.
    pub difficulty: String,
    /// Accuracy in `[0, 1]`.
    pub accuracy: f64,
    /// Leaderboard rank, >= 1.
    pub rank: u32,
    /// Performance points; `0` hides the pp segment entirely.
    #[serde(default)]
    pub pp: f64,
    /// Star rating; `0` hides the star glyph.
    #[serde(default)]
    pub stars: f64,
    /// Hue shift in degrees applied to the avatar-border overlay.
    #[serde(default)]
    pub hue_shift_deg: f32,
    /// Saturation multiplier applied to the avatar-border overlay.
    #[serde(default = "default_saturation")]
    pub saturation: f32,
    /// Left stop of the background gradient.
    pub gradient_left: Color,
    /// Right stop of the background gradient.
    pub gradient_right: Color,
    /// Fill color for the difficulty badge and star glyph.
    pub difficulty_color: Color,
}

fn default_saturation() -> f32 {
    1.0
}

impl RenderRequest {
    /// Accuracy formatted as a percentage, e.g. `95.37%`.
    pub fn accuracy_text(&self) -> String {
        format!("{:.2}%", self.accuracy * 100.0)
    }

    /// Rank line, e.g. `#1 • 312.4pp`.
    ///
    /// `pp == 0` means pp is hidden: the segment is omitted entirely rather
    /// than rendered as `0pp`.
    pub fn rank_text(&self) -> String {
        if self.pp > 0.0 {
            format!("#{} • {:.1}pp", self.rank, self.pp)
        } else {
            format!("#{}", self.rank)
        }
    }

    /// Badge label: difficulty name plus the star rating when shown.
    pub fn badge_text(&self) -> String {
        if self.has_stars() {
            format!("{} {:.1}", self.difficulty, self.stars)
        } else {
            self.difficulty.clone()
        }
    }

    /// Whether the star glyph is composited.
    pub fn has_stars(&self) -> bool {
        self.stars > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RenderRequest {
        RenderRequest {
            player_name: "player".into(),
            song_name: "song".into(),
            modifiers: String::new(),
            difficulty: "Expert+".into(),
            accuracy: 0.9537,
            rank: 1,
            pp: 312.4,
            stars: 0.0,
            hue_shift_deg: 0.0,
            saturation: 1.0,
            gradient_left: Color::rgba(0.1, 0.2, 0.8, 1.0),
            gradient_right: Color::rgba(0.8, 0.1, 0.4, 1.0),
            difficulty_color: Color::rgba(1.0, 0.3, 0.3, 1.0),
        }
    }

    #[test]
    fn accuracy_has_two_decimals() {
        assert_eq!(request().accuracy_text(), "95.37%");
    }

    #[test]
    fn rank_line_includes_pp_when_present() {
        assert_eq!(request().rank_text(), "#1 • 312.4pp");
    }

    #[test]
    fn rank_line_omits_pp_segment_when_zero() {
        let mut r = request();
        r.pp = 0.0;
        r.rank = 42;
        assert_eq!(r.rank_text(), "#42");
    }

    #[test]
    fn badge_text_appends_stars_when_shown() {
        let mut r = request();
        assert_eq!(r.badge_text(), "Expert+");
        r.stars = 9.25;
        assert_eq!(r.badge_text(), "Expert+ 9.2");
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{
            "player_name": "p",
            "song_name": "s",
            "difficulty": "Hard",
            "accuracy": 0.5,
            "rank": 7,
            "gradient_left": {"r": 0.0, "g": 0.0, "b": 0.0, "a": 1.0},
            "gradient_right": {"r": 1.0, "g": 1.0, "b": 1.0, "a": 1.0},
            "difficulty_color": {"r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0}
        }"#;
        let r: RenderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(r.pp, 0.0);
        assert_eq!(r.saturation, 1.0);
        assert!(r.modifiers.is_empty());
    }
}
