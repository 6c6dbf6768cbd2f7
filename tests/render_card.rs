mod support;

mod render_card {
    use crate::support::{self, MonoFont, solid};
    use image::{Rgba, RgbaImage};
    use scorecard::{Canvas, CardAssets, CardGenerator, Color, FontResource, RenderRequest};

    fn checker(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([220, 120, 40, 255])
            } else {
                Rgba([30, 60, 160, 255])
            }
        })
    }

    fn assets(w: u32, h: u32) -> CardAssets {
        CardAssets {
            star_icon: solid(12, 12, [255, 255, 255, 255]),
            avatar_mask: solid(16, 16, [255, 255, 255, 255]),
            avatar_shadow: solid(16, 16, [0, 0, 0, 140]),
            gradient_mask_sharp: solid(w, h, [255, 255, 255, 60]),
            gradient_mask_blurred: solid(w, h, [255, 255, 255, 100]),
            border_mask: solid(w, h, [255, 255, 255, 40]),
            composite_mask: solid(w, h, [255, 255, 255, 255]),
        }
    }

    fn generator(w: u32, h: u32) -> CardGenerator {
        CardGenerator::new(Canvas::new(w, h).unwrap(), assets(w, h), Box::new(MonoFont)).unwrap()
    }

    fn request() -> RenderRequest {
        RenderRequest {
            player_name: "Player One".into(),
            song_name: "A Fairly Long Song Title".into(),
            modifiers: String::new(),
            difficulty: "Expert+".into(),
            accuracy: 0.9537,
            rank: 1,
            pp: 312.4,
            stars: 9.1,
            hue_shift_deg: 45.0,
            saturation: 1.1,
            gradient_left: Color::rgba(0.15, 0.2, 0.85, 1.0),
            gradient_right: Color::rgba(0.85, 0.15, 0.35, 1.0),
            difficulty_color: Color::rgba(0.9, 0.25, 0.25, 1.0),
        }
    }

    #[test]
    fn stats_text_for_reference_scenario() {
        let req = request();
        assert_eq!(req.accuracy_text(), "95.37%");
        assert_eq!(req.rank_text(), "#1 • 312.4pp");
    }

    #[test]
    fn zero_pp_hides_the_pp_segment() {
        let mut req = request();
        req.pp = 0.0;
        req.rank = 17;
        assert_eq!(req.rank_text(), "#17");
    }

    #[test]
    fn reference_canvas_renders_stats_untruncated() {
        support::init_tracing();
        let generator = generator(1200, 630);
        let req = request();
        let out = generator
            .render(&req, &checker(256, 256), &checker(128, 128), None)
            .unwrap();
        assert_eq!(out.dimensions(), (1200, 630));

        // At the reference geometry the stat strings fit without any
        // truncation: what is drawn is exactly "95.37%" and "#1 • 312.4pp".
        let l = generator.layout();
        let accuracy = scorecard::fit_text(&MonoFont, &req.accuracy_text(), l.accuracy, l.stats_min_px);
        assert_eq!(accuracy.text, "95.37%");
        let rank = scorecard::fit_text(&MonoFont, &req.rank_text(), l.rank, l.stats_min_px);
        assert_eq!(rank.text, "#1 • 312.4pp");
    }

    #[test]
    fn full_render_produces_canvas_sized_opaque_card() {
        let generator = generator(300, 158);
        let out = generator
            .render(&request(), &checker(64, 64), &checker(32, 32), None)
            .unwrap();
        assert_eq!(out.dimensions(), (300, 158));
        // The composite mask is fully opaque, so the card interior is too.
        assert_eq!(out.get_pixel(150, 79).0[3], 255);
    }

    #[test]
    fn render_is_deterministic() {
        let generator = generator(120, 63);
        let cover = solid(24, 24, [80, 40, 120, 255]);
        let avatar = solid(12, 12, [200, 180, 20, 255]);
        let a = generator.render(&request(), &cover, &avatar, None).unwrap();
        let b = generator.render(&request(), &cover, &avatar, None).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn parallel_pass_matches_single_threaded_pass() {
        support::init_tracing();
        let cover = checker(48, 48);
        let avatar = checker(24, 24);
        let req = request();

        let many = generator(240, 126)
            .render(&req, &cover, &avatar, None)
            .unwrap();

        let single_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap();
        let sequential = single_pool.install(|| {
            generator(240, 126)
                .render(&req, &cover, &avatar, None)
                .unwrap()
        });

        assert_eq!(many.as_raw(), sequential.as_raw());
    }

    #[test]
    fn border_overlay_changes_output() {
        let generator = generator(120, 63);
        let cover = solid(24, 24, [80, 40, 120, 255]);
        let avatar = solid(12, 12, [200, 180, 20, 255]);
        let overlay = solid(12, 12, [90, 90, 90, 255]);
        let plain = generator.render(&request(), &cover, &avatar, None).unwrap();
        let glowing = generator
            .render(&request(), &cover, &avatar, Some(&overlay))
            .unwrap();
        assert_ne!(plain.as_raw(), glowing.as_raw());
    }

    #[test]
    fn star_rating_zero_renders_without_star_glyph() {
        let cover = checker(48, 48);
        let avatar = checker(24, 24);

        let mut no_star = request();
        no_star.stars = 0.0;
        let mut with_star = request();
        with_star.stars = 9.1;

        let generator = generator(240, 126);
        let a = generator.render(&no_star, &cover, &avatar, None).unwrap();
        let b = generator.render(&with_star, &cover, &avatar, None).unwrap();
        // The star glyph and the wider badge change the top-right corner.
        assert_ne!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn zero_stars_narrows_the_badge() {
        let generator = generator(200, 100);
        let l = generator.layout();
        let with_star = {
            let req = request();
            let e = MonoFont.measure(&req.badge_text(), l.badge_font_px);
            l.badge(e.width, e.height, req.has_stars())
        };
        let without_star = {
            let mut req = request();
            req.stars = 0.0;
            let e = MonoFont.measure(&req.badge_text(), l.badge_font_px);
            l.badge(e.width, e.height, req.has_stars())
        };
        assert!(with_star.rect.width() > without_star.rect.width());
        assert!(without_star.star.is_none());
    }

    #[test]
    fn renders_with_degenerate_inputs() {
        let generator = generator(120, 63);
        let mut req = request();
        req.player_name = String::new();
        req.song_name = "x".repeat(500);
        // Identical stops make the gradient a constant color.
        req.gradient_right = req.gradient_left;

        let out = generator
            .render(&req, &RgbaImage::new(1, 1), &RgbaImage::new(1, 1), None)
            .unwrap();
        assert_eq!(out.dimensions(), (120, 63));
    }
}
