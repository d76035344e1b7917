#[cfg(test)]
mod tests {
    use std::io::Write;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::components::{Input, Lifespan};
    use crate::config::GameConfig;
    use crate::enums::{Key, MouseButton, Tag};
    use crate::error::ConfigError;
    use crate::events::{InputEvent, InputSource, QueuedInput};
    use crate::random::RandomSource;
    use crate::render::{CircleDraw, RecordingRenderer, Renderer};
    use crate::types::{circles_overlap, Color, Vec2};

    const CONFIG: &str = "\
Window 1280 720 60 0
Font fonts/tech.ttf 24 255 255 255
Player 32 32 5 5 5 5 255 0 0 4 8
Enemy 32 32 3 3 255 255 255 2 3 8 90 60
Bullet 10 10 20 255 255 255 255 255 255 2 20 90
";

    // ---- Config ----

    #[test]
    fn test_parse_full_config() {
        let config: GameConfig = CONFIG.parse().unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.window.frame_limit, 60);
        assert!(!config.window.fullscreen);
        assert_eq!(config.font.path.to_str(), Some("fonts/tech.ttf"));
        assert_eq!(config.font.size, 24);
        assert_eq!(config.player.speed, 5.0);
        assert_eq!(config.player.fill, Color::rgb(5, 5, 5));
        assert_eq!(config.player.outline, Color::rgb(255, 0, 0));
        assert_eq!(config.player.vertices, 8);
        assert_eq!(config.enemy.min_speed, 3.0);
        assert_eq!(config.enemy.min_vertices, 3);
        assert_eq!(config.enemy.max_vertices, 8);
        assert_eq!(config.enemy.small_lifespan, 90);
        assert_eq!(config.enemy.spawn_interval, 60);
        assert_eq!(config.bullet.speed, 20.0);
        assert_eq!(config.bullet.lifespan, 90);
    }

    #[test]
    fn test_sections_in_any_order_with_comments_and_unknown_keywords() {
        let shuffled = "\
# bullets first
Bullet 10 10 20 255 255 255 255 255 255 2 20 90
Music theme.ogg 0.5

Enemy 32 32 3 3 255 255 255 2 3 8 90 60
Player 32 32 5 5 5 5 255 0 0 4 8
Font fonts/tech.ttf 24 255 255 255
Window 800 600 60 1
";
        let config: GameConfig = shuffled.parse().unwrap();
        assert_eq!(config.window.width, 800);
        assert!(config.window.fullscreen);
        assert_eq!(config.bullet.lifespan, 90);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let without_bullet: String = CONFIG
            .lines()
            .filter(|l| !l.starts_with("Bullet"))
            .map(|l| format!("{l}\n"))
            .collect();
        let err = without_bullet.parse::<GameConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::MissingSection("Bullet")));
    }

    #[test]
    fn test_wrong_field_count_reports_line() {
        let text = CONFIG.replace("Window 1280 720 60 0", "Window 1280 720");
        let err = text.parse::<GameConfig>().unwrap_err();
        match err {
            ConfigError::FieldCount {
                section,
                line,
                expected,
                found,
            } => {
                assert_eq!(section, "Window");
                assert_eq!(line, 1);
                assert_eq!(expected, 4);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_number_names_the_field() {
        let text = CONFIG.replace("Player 32 32 5", "Player 32 32 fast");
        let err = text.parse::<GameConfig>().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                section: "Player",
                field: "S",
                ..
            }
        ));
    }

    #[test]
    fn test_color_channel_out_of_range_is_rejected() {
        let text = CONFIG.replace("Player 32 32 5 5 5 5 255", "Player 32 32 5 5 5 5 256");
        assert!(text.parse::<GameConfig>().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_vertex_range() {
        let text = CONFIG.replace("2 3 8 90 60", "2 8 3 90 60");
        let err = text.parse::<GameConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let text = CONFIG.replace("2 3 8 90 60", "2 2 8 90 60");
        assert!(matches!(
            text.parse::<GameConfig>().unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }

    #[test]
    fn test_validation_rejects_non_finite_numbers() {
        for bad in ["NaN", "inf", "-inf"] {
            let text = CONFIG.replace("Enemy 32 32 3 3", &format!("Enemy 32 32 {bad} 3"));
            assert!(matches!(
                text.parse::<GameConfig>().unwrap_err(),
                ConfigError::Invalid(_)
            ));
        }
        let text = CONFIG.replace("Player 32 32 5", "Player NaN 32 5");
        assert!(text.parse::<GameConfig>().is_err());
        let text = CONFIG.replace("Bullet 10 10 20", "Bullet 10 10 inf");
        assert!(text.parse::<GameConfig>().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.viewport().width, 1280.0);
        assert_eq!(config.viewport().center(), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    // ---- Tags ----

    #[test]
    fn test_tag_string_forms() {
        for tag in Tag::ALL {
            assert_eq!(Tag::parse(tag.as_str()), Some(tag));
            assert_eq!(Tag::ALL[tag.index()], tag);
        }
        assert_eq!(Tag::parse("boss"), None);
        assert_eq!(
            serde_json::to_string(&Tag::SmallEnemy).unwrap(),
            "\"smallEnemy\""
        );
    }

    // ---- Components and math ----

    #[test]
    fn test_input_direction_is_unit_or_zero() {
        let none = Input::default();
        assert_eq!(none.direction(), Vec2::ZERO);

        let diagonal = Input {
            up: true,
            right: true,
            ..Default::default()
        };
        let dir = diagonal.direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x > 0.0 && dir.y < 0.0);

        let opposed = Input {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(opposed.direction(), Vec2::ZERO);
    }

    #[test]
    fn test_lifespan_ratio() {
        let mut life = Lifespan::new(4);
        assert_eq!(life.ratio(), 1.0);
        life.remaining = 1;
        assert_eq!(life.ratio(), 0.25);
        assert_eq!(Lifespan::new(0).ratio(), 0.0);
    }

    #[test]
    fn test_color_alpha_ratio() {
        let c = Color::rgb(10, 20, 30);
        assert_eq!(c.with_alpha_ratio(0.0).a, 0);
        assert_eq!(c.with_alpha_ratio(1.0).a, 255);
        assert_eq!(c.with_alpha_ratio(0.5).a, 128);
        assert_eq!(c.with_alpha_ratio(0.5).r, 10);
    }

    #[test]
    fn test_circles_overlap_uses_radius_sum() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circles_overlap(a, 10.0, Vec2::new(15.0, 0.0), 10.0));
        assert!(!circles_overlap(a, 10.0, Vec2::new(20.0, 0.0), 10.0));
        assert!(!circles_overlap(a, 10.0, Vec2::new(30.0, 0.0), 10.0));
    }

    // ---- Collaborators ----

    #[test]
    fn test_random_source_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let f = rng.uniform_float(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&f));
            let i = rng.uniform_int(3, 8);
            assert!((3..=8).contains(&i));
        }
        assert_eq!(rng.uniform_float(5.0, 5.0), 5.0);
        assert_eq!(rng.uniform_int(4, 4), 4);
    }

    #[test]
    fn test_random_source_same_seed_same_sequence() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(a.uniform_float(0.0, 1.0), b.uniform_float(0.0, 1.0));
        }
    }

    #[test]
    fn test_queued_input_returns_one_batch_per_poll() {
        let mut input = QueuedInput::new();
        input.push_batch([
            InputEvent::KeyDown { key: Key::W },
            InputEvent::KeyDown { key: Key::D },
        ]);
        input.push_batch([InputEvent::WindowClosed]);

        assert_eq!(input.poll_events().len(), 2);
        assert_eq!(input.poll_events(), vec![InputEvent::WindowClosed]);
        assert!(input.poll_events().is_empty());
    }

    #[test]
    fn test_input_event_json_form() {
        let event = InputEvent::MouseDown {
            button: MouseButton::Left,
            position: Vec2::new(10.0, 20.0),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"MouseDown\""));
        let back: InputEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_recording_renderer_keeps_last_presented_frame() {
        let mut renderer = RecordingRenderer::new();
        let circle = CircleDraw {
            position: Vec2::new(1.0, 2.0),
            radius: 3.0,
            sides: 5,
            fill: Color::WHITE,
            outline: Color::WHITE,
            outline_thickness: 1.0,
            rotation: 0.0,
        };
        renderer.clear();
        renderer.draw_circle(&circle);
        renderer.draw_circle(&circle);
        renderer.present();
        assert_eq!(renderer.circles.len(), 2);

        renderer.clear();
        renderer.present();
        assert!(renderer.circles.is_empty());
        assert_eq!(renderer.frames_presented, 2);
    }
}
