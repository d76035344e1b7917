//! End-to-end runs of the headless app against real files.

use std::io::{self, Write};
use std::path::Path;

use clap::Parser;

use geowars_app::cli::Cli;
use geowars_app::error::AppError;
use geowars_app::game_loop::StopReason;
use geowars_core::error::ConfigError;
use geowars_core::render::RenderError;

fn write_config(dir: &Path, font: &Path) -> std::path::PathBuf {
    let path = dir.join("config.txt");
    let text = format!(
        "Window 800 600 60 0\n\
         Font {} 24 255 255 255\n\
         Player 32 32 5 5 5 5 255 0 0 4 8\n\
         Enemy 32 32 3 3 255 255 255 2 3 8 90 20\n\
         Bullet 10 10 20 255 255 255 255 255 255 2 20 90\n",
        font.display()
    );
    std::fs::write(&path, text).unwrap();
    path
}

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("geowars").chain(args.iter().copied()))
}

#[test]
fn test_cli_defaults() {
    let cli = cli(&[]);
    assert_eq!(cli.config, Path::new("config.txt"));
    assert_eq!(cli.seed, 42);
    assert_eq!(cli.ticks, None);
    assert_eq!(cli.snapshot_every, 60);
    assert!(cli.script.is_none());
    assert!(!cli.unpaced);
}

#[test]
fn test_scripted_run_quits_on_escape() {
    let dir = tempfile::tempdir().unwrap();
    let font = dir.path().join("tech.ttf");
    std::fs::write(&font, b"font").unwrap();
    let config = write_config(dir.path(), &font);

    let script = dir.path().join("script.json");
    let mut file = std::fs::File::create(&script).unwrap();
    file.write_all(
        br#"[
            { "frame": 1, "event": { "type": "KeyDown", "key": "D" } },
            { "frame": 5, "event": { "type": "MouseDown", "button": "Left", "position": [700.0, 300.0] } },
            { "frame": 9, "event": { "type": "MouseDown", "button": "Right", "position": [0.0, 0.0] } },
            { "frame": 40, "event": { "type": "KeyDown", "key": "Escape" } }
        ]"#,
    )
    .unwrap();

    let cli = cli(&[
        "--config",
        config.to_str().unwrap(),
        "--script",
        script.to_str().unwrap(),
        "--ticks",
        "500",
        "--unpaced",
    ]);
    let summary = geowars_app::run(&cli, Box::new(io::sink())).unwrap();
    assert_eq!(summary.reason, StopReason::Quit);
    assert_eq!(summary.frames, 41);
    assert_eq!(summary.last_snapshot.unwrap().tick, 41);
}

#[test]
fn test_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");
    let cli = cli(&["--config", missing.to_str().unwrap(), "--ticks", "1"]);
    let err = geowars_app::run(&cli, Box::new(io::sink())).unwrap_err();
    assert!(matches!(err, AppError::Config(ConfigError::Io { .. })));
}

#[test]
fn test_missing_font_fails_before_the_loop() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &dir.path().join("nope.ttf"));
    let cli = cli(&["--config", config.to_str().unwrap(), "--ticks", "1"]);
    let err = geowars_app::run(&cli, Box::new(io::sink())).unwrap_err();
    assert!(matches!(err, AppError::Render(RenderError::FontLoad { .. })));
}
