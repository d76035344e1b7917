//! Game configuration and its plain-text loader.
//!
//! One section per line, keyword first, fields separated by whitespace:
//!
//! ```text
//! Window W H FL FS
//! Font   F S R G B
//! Player SR CR S FR FG FB OR OG OB OT V
//! Enemy  SR CR SMIN SMAX OR OG OB OT VMIN VMAX L SI
//! Bullet SR CR S FR FG FB OR OG OB OT V L
//! ```
//!
//! Lines may appear in any order. Unknown keywords, blank lines and lines
//! starting with `#` are skipped.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::types::{Color, Tick, Viewport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    /// Target ticks per second.
    pub frame_limit: u32,
    pub fullscreen: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    pub path: PathBuf,
    pub size: u32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub shape_radius: f32,
    pub collision_radius: f32,
    /// Pixels per tick.
    pub speed: f32,
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
    pub vertices: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub shape_radius: f32,
    pub collision_radius: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub outline: Color,
    pub outline_thickness: f32,
    pub min_vertices: u32,
    pub max_vertices: u32,
    /// Lifespan of the small enemies a destroyed enemy splits into.
    pub small_lifespan: u32,
    pub spawn_interval: Tick,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletConfig {
    pub shape_radius: f32,
    pub collision_radius: f32,
    pub speed: f32,
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
    pub vertices: u32,
    pub lifespan: u32,
}

/// Everything read from the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub font: FontConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bullet: BulletConfig,
}

impl GameConfig {
    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window.width as f32, self.window.height as f32)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid("window size must be positive".into()));
        }
        let floats = [
            ("Player SR", self.player.shape_radius),
            ("Player CR", self.player.collision_radius),
            ("Player S", self.player.speed),
            ("Player OT", self.player.outline_thickness),
            ("Enemy SR", self.enemy.shape_radius),
            ("Enemy CR", self.enemy.collision_radius),
            ("Enemy SMIN", self.enemy.min_speed),
            ("Enemy SMAX", self.enemy.max_speed),
            ("Enemy OT", self.enemy.outline_thickness),
            ("Bullet SR", self.bullet.shape_radius),
            ("Bullet CR", self.bullet.collision_radius),
            ("Bullet S", self.bullet.speed),
            ("Bullet OT", self.bullet.outline_thickness),
        ];
        if let Some((name, value)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Invalid(format!("{name} must be finite, got {value}")));
        }
        if self.enemy.min_vertices < 3 {
            return Err(ConfigError::Invalid(format!(
                "enemy VMIN must be at least 3, got {}",
                self.enemy.min_vertices
            )));
        }
        if self.enemy.min_vertices > self.enemy.max_vertices {
            return Err(ConfigError::Invalid(format!(
                "enemy VMIN {} exceeds VMAX {}",
                self.enemy.min_vertices, self.enemy.max_vertices
            )));
        }
        if self.enemy.min_speed > self.enemy.max_speed {
            return Err(ConfigError::Invalid(format!(
                "enemy SMIN {} exceeds SMAX {}",
                self.enemy.min_speed, self.enemy.max_speed
            )));
        }
        if self.player.vertices < 3 || self.bullet.vertices < 3 {
            return Err(ConfigError::Invalid(
                "player and bullet shapes need at least 3 vertices".into(),
            ));
        }
        let radii = [
            self.player.shape_radius,
            self.player.collision_radius,
            self.enemy.shape_radius,
            self.enemy.collision_radius,
            self.bullet.shape_radius,
            self.bullet.collision_radius,
        ];
        if radii.iter().any(|r| *r <= 0.0) {
            return Err(ConfigError::Invalid("radii must be positive".into()));
        }
        let view = self.viewport();
        if self.enemy.shape_radius * 2.0 > view.width.min(view.height) {
            return Err(ConfigError::Invalid(
                "enemy shape does not fit inside the window".into(),
            ));
        }
        Ok(())
    }
}

impl FromStr for GameConfig {
    type Err = ConfigError;

    fn from_str(text: &str) -> ConfigResult<Self> {
        let mut window = None;
        let mut font = None;
        let mut player = None;
        let mut enemy = None;
        let mut bullet = None;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let tokens: Vec<&str> = raw.split_whitespace().collect();
            let Some((&keyword, rest)) = tokens.split_first() else {
                continue;
            };
            if keyword.starts_with('#') {
                continue;
            }
            match keyword {
                "Window" => window = Some(parse_window(Fields::new("Window", line, rest, 4)?)?),
                "Font" => font = Some(parse_font(Fields::new("Font", line, rest, 5)?)?),
                "Player" => player = Some(parse_player(Fields::new("Player", line, rest, 11)?)?),
                "Enemy" => enemy = Some(parse_enemy(Fields::new("Enemy", line, rest, 12)?)?),
                "Bullet" => bullet = Some(parse_bullet(Fields::new("Bullet", line, rest, 12)?)?),
                _ => {}
            }
        }

        let config = GameConfig {
            window: window.ok_or(ConfigError::MissingSection("Window"))?,
            font: font.ok_or(ConfigError::MissingSection("Font"))?,
            player: player.ok_or(ConfigError::MissingSection("Player"))?,
            enemy: enemy.ok_or(ConfigError::MissingSection("Enemy"))?,
            bullet: bullet.ok_or(ConfigError::MissingSection("Bullet"))?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Cursor over the fields of one config line.
struct Fields<'a> {
    section: &'static str,
    line: usize,
    tokens: &'a [&'a str],
    pos: usize,
}

impl<'a> Fields<'a> {
    fn new(
        section: &'static str,
        line: usize,
        tokens: &'a [&'a str],
        expected: usize,
    ) -> ConfigResult<Self> {
        if tokens.len() != expected {
            return Err(ConfigError::FieldCount {
                section,
                line,
                expected,
                found: tokens.len(),
            });
        }
        Ok(Self {
            section,
            line,
            tokens,
            pos: 0,
        })
    }

    fn next_raw(&mut self) -> &'a str {
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    fn next<T: FromStr>(&mut self, field: &'static str) -> ConfigResult<T> {
        let token = self.next_raw();
        token.parse().map_err(|_| ConfigError::InvalidValue {
            section: self.section,
            field,
            line: self.line,
            value: token.to_string(),
        })
    }

    fn color(&mut self, r: &'static str, g: &'static str, b: &'static str) -> ConfigResult<Color> {
        Ok(Color::rgb(self.next(r)?, self.next(g)?, self.next(b)?))
    }
}

fn parse_window(mut f: Fields<'_>) -> ConfigResult<WindowConfig> {
    Ok(WindowConfig {
        width: f.next("W")?,
        height: f.next("H")?,
        frame_limit: f.next("FL")?,
        fullscreen: f.next::<u8>("FS")? != 0,
    })
}

fn parse_font(mut f: Fields<'_>) -> ConfigResult<FontConfig> {
    Ok(FontConfig {
        path: PathBuf::from(f.next_raw()),
        size: f.next("S")?,
        color: f.color("R", "G", "B")?,
    })
}

fn parse_player(mut f: Fields<'_>) -> ConfigResult<PlayerConfig> {
    Ok(PlayerConfig {
        shape_radius: f.next("SR")?,
        collision_radius: f.next("CR")?,
        speed: f.next("S")?,
        fill: f.color("FR", "FG", "FB")?,
        outline: f.color("OR", "OG", "OB")?,
        outline_thickness: f.next("OT")?,
        vertices: f.next("V")?,
    })
}

fn parse_enemy(mut f: Fields<'_>) -> ConfigResult<EnemyConfig> {
    Ok(EnemyConfig {
        shape_radius: f.next("SR")?,
        collision_radius: f.next("CR")?,
        min_speed: f.next("SMIN")?,
        max_speed: f.next("SMAX")?,
        outline: f.color("OR", "OG", "OB")?,
        outline_thickness: f.next("OT")?,
        min_vertices: f.next("VMIN")?,
        max_vertices: f.next("VMAX")?,
        small_lifespan: f.next("L")?,
        spawn_interval: f.next("SI")?,
    })
}

fn parse_bullet(mut f: Fields<'_>) -> ConfigResult<BulletConfig> {
    Ok(BulletConfig {
        shape_radius: f.next("SR")?,
        collision_radius: f.next("CR")?,
        speed: f.next("S")?,
        fill: f.color("FR", "FG", "FB")?,
        outline: f.color("OR", "OG", "OB")?,
        outline_thickness: f.next("OT")?,
        vertices: f.next("V")?,
        lifespan: f.next("L")?,
    })
}
