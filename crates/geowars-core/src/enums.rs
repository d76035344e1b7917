//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Role of an entity. Fixed at creation and used to index registry queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tag {
    Player,
    Enemy,
    SmallEnemy,
    Bullet,
    SmallAlly,
}

impl Tag {
    pub const COUNT: usize = 5;

    pub const ALL: [Tag; Tag::COUNT] = [
        Tag::Player,
        Tag::Enemy,
        Tag::SmallEnemy,
        Tag::Bullet,
        Tag::SmallAlly,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "player" => Some(Tag::Player),
            "enemy" => Some(Tag::Enemy),
            "smallEnemy" => Some(Tag::SmallEnemy),
            "bullet" => Some(Tag::Bullet),
            "smallAlly" => Some(Tag::SmallAlly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Player => "player",
            Tag::Enemy => "enemy",
            Tag::SmallEnemy => "smallEnemy",
            Tag::Bullet => "bullet",
            Tag::SmallAlly => "smallAlly",
        }
    }

    /// Position in `Tag::ALL`, used for fixed-size per-tag tables.
    pub fn index(&self) -> usize {
        match self {
            Tag::Player => 0,
            Tag::Enemy => 1,
            Tag::SmallEnemy => 2,
            Tag::Bullet => 3,
            Tag::SmallAlly => 4,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyboard keys the game reacts to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    P,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// The simulation stages that pause and the debug toggles can switch off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemKind {
    Spawning,
    Lifespan,
    Movement,
    Collision,
    Cooldown,
    Render,
}
