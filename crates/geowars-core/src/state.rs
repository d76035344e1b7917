//! Frame snapshot: the visible game state emitted after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::Tag;
use crate::types::{Tick, Vec2};

/// Summary of one frame, cheap to serialize for headless output and HUDs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: Tick,
    pub score: u64,
    pub paused: bool,
    pub player: Option<PlayerView>,
    pub counts: TagCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub special_ready: bool,
}

/// Live entity count per tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCounts {
    pub player: usize,
    pub enemy: usize,
    pub small_enemy: usize,
    pub bullet: usize,
    pub small_ally: usize,
}

impl TagCounts {
    pub fn get(&self, tag: Tag) -> usize {
        match tag {
            Tag::Player => self.player,
            Tag::Enemy => self.enemy,
            Tag::SmallEnemy => self.small_enemy,
            Tag::Bullet => self.bullet,
            Tag::SmallAlly => self.small_ally,
        }
    }

    pub fn set(&mut self, tag: Tag, count: usize) {
        match tag {
            Tag::Player => self.player = count,
            Tag::Enemy => self.enemy = count,
            Tag::SmallEnemy => self.small_enemy = count,
            Tag::Bullet => self.bullet = count,
            Tag::SmallAlly => self.small_ally = count,
        }
    }

    pub fn total(&self) -> usize {
        self.player + self.enemy + self.small_enemy + self.bullet + self.small_ally
    }
}
