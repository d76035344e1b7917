use serde::{Deserialize, Serialize};

use geowars_core::components::Components;
use geowars_core::enums::Tag;

/// Stable entity handle. Ids grow monotonically and are never reused, so a
/// stale id simply stops resolving once its entity has been reconciled away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// Hands out strictly increasing ids.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    next_id: u64,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// The id the next `allocate` call will return.
    pub fn peek(&self) -> EntityId {
        EntityId(self.next_id)
    }
}

/// Identity, lifetime flag and component slots of one entity.
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    tag: Tag,
    alive: bool,
    pub components: Components,
}

impl Entity {
    pub(crate) fn new(id: EntityId, tag: Tag, components: Components) -> Self {
        Self {
            id,
            tag,
            alive: true,
            components,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn mark_dead(&mut self) {
        self.alive = false;
    }
}
