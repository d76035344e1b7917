//! Entity registry: sole owner of every entity.
//!
//! Structural changes are deferred. `create_entity` only queues the new
//! entity and `destroy` only flags it; both take effect in `reconcile`, which
//! the engine calls once at the start of each tick. Systems can therefore
//! spawn and destroy while walking a view without invalidating it.

use std::collections::HashMap;

use geowars_core::components::Components;
use geowars_core::enums::Tag;

use crate::entity::{Entity, EntityAllocator, EntityId};

#[derive(Debug, Default)]
pub struct EntityRegistry {
    allocator: EntityAllocator,
    storage: HashMap<EntityId, Entity>,
    /// Created since the last reconcile, in creation order.
    pending: Vec<EntityId>,
    /// Live entities in insertion order.
    live: Vec<EntityId>,
    /// Live entities per tag, indexed by `Tag::index`.
    by_tag: [Vec<EntityId>; Tag::COUNT],
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a new entity. It is reachable through `get`/`get_mut` right
    /// away but shows up in views only after the next `reconcile`.
    pub fn create_entity(&mut self, tag: Tag, components: Components) -> EntityId {
        let id = self.allocator.allocate();
        self.storage.insert(id, Entity::new(id, tag, components));
        self.pending.push(id);
        id
    }

    /// Commit queued entities, then drop every dead entity from all views
    /// and from storage.
    pub fn reconcile(&mut self) {
        for id in self.pending.drain(..) {
            if let Some(entity) = self.storage.get(&id) {
                self.live.push(id);
                self.by_tag[entity.tag().index()].push(id);
            }
        }

        let storage = &self.storage;
        let alive = |id: &EntityId| storage.get(id).is_some_and(Entity::is_alive);
        let before = self.live.len();
        self.live.retain(alive);
        for bucket in &mut self.by_tag {
            bucket.retain(alive);
        }
        self.storage.retain(|_, entity| entity.is_alive());

        let removed = before - self.live.len();
        if removed > 0 {
            tracing::trace!(removed, live = self.live.len(), "reconciled entities");
        }
    }

    /// Flag an entity as dead. Idempotent; unknown ids are ignored.
    pub fn destroy(&mut self, id: EntityId) {
        if let Some(entity) = self.storage.get_mut(&id) {
            entity.mark_dead();
        }
    }

    /// All live entities in insertion order. Includes entities flagged dead
    /// during the current tick.
    pub fn entities(&self) -> &[EntityId] {
        &self.live
    }

    /// Live entities with the given tag, in insertion order.
    pub fn entities_by_tag(&self, tag: Tag) -> &[EntityId] {
        &self.by_tag[tag.index()]
    }

    /// Same as `entities_by_tag` keyed by the tag's string form. Unknown
    /// names yield an empty view.
    pub fn entities_by_tag_name(&self, name: &str) -> &[EntityId] {
        match Tag::parse(name) {
            Some(tag) => self.entities_by_tag(tag),
            None => &[],
        }
    }

    /// First entity with `tag` that is in the live view and not flagged dead.
    pub fn first_alive(&self, tag: Tag) -> Option<EntityId> {
        self.entities_by_tag(tag)
            .iter()
            .copied()
            .find(|id| self.is_alive(*id))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.storage.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.storage.get_mut(&id)
    }

    /// Stored (live or pending) and not flagged dead.
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.storage.get(&id).is_some_and(Entity::is_alive)
    }

    /// Live entities that are not flagged dead, in insertion order.
    pub fn iter_alive(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.live
            .iter()
            .filter_map(|id| self.storage.get(id))
            .filter(|entity| entity.is_alive())
    }

    /// Number of entities in the live view.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// The id the next `create_entity` call will assign.
    pub fn next_id(&self) -> EntityId {
        self.allocator.peek()
    }

    /// Drop every entity, live and pending. Ids keep increasing.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.pending.clear();
        self.live.clear();
        for bucket in &mut self.by_tag {
            bucket.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_is_deferred_until_reconcile() {
        let mut registry = EntityRegistry::new();
        let e = registry.create_entity(Tag::Enemy, Components::default());

        assert!(registry.entities().is_empty());
        assert!(registry.entities_by_tag(Tag::Enemy).is_empty());
        assert_eq!(registry.pending_len(), 1);
        assert!(registry.get(e).is_some());

        registry.reconcile();
        assert_eq!(registry.entities(), &[e]);
        assert_eq!(registry.entities_by_tag(Tag::Enemy), &[e]);
        assert_eq!(registry.pending_len(), 0);
    }

    #[test]
    fn test_destroy_is_deferred_until_reconcile() {
        let mut registry = EntityRegistry::new();
        let e = registry.create_entity(Tag::Bullet, Components::default());
        registry.reconcile();

        registry.destroy(e);
        assert_eq!(registry.entities(), &[e]);
        assert!(!registry.is_alive(e));

        registry.reconcile();
        assert!(registry.entities().is_empty());
        assert!(registry.entities_by_tag(Tag::Bullet).is_empty());
        assert!(registry.get(e).is_none());
    }

    #[test]
    fn test_destroy_twice_is_a_noop() {
        let mut registry = EntityRegistry::new();
        let e = registry.create_entity(Tag::Bullet, Components::default());
        registry.destroy(e);
        registry.destroy(e);
        registry.reconcile();
        registry.destroy(e);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_created_and_destroyed_before_reconcile_never_shows() {
        let mut registry = EntityRegistry::new();
        let e = registry.create_entity(Tag::SmallAlly, Components::default());
        registry.destroy(e);
        registry.reconcile();
        assert!(registry.entities().is_empty());
        assert!(registry.entities_by_tag(Tag::SmallAlly).is_empty());
    }

    #[test]
    fn test_unknown_tag_name_is_empty() {
        let mut registry = EntityRegistry::new();
        registry.create_entity(Tag::Player, Components::default());
        registry.reconcile();
        assert!(registry.entities_by_tag_name("boss").is_empty());
        assert_eq!(registry.entities_by_tag_name("player").len(), 1);
    }

    #[test]
    fn test_views_keep_insertion_order() {
        let mut registry = EntityRegistry::new();
        let a = registry.create_entity(Tag::Enemy, Components::default());
        let b = registry.create_entity(Tag::Bullet, Components::default());
        let c = registry.create_entity(Tag::Enemy, Components::default());
        registry.reconcile();
        registry.destroy(a);
        let d = registry.create_entity(Tag::Enemy, Components::default());
        registry.reconcile();

        assert_eq!(registry.entities(), &[b, c, d]);
        assert_eq!(registry.entities_by_tag(Tag::Enemy), &[c, d]);
    }

    #[test]
    fn test_first_alive_skips_flagged_entities() {
        let mut registry = EntityRegistry::new();
        let old = registry.create_entity(Tag::Player, Components::default());
        registry.reconcile();
        registry.destroy(old);
        let new = registry.create_entity(Tag::Player, Components::default());

        assert_eq!(registry.first_alive(Tag::Player), None);
        registry.reconcile();
        assert_eq!(registry.first_alive(Tag::Player), Some(new));
    }

    #[test]
    fn test_clear_keeps_ids_increasing() {
        let mut registry = EntityRegistry::new();
        let a = registry.create_entity(Tag::Enemy, Components::default());
        registry.reconcile();
        registry.clear();
        let b = registry.create_entity(Tag::Enemy, Components::default());
        assert!(b > a);
        assert_eq!(registry.pending_len(), 1);
        assert!(registry.is_empty());
    }
}
