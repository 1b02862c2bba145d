//! World management
//!
//! The World is the entity store: it owns the identifier counter and the
//! mapping from live entities to their component payload. Every live entity
//! carries exactly one component, so the key set of the mapping is the live
//! set. Iteration is in ascending id order, which keeps every phase
//! deterministic.

use crate::ecs::EntityId;
use std::collections::BTreeMap;

/// The entity store
///
/// `C` is the component payload, one per entity.
#[derive(Debug, Clone)]
pub struct World<C> {
    next_entity_id: u64,
    components: BTreeMap<EntityId, C>,
}

impl<C> World<C> {
    /// Create a new empty world
    pub fn new() -> Self {
        World {
            next_entity_id: 0,
            components: BTreeMap::new(),
        }
    }

    /// Create a new entity holding `component`
    ///
    /// The returned id has never been handed out before in this world.
    pub fn create_entity(&mut self, component: C) -> EntityId {
        let entity = EntityId::new(self.next_entity_id);
        self.next_entity_id += 1;
        self.components.insert(entity, component);
        entity
    }

    /// Remove an entity and return its component
    ///
    /// Removing an entity that is not live is a no-op and returns `None`.
    pub fn remove_entity(&mut self, entity: EntityId) -> Option<C> {
        self.components.remove(&entity)
    }

    /// Check if an entity is alive
    pub fn is_entity_alive(&self, entity: EntityId) -> bool {
        self.components.contains_key(&entity)
    }

    /// Get the number of alive entities
    pub fn entity_count(&self) -> usize {
        self.components.len()
    }

    /// Get the component of a live entity
    pub fn get(&self, entity: EntityId) -> Option<&C> {
        self.components.get(&entity)
    }

    /// Get mutable access to the component of a live entity
    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut C> {
        self.components.get_mut(&entity)
    }

    /// Iterate over all alive entities in ascending id order
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.components.keys().copied()
    }

    /// Iterate over all alive entities and their components
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &C)> {
        self.components.iter().map(|(id, c)| (*id, c))
    }

    /// Iterate mutably over all alive entities and their components
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut C)> {
        self.components.iter_mut().map(|(id, c)| (*id, c))
    }

    /// Remove every entity
    ///
    /// The identifier counter is kept so ids stay unique for the whole run.
    pub fn clear(&mut self) {
        self.components.clear();
    }
}

impl<C> Default for World<C> {
    fn default() -> Self {
        Self::new()
    }
}
