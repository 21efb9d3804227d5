// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Generational entity slot allocation.

use crate::ecs::{EntityId, EntityLiveness};

/// Minimal manager for entity slots.
///
/// The `EntityStore` maintains a dense list of entity handles and whether each
/// slot is currently alive. It handles entity creation, recycling of indices via
/// a free list, and liveness checks for outstanding handles.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    /// A dense list of every entity slot that has ever been created.
    /// Each entry contains the current `EntityId` (including generation) and
    /// whether that handle is alive.
    entities: Vec<(EntityId, bool)>,
    /// A list of entity indices available for reuse, enabling $O(1)$ allocation
    /// for previously despawned entities.
    freed_entities: Vec<u32>,
}

impl EntityStore {
    /// Creates a new, empty `EntityStore`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new or recycled `EntityId`.
    ///
    /// If there are indices in the free list, one is popped and its generation
    /// is incremented. Otherwise, a new slot is appended.
    pub fn create_entity(&mut self) -> EntityId {
        if let Some(index) = self.freed_entities.pop() {
            let (id_slot, alive) = &mut self.entities[index as usize];
            id_slot.generation += 1;
            *alive = true;
            log::trace!("Recycled entity slot {}", id_slot);
            *id_slot
        } else {
            let new_id = EntityId::new(self.entities.len() as u32, 0);
            self.entities.push((new_id, true));
            new_id
        }
    }

    /// Destroys an entity, making its handle stale and its index reusable.
    ///
    /// Returns `false` if the handle was already stale.
    pub fn despawn(&mut self, entity: EntityId) -> bool {
        match self.entities.get_mut(entity.index as usize) {
            Some((slot_id, alive)) if *alive && slot_id.generation == entity.generation => {
                *alive = false;
                self.freed_entities.push(entity.index);
                true
            }
            _ => false,
        }
    }

    /// Returns the total number of entity slots (both alive and dead).
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if no slot was ever allocated.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns an iterator over the handles of all live entities.
    pub fn iter_alive(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities
            .iter()
            .filter(|(_, alive)| *alive)
            .map(|(id, _)| *id)
    }
}

impl EntityLiveness for EntityStore {
    fn is_alive(&self, entity: EntityId) -> bool {
        self.entities
            .get(entity.index as usize)
            .is_some_and(|(slot_id, alive)| *alive && slot_id.generation == entity.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_entity_appends_slots() {
        let mut store = EntityStore::new();

        let a = store.create_entity();
        let b = store.create_entity();

        assert_eq!(a, EntityId::new(0, 0));
        assert_eq!(b, EntityId::new(1, 0));
        assert_eq!(store.len(), 2);
        assert!(store.is_alive(a) && store.is_alive(b));
    }

    #[test]
    fn test_despawn_invalidates_handle_and_recycles_index() {
        // --- 1. ARRANGE ---
        let mut store = EntityStore::new();
        let old = store.create_entity();

        // --- 2. ACT ---
        assert!(store.despawn(old));
        let recycled = store.create_entity();

        // --- 3. ASSERT ---
        assert_eq!(recycled.index, old.index, "The freed index should be reused");
        assert_eq!(recycled.generation, old.generation + 1);
        assert!(!store.is_alive(old), "The old handle must be stale");
        assert!(store.is_alive(recycled));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_double_despawn_is_rejected() {
        let mut store = EntityStore::new();
        let entity = store.create_entity();

        assert!(store.despawn(entity));
        assert!(!store.despawn(entity));
        assert_eq!(store.iter_alive().count(), 0);
    }

    #[test]
    fn test_unknown_handle_is_not_alive() {
        let store = EntityStore::new();
        assert!(!store.is_alive(EntityId::new(7, 0)));
    }
}
