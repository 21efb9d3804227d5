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

//! Per-entity storage of [`MetaData`] records.

use entmeta_core::ecs::EntityId;

use crate::meta::MetaData;

/// Largest jump past the current slot count a single attach is expected to make.
const MAX_SLOT_GAP: usize = 1 << 20;

/// Dense, index-addressed storage of one [`MetaData`] per entity.
///
/// Slots are indexed by `EntityId::index`. A slot also remembers the full
/// handle it was filled for, so a record left behind by a despawned entity is
/// never handed out for the entity that later recycles its index.
#[derive(Debug, Clone, Default)]
pub struct MetaStore {
    slots: Vec<Option<(EntityId, MetaData)>>,
}

impl MetaStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record of `entity`, allocating an empty one if needed.
    ///
    /// A record held by an older generation of the same index is discarded;
    /// use [`take_stale`](Self::take_stale) first to observe it.
    ///
    /// Storage grows up to `entity.index`, so handles must come from the entity
    /// manager, which hands out indices densely. A fabricated handle with a huge
    /// index would allocate that many slots.
    pub fn attach(&mut self, entity: EntityId) -> &mut MetaData {
        let index = entity.index as usize;
        if index >= self.slots.len() {
            debug_assert!(
                index - self.slots.len() < MAX_SLOT_GAP,
                "entity {entity} is far beyond the {} allocated slots",
                self.slots.len()
            );
            self.slots.resize_with(index + 1, || None);
        }

        let slot = &mut self.slots[index];
        if slot.as_ref().is_some_and(|(owner, _)| *owner != entity) {
            *slot = None;
        }
        let (_, data) = slot.get_or_insert_with(|| (entity, MetaData::default()));
        data
    }

    /// Removes and returns a record occupying `entity`'s slot on behalf of a
    /// different generation.
    pub fn take_stale(&mut self, entity: EntityId) -> Option<(EntityId, MetaData)> {
        let slot = self.slots.get_mut(entity.index as usize)?;
        if slot.as_ref().is_some_and(|(owner, _)| *owner != entity) {
            slot.take()
        } else {
            None
        }
    }

    /// Returns the record of `entity`, if it has one.
    pub fn get(&self, entity: EntityId) -> Option<&MetaData> {
        match self.slots.get(entity.index as usize)? {
            Some((owner, data)) if *owner == entity => Some(data),
            _ => None,
        }
    }

    /// Returns a mutable reference to the record of `entity`, if it has one.
    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut MetaData> {
        match self.slots.get_mut(entity.index as usize)? {
            Some((owner, data)) if *owner == entity => Some(data),
            _ => None,
        }
    }

    /// Removes and returns the record of `entity`.
    pub fn remove(&mut self, entity: EntityId) -> Option<MetaData> {
        let slot = self.slots.get_mut(entity.index as usize)?;
        if slot.as_ref().is_some_and(|(owner, _)| *owner == entity) {
            slot.take().map(|(_, data)| data)
        } else {
            None
        }
    }

    /// Returns `true` if `entity` has a record.
    pub fn contains(&self, entity: EntityId) -> bool {
        self.get(entity).is_some()
    }

    /// Iterates over every stored record together with its owner.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &MetaData)> + '_ {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|(owner, data)| (*owner, data)))
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if no record is stored.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
