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

//! Reverse lookup from entity identifiers to entity handles.

use ahash::AHashMap;
use entmeta_core::ecs::{EntityId, EntityLiveness};

/// Maps entity identifiers back to the entities that carry them.
///
/// The dictionary stores copies of `EntityId`s and never keeps an entity alive.
/// Handles whose entity has been despawned are detected and dropped the next
/// time they are resolved.
#[derive(Debug, Clone, Default)]
pub struct EntityDictionary {
    entries: AHashMap<String, EntityId>,
}

impl EntityDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `key` to `entity`, returning the handle it previously mapped to.
    ///
    /// The last write wins. Callers are responsible for evicting an identifier
    /// from its previous owner before handing it to another entity.
    pub fn register(&mut self, key: impl Into<String>, entity: EntityId) -> Option<EntityId> {
        let key = key.into();
        log::trace!("Registering entity {} as `{}`", entity, key);
        self.entries.insert(key, entity)
    }

    /// Removes `key`, returning the handle it mapped to.
    pub fn unregister(&mut self, key: &str) -> Option<EntityId> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            log::trace!("Unregistered `{}`", key);
        }
        removed
    }

    /// Removes `key` only if it currently maps to `entity`.
    pub fn unregister_if_owned(&mut self, key: &str, entity: EntityId) -> bool {
        if self.entries.get(key) == Some(&entity) {
            self.entries.remove(key);
            log::trace!("Unregistered `{}` from entity {}", key, entity);
            true
        } else {
            false
        }
    }

    /// Resolves `key` to a live entity.
    ///
    /// If the stored handle is no longer alive according to `liveness`, the
    /// entry is evicted and `None` is returned.
    pub fn resolve(&mut self, key: &str, liveness: &impl EntityLiveness) -> Option<EntityId> {
        let entity = *self.entries.get(key)?;
        if liveness.is_alive(entity) {
            Some(entity)
        } else {
            self.entries.remove(key);
            log::debug!("Evicted stale entity {} registered as `{}`", entity, key);
            None
        }
    }

    /// Returns the handle stored for `key` without checking its liveness.
    pub fn peek(&self, key: &str) -> Option<EntityId> {
        self.entries.get(key).copied()
    }

    /// Returns `true` if `key` has an entry, live or not.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
