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

//! The metadata component: per-entity records plus the identifier dictionary.

use std::mem;

use entmeta_core::ecs::{ComponentLifecycle, EntityId, EntityLiveness};
use rand::{rngs::StdRng, SeedableRng};

use crate::meta::{
    strip_extension, EntityDictionary, IdentifierFormat, MetaConfig, MetaData, MetaDef,
    MetaResult, MetaStore,
};

/// Owns the metadata of every attached entity and the dictionary resolving
/// identifiers back to entities.
///
/// The component maintains one invariant across all of its operations: a record
/// with a non-empty identifier has exactly one dictionary entry pointing at its
/// entity, and a record without an identifier has none.
///
/// It never creates or destroys entities. The owning framework reports
/// lifecycle events through [`ComponentLifecycle`], and liveness is checked
/// through [`EntityLiveness`] whenever an identifier is resolved.
pub struct MetaComponent {
    store: MetaStore,
    dictionary: EntityDictionary,
    format: IdentifierFormat,
    rng: StdRng,
}

impl MetaComponent {
    /// Creates a component using the default [`MetaConfig`].
    pub fn new() -> Self {
        Self::with_config(&MetaConfig::default())
    }

    /// Creates a component applying `config`.
    pub fn with_config(config: &MetaConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        log::info!("MetaComponent initialized.");
        Self {
            store: MetaStore::new(),
            dictionary: EntityDictionary::new(),
            format: config.identifier_format.clone(),
            rng,
        }
    }

    /// Attaches an empty record to `entity` unless it already has one.
    pub fn attach(&mut self, entity: EntityId) -> &MetaData {
        self.attach_record(entity)
    }

    /// Returns the record of `entity`, if attached.
    pub fn get(&self, entity: EntityId) -> Option<&MetaData> {
        self.store.get(entity)
    }

    /// Returns the record of `entity` for editing its descriptive fields.
    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut MetaData> {
        self.store.get_mut(entity)
    }

    /// Returns the identifier of `entity` without assigning one.
    pub fn identifier(&self, entity: EntityId) -> &str {
        self.store.get(entity).map_or("", MetaData::identifier)
    }

    /// Gives `entity` the identifier `identifier`, attaching a record if needed.
    ///
    /// The entity's previous identifier is unregistered. If another entity held
    /// `identifier`, that entity loses it. An empty `identifier` is ignored.
    pub fn set_identifier(&mut self, entity: EntityId, identifier: &str) -> &MetaData {
        if !identifier.is_empty() {
            self.assign_identifier(entity, identifier);
        }
        self.attach_record(entity)
    }

    /// Applies a decoded record to `entity`, attaching a record if needed.
    ///
    /// Only fields the record supplies with a non-empty value are written.
    pub fn set_from_decoded(&mut self, entity: EntityId, def: &MetaDef) -> &MetaData {
        if let Some(identifier) = def.supplied_entity_id() {
            self.assign_identifier(entity, identifier);
        }

        let data = self.attach_record(entity);
        if let Some(prototype) = def.supplied_prototype() {
            data.prototype = prototype.to_owned();
        }
        if let Some(comment) = def.supplied_comment() {
            data.comment = comment.to_owned();
        }
        data
    }

    /// Applies the record of a prototype to an instance of it.
    ///
    /// Instances keep their own identity, so only the comment is inherited.
    pub fn set_from_prototype(&mut self, entity: EntityId, def: &MetaDef) -> &MetaData {
        let data = self.attach_record(entity);
        if let Some(comment) = def.supplied_comment() {
            data.comment = comment.to_owned();
        }
        data
    }

    /// Records the file `entity` was loaded from, minus its extension.
    pub fn set_source_tag(&mut self, entity: EntityId, path: &str) -> &MetaData {
        let data = self.attach_record(entity);
        data.source_tag = strip_extension(path).to_owned();
        data
    }

    /// Returns the identifier of `entity`, generating and registering one first
    /// if it has none.
    ///
    /// Returns `""` if `entity` has no record.
    pub fn ensure_identifier(&mut self, entity: EntityId) -> &str {
        let Some(data) = self.store.get_mut(entity) else {
            return "";
        };
        if !data.has_identifier() {
            data.identifier = self.format.generate_with(&mut self.rng);
            log::debug!("Generated identifier `{}` for entity {}", data.identifier, entity);
            self.dictionary.register(data.identifier.clone(), entity);
        }
        &data.identifier
    }

    /// Resolves `identifier` to a live entity.
    ///
    /// A dictionary entry whose entity is no longer alive is evicted, together
    /// with the record that entity left behind.
    pub fn resolve(&mut self, identifier: &str, liveness: &impl EntityLiveness) -> Option<EntityId> {
        let candidate = self.dictionary.peek(identifier)?;
        let resolved = self.dictionary.resolve(identifier, liveness);
        if resolved.is_none()
            && self
                .store
                .get(candidate)
                .is_some_and(|data| data.identifier == identifier)
        {
            self.store.remove(candidate);
        }
        resolved
    }

    /// Builds the exportable record of `entity`, assigning an identifier first
    /// if it has none. Returns `None` if `entity` has no record.
    pub fn export_def(&mut self, entity: EntityId) -> Option<MetaDef> {
        self.ensure_identifier(entity);
        self.store.get(entity).map(MetaDef::from_data)
    }

    /// Encodes the record of `entity`. See [`export_def`](Self::export_def).
    pub fn export_raw_data(&mut self, entity: EntityId) -> MetaResult<Option<Vec<u8>>> {
        self.export_def(entity).map(|def| def.to_bytes()).transpose()
    }

    /// Decodes `bytes` and applies the record to `entity`.
    ///
    /// Nothing is attached if `bytes` is not a valid record.
    pub fn add_from_raw_data(&mut self, entity: EntityId, bytes: &[u8]) -> MetaResult<&MetaData> {
        let def = MetaDef::from_bytes(bytes)?;
        Ok(self.set_from_decoded(entity, &def))
    }

    /// Removes the record of `entity` and unregisters its identifier.
    pub fn detach(&mut self, entity: EntityId) -> Option<MetaData> {
        let data = self.store.remove(entity)?;
        if data.has_identifier() {
            self.dictionary.unregister_if_owned(&data.identifier, entity);
        }
        Some(data)
    }

    /// The identifier dictionary, for inspection.
    pub fn dictionary(&self) -> &EntityDictionary {
        &self.dictionary
    }

    /// The format used for generated identifiers.
    pub fn identifier_format(&self) -> &IdentifierFormat {
        &self.format
    }

    /// Iterates over every attached entity and its record.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &MetaData)> + '_ {
        self.store.iter()
    }

    /// Returns the number of attached entities.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no entity is attached.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn attach_record(&mut self, entity: EntityId) -> &mut MetaData {
        if let Some((owner, stale)) = self.store.take_stale(entity) {
            log::debug!("Dropping record of stale entity {}", owner);
            if stale.has_identifier() {
                self.dictionary.unregister_if_owned(&stale.identifier, owner);
            }
        }
        self.store.attach(entity)
    }

    fn assign_identifier(&mut self, entity: EntityId, identifier: &str) {
        let data = self.attach_record(entity);
        if data.identifier != identifier {
            let previous = mem::replace(&mut data.identifier, identifier.to_owned());
            if !previous.is_empty() {
                self.dictionary.unregister_if_owned(&previous, entity);
            }
        }
        self.claim(identifier, entity);
    }

    /// Registers `identifier` for `entity`, taking it away from any other holder.
    fn claim(&mut self, identifier: &str, entity: EntityId) {
        let Some(holder) = self.dictionary.register(identifier, entity) else {
            return;
        };
        if holder == entity {
            return;
        }
        if let Some(data) = self.store.get_mut(holder) {
            if data.identifier == identifier {
                log::warn!(
                    "Identifier `{}` moved from entity {} to entity {}",
                    identifier,
                    holder,
                    entity
                );
                data.identifier.clear();
            }
        }
    }
}

impl Default for MetaComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentLifecycle for MetaComponent {
    fn on_attach(&mut self, entity: EntityId) {
        let identifier = self.attach_record(entity).identifier.clone();
        if !identifier.is_empty() {
            self.claim(&identifier, entity);
        }
    }

    fn on_detach(&mut self, entity: EntityId) {
        self.detach(entity);
    }
}
