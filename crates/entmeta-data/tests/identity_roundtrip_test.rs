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

use entmeta_core::ecs::{ComponentLifecycle, EntityLiveness, EntityStore};
use entmeta_data::meta::{MetaComponent, MetaConfig, MetaDef};

#[test]
fn test_scene_metadata_survives_save_and_reload() {
    // --- 1. ARRANGE ---
    // Build a small "scene": one named entity, one prototype instance and one
    // anonymous entity that only gets an identifier when exported.
    let mut entities = EntityStore::new();
    let mut meta = MetaComponent::with_config(&MetaConfig {
        seed: Some(11),
        ..Default::default()
    });

    let gate = entities.create_entity();
    meta.set_identifier(gate, "north_gate");
    meta.get_mut(gate).unwrap().comment = "opens at dawn".to_string();

    let tree_prototype = MetaDef {
        entity_id: Some("tree_template".to_string()),
        prototype: None,
        comment: Some("generic tree".to_string()),
    };
    let tree = entities.create_entity();
    meta.set_from_prototype(tree, &tree_prototype);
    meta.get_mut(tree).unwrap().prototype = "Tree".to_string();

    let rock = entities.create_entity();
    meta.set_source_tag(rock, "levels/valley.scene");

    // --- 2. ACT ---
    // Save every entity, tear the scene down, then load it into a fresh world.
    let saved: Vec<Vec<u8>> = [gate, tree, rock]
        .into_iter()
        .map(|entity| meta.export_raw_data(entity).unwrap().unwrap())
        .collect();
    let saved_ids: Vec<String> = [gate, tree, rock]
        .into_iter()
        .map(|entity| meta.identifier(entity).to_string())
        .collect();

    for entity in [gate, tree, rock] {
        meta.on_detach(entity);
        entities.despawn(entity);
    }
    assert!(meta.is_empty());
    assert!(meta.dictionary().is_empty());

    let mut reloaded_world = EntityStore::new();
    let mut reloaded = MetaComponent::new();
    let mut spawned = Vec::new();
    for bytes in &saved {
        let entity = reloaded_world.create_entity();
        reloaded.add_from_raw_data(entity, bytes).unwrap();
        reloaded.on_attach(entity);
        spawned.push(entity);
    }

    // --- 3. ASSERT ---
    for (identifier, entity) in saved_ids.iter().zip(&spawned) {
        assert!(!identifier.is_empty(), "Every exported entity has an identifier");
        assert_eq!(reloaded.resolve(identifier, &reloaded_world), Some(*entity));
    }

    let gate_data = reloaded.get(spawned[0]).unwrap();
    assert_eq!(gate_data.identifier(), "north_gate");
    assert_eq!(gate_data.comment, "opens at dawn");

    let tree_data = reloaded.get(spawned[1]).unwrap();
    assert_ne!(tree_data.identifier(), "tree_template");
    assert_eq!(tree_data.prototype, "Tree");
    assert_eq!(tree_data.comment, "generic tree");

    let rock_data = reloaded.get(spawned[2]).unwrap();
    assert!(reloaded.identifier_format().matches(rock_data.identifier()));
    assert_eq!(rock_data.source_tag, "", "The source tag is never exported");
}

#[test]
fn test_destroyed_entities_stop_resolving() {
    let mut entities = EntityStore::new();
    let mut meta = MetaComponent::new();

    let handles: Vec<_> = (0..8).map(|_| entities.create_entity()).collect();
    let ids: Vec<String> = handles
        .iter()
        .map(|&entity| {
            meta.attach(entity);
            meta.ensure_identifier(entity).to_string()
        })
        .collect();

    // Destroy every other entity without telling the component.
    for entity in handles.iter().step_by(2) {
        entities.despawn(*entity);
    }

    for (i, (id, entity)) in ids.iter().zip(&handles).enumerate() {
        let resolved = meta.resolve(id, &entities);
        if i % 2 == 0 {
            assert_eq!(resolved, None);
            assert!(!entities.is_alive(*entity));
        } else {
            assert_eq!(resolved, Some(*entity));
        }
    }
    assert_eq!(meta.dictionary().len(), 4);
    assert_eq!(meta.len(), 4);
}
