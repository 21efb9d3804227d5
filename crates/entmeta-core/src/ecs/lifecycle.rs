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

use crate::ecs::EntityId;

/// Hooks a component implements so the owning framework can signal entity
/// lifecycle events to it.
///
/// The component never creates or destroys entities itself; it only reacts to
/// these notifications by allocating or releasing its per-entity data.
pub trait ComponentLifecycle {
    /// Called once the entity has been fully set up, e.g. after its component
    /// data was loaded from a scene.
    fn on_attach(&mut self, entity: EntityId);

    /// Called when the entity is removed from the component or destroyed.
    fn on_detach(&mut self, entity: EntityId);
}
