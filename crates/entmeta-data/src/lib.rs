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

//! # Entmeta Data
//!
//! Per-entity metadata for the ECS: a stable, human-referenceable identifier,
//! a prototype name, a free-text comment and the source file an entity came
//! from, plus the dictionary that resolves identifiers back to live entities.
//!
//! The primary entry point is [`meta::MetaComponent`].

#![warn(missing_docs)]

pub mod meta;
