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

//! The metadata component and its supporting pieces.
//!
//! Leaves first: the [`IdentifierFormat`] generator, the [`MetaDef`] binary
//! record, the per-entity [`MetaStore`], the [`EntityDictionary`] reverse
//! lookup, and the [`MetaComponent`] façade that keeps the store and the
//! dictionary consistent with each other.

mod codec;
mod component;
mod config;
mod dictionary;
mod error;
mod identifier;
mod record;
mod store;

pub use codec::{MetaDef, MAX_RECORD_LEN};
pub use component::MetaComponent;
pub use config::MetaConfig;
pub use dictionary::EntityDictionary;
pub use error::{MetaError, MetaResult};
pub use identifier::IdentifierFormat;
pub use record::{strip_extension, MetaData};
pub use store::MetaStore;
