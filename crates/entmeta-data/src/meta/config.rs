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

//! Runtime configuration for the metadata component, stored as RON.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::meta::{IdentifierFormat, MetaResult};

/// Settings applied when a [`MetaComponent`](crate::meta::MetaComponent) is built.
///
/// Every field is optional in the RON text; missing fields take their defaults.
///
/// ```ron
/// (
///     identifier_format: (marker: '$', separator: '-', separator_every: 5, digit_count: 16),
///     seed: Some(1234),
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaConfig {
    /// Shape of lazily generated identifiers.
    pub identifier_format: IdentifierFormat,
    /// Fixed seed for identifier generation. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl MetaConfig {
    /// Parses a configuration from RON text.
    pub fn from_ron_str(text: &str) -> MetaResult<Self> {
        Ok(ron::from_str(text)?)
    }

    /// Reads and parses a RON configuration file.
    pub fn from_ron_file(path: impl AsRef<Path>) -> MetaResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded metadata config from {}", path.as_ref().display());
        Self::from_ron_str(&text)
    }
}
