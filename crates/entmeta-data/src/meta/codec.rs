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

//! The exported binary form of an entity's metadata.

use bincode::{
    config::{Configuration, Limit, LittleEndian, Varint},
    error::DecodeError,
};
use serde::{Deserialize, Serialize};

use crate::meta::{MetaData, MetaError, MetaResult};

/// Upper bound in bytes of an encoded record.
pub const MAX_RECORD_LEN: usize = 64 * 1024;

type RecordConfig = Configuration<LittleEndian, Varint, Limit<MAX_RECORD_LEN>>;

fn record_config() -> RecordConfig {
    bincode::config::standard().with_limit::<MAX_RECORD_LEN>()
}

/// The serialized view of a [`MetaData`] record.
///
/// Every field is optional so that a missing field ("nothing supplied") stays
/// distinguishable from a field holding an empty string. The source tag is not
/// part of the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaDef {
    /// The entity identifier. Always written on export.
    pub entity_id: Option<String>,
    /// The prototype name, written only when set.
    pub prototype: Option<String>,
    /// The comment, written only when set.
    pub comment: Option<String>,
}

impl MetaDef {
    /// Builds the exported view of `data`, leaving empty fields out.
    ///
    /// An empty identifier is left out as well; the component assigns one
    /// before exporting, so this only happens for detached records.
    pub fn from_data(data: &MetaData) -> Self {
        Self {
            entity_id: non_empty(data.identifier()),
            prototype: non_empty(&data.prototype),
            comment: non_empty(&data.comment),
        }
    }

    /// Encodes the record with the standard bincode configuration.
    ///
    /// Records longer than [`MAX_RECORD_LEN`] are rejected, since they could
    /// not be decoded again.
    pub fn to_bytes(&self) -> MetaResult<Vec<u8>> {
        let bytes = bincode::serde::encode_to_vec(self, record_config())?;
        if bytes.len() > MAX_RECORD_LEN {
            return Err(MetaError::RecordTooLarge {
                len: bytes.len(),
                limit: MAX_RECORD_LEN,
            });
        }
        Ok(bytes)
    }

    /// Decodes a record produced by [`to_bytes`](Self::to_bytes).
    ///
    /// A record without an identifier decodes fine with `entity_id: None`.
    /// Truncated or corrupted input, length prefixes beyond [`MAX_RECORD_LEN`]
    /// and bytes trailing the record yield [`MetaError::Decode`].
    pub fn from_bytes(bytes: &[u8]) -> MetaResult<Self> {
        let (def, read): (Self, usize) =
            bincode::serde::decode_from_slice(bytes, record_config())?;
        if read != bytes.len() {
            return Err(DecodeError::OtherString(format!(
                "{} trailing bytes after metadata record",
                bytes.len() - read
            ))
            .into());
        }
        Ok(def)
    }

    /// The identifier, if one was supplied and is not empty.
    pub fn supplied_entity_id(&self) -> Option<&str> {
        supplied(&self.entity_id)
    }

    /// The prototype name, if one was supplied and is not empty.
    pub fn supplied_prototype(&self) -> Option<&str> {
        supplied(&self.prototype)
    }

    /// The comment, if one was supplied and is not empty.
    pub fn supplied_comment(&self) -> Option<&str> {
        supplied(&self.comment)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
