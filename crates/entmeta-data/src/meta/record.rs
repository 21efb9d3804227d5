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

/// The metadata attached to a single entity.
///
/// Empty strings mean "not set". The `identifier` is only ever written through
/// [`MetaComponent`](crate::meta::MetaComponent), which keeps it in sync with
/// the [`EntityDictionary`](crate::meta::EntityDictionary).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaData {
    pub(crate) identifier: String,
    /// Name of the prototype this entity was instantiated from.
    pub prototype: String,
    /// Free-text annotation. Has no effect on behavior.
    pub comment: String,
    /// The file the entity was loaded from, without its extension.
    pub source_tag: String,
}

impl MetaData {
    /// The entity's identifier, or `""` if none was assigned yet.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns `true` if an identifier was assigned.
    pub fn has_identifier(&self) -> bool {
        !self.identifier.is_empty()
    }
}

/// Removes the last `.`-delimited suffix of `path`.
///
/// Only the last `.` in the whole string counts, so `"a.b/c"` becomes `"a"`.
/// Strings without a `.` are returned unchanged.
pub fn strip_extension(path: &str) -> &str {
    match path.rfind('.') {
        Some(ext) => &path[..ext],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("assets/tree.fbx"), "assets/tree");
        assert_eq!(strip_extension("noext"), "noext");
        assert_eq!(strip_extension("scene.backup.bin"), "scene.backup");
        assert_eq!(strip_extension(".hidden"), "");
        assert_eq!(strip_extension(""), "");
    }

    #[test]
    fn test_default_record_is_empty() {
        let data = MetaData::default();
        assert!(!data.has_identifier());
        assert_eq!(data.identifier(), "");
        assert!(data.prototype.is_empty() && data.comment.is_empty() && data.source_tag.is_empty());
    }
}
