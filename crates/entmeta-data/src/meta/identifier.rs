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

//! Random entity identifiers such as `$3f2a-09bc-e771-4d05`.

use rand::Rng;
use serde::{Deserialize, Serialize};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// The shape of a generated entity identifier.
///
/// A generated identifier is the `marker` followed by `digit_count` lowercase
/// hex digits. Counting the marker as position 0, every position that is a
/// multiple of `separator_every` holds the `separator` instead of a digit.
/// With the defaults this yields `$xxxx-xxxx-xxxx-xxxx`.
///
/// Generation does not consult existing identifiers. With 64 random bits the
/// odds of a collision are negligible, and a lookup per generated id would cost
/// more than it saves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierFormat {
    /// Leading character marking the string as a generated identifier.
    pub marker: char,
    /// Character inserted between digit groups.
    pub separator: char,
    /// Position stride of the separators. Values below 2 disable them.
    pub separator_every: usize,
    /// Number of random hex digits.
    pub digit_count: usize,
}

impl Default for IdentifierFormat {
    fn default() -> Self {
        Self {
            marker: '$',
            separator: '-',
            separator_every: 5,
            digit_count: 16,
        }
    }
}

impl IdentifierFormat {
    /// Generates an identifier using the thread-local random source.
    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generates an identifier drawing each digit from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut id = String::with_capacity(self.generated_len());
        id.push(self.marker);

        let mut remaining = self.digit_count;
        let mut position = 1;
        while remaining > 0 {
            if self.is_separator_position(position) {
                id.push(self.separator);
            } else {
                id.push(HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char);
                remaining -= 1;
            }
            position += 1;
        }
        id
    }

    /// The length in characters of every identifier this format generates.
    pub fn generated_len(&self) -> usize {
        let separators = match (self.digit_count, self.separator_every) {
            (0, _) | (_, 0..=1) => 0,
            (digits, every) => (digits - 1) / (every - 1),
        };
        1 + self.digit_count + separators
    }

    /// Returns `true` if `candidate` has exactly the shape this format generates.
    pub fn matches(&self, candidate: &str) -> bool {
        let mut chars = candidate.chars();
        if chars.next() != Some(self.marker) {
            return false;
        }

        let mut digits = 0;
        for (offset, c) in chars.enumerate() {
            let position = offset + 1;
            let valid = if self.is_separator_position(position) {
                c == self.separator
            } else {
                digits += 1;
                matches!(c, '0'..='9' | 'a'..='f')
            };
            if !valid || digits > self.digit_count {
                return false;
            }
        }
        digits == self.digit_count && candidate.chars().count() == self.generated_len()
    }

    fn is_separator_position(&self, position: usize) -> bool {
        self.separator_every > 1 && position % self.separator_every == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_default_layout() {
        let format = IdentifierFormat::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..256 {
            let id = format.generate_with(&mut rng);

            assert_eq!(id.len(), 20, "`{id}` should be `$xxxx-xxxx-xxxx-xxxx`");
            assert!(id.starts_with('$'));
            for (i, c) in id.char_indices().skip(1) {
                if i % 5 == 0 {
                    assert_eq!(c, '-', "separator expected at {i} in `{id}`");
                } else {
                    assert!(c.is_ascii_hexdigit() && !c.is_ascii_uppercase());
                }
            }
            assert!(format.matches(&id));
        }
    }

    #[test]
    fn test_generated_len_is_independent_of_randomness() {
        let format = IdentifierFormat::default();
        assert_eq!(format.generated_len(), 20);
        assert_eq!(format.generate().len(), format.generated_len());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let format = IdentifierFormat::default();
        let a = format.generate_with(&mut StdRng::seed_from_u64(42));
        let b = format.generate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_format() {
        let format = IdentifierFormat {
            marker: '#',
            separator: '_',
            separator_every: 3,
            digit_count: 6,
        };
        let id = format.generate_with(&mut StdRng::seed_from_u64(1));

        // #xx_xx_xx
        assert_eq!(format.generated_len(), 9);
        assert_eq!(id.len(), 9);
        assert_eq!(&id[3..4], "_");
        assert_eq!(&id[6..7], "_");
        assert!(format.matches(&id));
    }

    #[test]
    fn test_separators_disabled() {
        let format = IdentifierFormat {
            separator_every: 0,
            ..Default::default()
        };
        let id = format.generate_with(&mut StdRng::seed_from_u64(3));

        assert_eq!(id.len(), 17);
        assert!(!id.contains('-'));
    }

    #[test]
    fn test_matches_rejects_foreign_strings() {
        let format = IdentifierFormat::default();

        assert!(format.matches("$abcd-1234-5678-9abc"));
        assert!(!format.matches("abcd-1234-5678-9abc"));
        assert!(!format.matches("$ABCD-1234-5678-9abc"));
        assert!(!format.matches("$abcd-1234-5678-9ab"));
        assert!(!format.matches("$abcd-1234-5678-9abcd"));
        assert!(!format.matches("$abcd12345678-9abc"));
        assert!(!format.matches("player_one"));
    }
}
