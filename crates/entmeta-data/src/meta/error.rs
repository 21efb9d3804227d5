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

use thiserror::Error;

/// Errors raised by the fallible edges of the metadata subsystem.
///
/// Identity operations themselves never fail; only turning records into bytes,
/// reading them back and loading configuration can.
#[derive(Debug, Error)]
pub enum MetaError {
    /// A record could not be encoded.
    #[error("failed to encode metadata record: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    /// The encoded record exceeds the size a record may have.
    #[error("metadata record is {len} bytes, limit is {limit}")]
    RecordTooLarge {
        /// Encoded length in bytes.
        len: usize,
        /// Maximum accepted length in bytes.
        limit: usize,
    },
    /// The bytes are not a valid metadata record.
    #[error("failed to decode metadata record: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    /// The configuration text could not be parsed.
    #[error("invalid metadata configuration: {0}")]
    Config(#[from] ron::error::SpannedError),
    /// The configuration file could not be read.
    #[error("failed to read metadata configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for metadata operations.
pub type MetaResult<T> = Result<T, MetaError>;
