// Copyright 2025 Lablup Inc. and Jeongkyu Shin
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

//! Configuration for the dictionary registry

/// Delimiter used when a caller does not pass one
pub const DEFAULT_DELIMITER: &str = ";";

/// Configuration for a [`Registry`](super::Registry)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Delimiter used by `get_dictionary` and `get` (default: `;`)
    pub default_delimiter: String,
}

impl RegistryConfig {
    pub fn with_default_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            default_delimiter: delimiter.into(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}
