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

//! Process-wide registry instance and the accessor functions over it

use once_cell::sync::Lazy;
use std::sync::Arc;

use super::cache::Registry;
use super::config::RegistryConfig;
use super::dictionary::Dictionary;

/// Global dictionary registry over the process environment
pub static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let config = RegistryConfig::default();

    tracing::debug!(
        "Initializing environment dictionary registry with default delimiter '{}'",
        config.default_delimiter
    );

    Registry::with_config(config)
});

/// Get the dictionary for `name` from the global registry, parsed with `;` on
/// first access
pub fn get_dictionary(name: &str) -> Arc<Dictionary> {
    GLOBAL_REGISTRY.get_dictionary(name)
}

/// Get the dictionary for `name` from the global registry.
///
/// `delimiter` only matters on the first access for `name`; afterwards the
/// cached dictionary is returned regardless.
pub fn get_dictionary_with(name: &str, delimiter: &str) -> Arc<Dictionary> {
    GLOBAL_REGISTRY.get_dictionary_with(name, delimiter)
}

/// Look up `key` in environment variable `name`. The empty key returns the
/// whole value.
pub fn get(name: &str, key: &str) -> Option<String> {
    GLOBAL_REGISTRY.get(name, key)
}

/// Look up `key` in environment variable `name`, split on `delimiter` if this
/// is the first access for `name`
pub fn get_with(name: &str, key: &str, delimiter: &str) -> Option<String> {
    GLOBAL_REGISTRY.get_with(name, key, delimiter)
}

/// Drop every dictionary in the global registry so the next access re-reads
/// the environment
pub fn clear() {
    GLOBAL_REGISTRY.clear();
}
