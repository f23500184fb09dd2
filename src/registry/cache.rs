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

//! Core caching logic mapping variable names to parsed dictionaries

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::config::RegistryConfig;
use super::dictionary::Dictionary;
use super::source::{ReadEnv, SystemEnv};
use super::stats::{RegistryStats, StatsCounters};
use crate::error::Result;

/// Thread-safe cache of parsed environment variables.
///
/// Each variable name is read and parsed at most once between calls to
/// [`clear`](Self::clear). The delimiter passed on that first access is
/// permanent: later calls for the same name with a different delimiter get the
/// dictionary that was already built and their delimiter is ignored.
///
/// Lookups of an already-cached name only take a shared lock. Building a new
/// dictionary happens under the exclusive lock, so concurrent first accesses
/// for one name build it exactly once.
pub struct Registry<E = SystemEnv> {
    /// Parsed dictionaries by variable name
    dictionaries: RwLock<HashMap<String, Arc<Dictionary>>>,
    /// Where variables are read from
    source: E,
    /// Registry configuration
    config: RegistryConfig,
    /// Registry statistics
    stats: StatsCounters,
}

impl Registry<SystemEnv> {
    /// Create a registry over the process environment with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a registry over the process environment with custom configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self::with_config_and_source(config, SystemEnv)
    }
}

impl<E: ReadEnv> Registry<E> {
    /// Create a registry reading variables from `source`
    pub fn with_source(source: E) -> Self {
        Self::with_config_and_source(RegistryConfig::default(), source)
    }

    pub fn with_config_and_source(config: RegistryConfig, source: E) -> Self {
        Self {
            dictionaries: RwLock::new(HashMap::new()),
            source,
            config,
            stats: StatsCounters::default(),
        }
    }

    /// Get the dictionary for `name`, parsed with the default delimiter on
    /// first access
    pub fn get_dictionary(&self, name: &str) -> Arc<Dictionary> {
        self.get_dictionary_with(name, &self.config.default_delimiter)
    }

    /// Get the dictionary for `name`, building it with `delimiter` if this is
    /// the first access.
    ///
    /// On a cache hit `delimiter` is ignored and the existing dictionary is
    /// returned as is, even if it was parsed with a different delimiter. Call
    /// [`clear`](Self::clear) first to re-parse.
    pub fn get_dictionary_with(&self, name: &str, delimiter: &str) -> Arc<Dictionary> {
        if let Some(dict) = self.read().get(name) {
            self.record_hit(dict, delimiter);
            return Arc::clone(dict);
        }

        let mut dictionaries = self.write();
        // Another thread may have built it between the two locks
        match dictionaries.entry(name.to_string()) {
            Entry::Occupied(entry) => {
                self.record_hit(entry.get(), delimiter);
                Arc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                tracing::trace!("Environment dictionary cache miss: {}", name);
                let dict = Arc::new(Dictionary::from_source(&self.source, name, delimiter));
                self.stats.record_miss();
                Arc::clone(entry.insert(dict))
            }
        }
    }

    /// Look up `key` in the dictionary for `name` (default delimiter).
    ///
    /// The empty key returns the whole unparsed value.
    pub fn get(&self, name: &str, key: &str) -> Option<String> {
        self.get_dictionary(name).get(key).map(str::to_string)
    }

    /// Look up `key` in the dictionary for `name`, building it with
    /// `delimiter` if this is the first access. See
    /// [`get_dictionary_with`](Self::get_dictionary_with) for how `delimiter`
    /// is treated on a cache hit.
    pub fn get_with(&self, name: &str, key: &str, delimiter: &str) -> Option<String> {
        self.get_dictionary_with(name, delimiter)
            .get(key)
            .map(str::to_string)
    }

    /// Like [`get`](Self::get), but reports a miss as an error
    pub fn require(&self, name: &str, key: &str) -> Result<String> {
        self.get_dictionary(name).require(key).map(str::to_string)
    }

    /// Drop every cached dictionary.
    ///
    /// The next access for any name reads the environment again and parses it
    /// with the delimiter given at that time.
    pub fn clear(&self) {
        let mut dictionaries = self.write();
        let removed = dictionaries.len();
        dictionaries.clear();
        self.stats.record_clear();

        tracing::debug!(
            "Environment dictionary cache cleared ({} entries removed)",
            removed
        );
    }

    /// Whether a dictionary for `name` is currently cached
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Get current registry statistics
    pub fn stats(&self) -> RegistryStats {
        self.stats.snapshot(self.len())
    }

    /// Get registry configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Get a readable summary of every cached dictionary (for debugging)
    pub fn debug_info(&self) -> HashMap<String, String> {
        self.read()
            .iter()
            .map(|(name, dict)| {
                let info = format!(
                    "Exists: {}, Delimiter: {:?}, Entries: {}, Shared: {}",
                    dict.exists(),
                    dict.delimiter(),
                    dict.len(),
                    Arc::strong_count(dict)
                );
                (name.clone(), info)
            })
            .collect()
    }

    fn record_hit(&self, dict: &Dictionary, delimiter: &str) {
        self.stats.record_hit();
        if dict.delimiter() != delimiter {
            tracing::debug!(
                "Environment dictionary '{}' was parsed with delimiter '{}'; ignoring requested delimiter '{}'",
                dict.name(),
                dict.delimiter(),
                delimiter
            );
        } else {
            tracing::trace!("Environment dictionary cache hit: {}", dict.name());
        }
    }

    // The map is only changed by single insert/clear calls, so a poisoned
    // lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Dictionary>>> {
        self.dictionaries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Dictionary>>> {
        self.dictionaries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry<SystemEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self
            .dictionaries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        f.debug_struct("Registry")
            .field("names", &names)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
