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

//! Parsed view of a single environment variable

use std::collections::HashMap;

use super::parser;
use super::source::{self, ReadEnv, SystemEnv};
use crate::error::{EnvDictError, Result};

/// Key/value dictionary parsed from one environment variable.
///
/// The variable is read exactly once, when the dictionary is built, and the
/// dictionary never changes afterwards. Its value is expected to look like
/// `key1=value1;flag;key2=value2`:
///
/// - tokens are separated by the delimiter (`;` by default) and empty tokens
///   are skipped;
/// - a token is split at its first `=`; a token without `=` is a flag whose
///   value is the empty string;
/// - when a key repeats, the last token wins.
///
/// Values cannot contain the delimiter, since tokens are split on the
/// delimiter before `=` is looked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    name: String,
    delimiter: String,
    exists: bool,
    raw_value: String,
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Build the dictionary for `name` from the process environment
    pub fn new(name: &str, delimiter: &str) -> Self {
        Self::from_source(&SystemEnv, name, delimiter)
    }

    /// Build the dictionary for `name` by reading it from `source`
    pub fn from_source<E: ReadEnv + ?Sized>(source: &E, name: &str, delimiter: &str) -> Self {
        let value = source::read_var(source, name);
        Self::from_value(name, value.as_deref(), delimiter)
    }

    /// Build the dictionary from a value that has already been read.
    ///
    /// `None` means the variable is absent, which is not an error: the
    /// dictionary is empty and every lookup misses.
    pub fn from_value(name: &str, value: Option<&str>, delimiter: &str) -> Self {
        let Some(raw) = value else {
            tracing::debug!("Environment variable '{}' is not set", name);
            return Self {
                name: name.to_string(),
                delimiter: delimiter.to_string(),
                exists: false,
                raw_value: String::new(),
                entries: HashMap::new(),
            };
        };

        let entries = parser::parse_entries(raw, delimiter);
        tracing::debug!(
            "Parsed environment variable '{}' with delimiter '{}': {} entries",
            name,
            delimiter,
            entries.len()
        );

        Self {
            name: name.to_string(),
            delimiter: delimiter.to_string(),
            exists: true,
            raw_value: raw.to_string(),
            entries,
        }
    }

    /// Look up `key`.
    ///
    /// The empty key returns the whole unparsed value. If the variable was
    /// not set, every key misses, including the empty one.
    pub fn get(&self, key: &str) -> Option<&str> {
        if !self.exists {
            return None;
        }

        if key.is_empty() {
            return Some(&self.raw_value);
        }

        self.entries.get(key).map(String::as_str)
    }

    /// Like [`get`](Self::get), but reports a miss as an error
    pub fn require(&self, key: &str) -> Result<&str> {
        if !self.exists {
            return Err(EnvDictError::VariableNotSet {
                name: self.name.clone(),
            });
        }

        self.get(key).ok_or_else(|| EnvDictError::KeyNotFound {
            name: self.name.clone(),
            key: key.to_string(),
        })
    }

    /// All parsed entries
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Delimiter the value was split with
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Whether the variable was present when the dictionary was built
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Verbatim value; empty when the variable was not set
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
