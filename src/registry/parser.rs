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

//! Tokenizer for delimiter-separated `key[=value]` strings
//!
//! A value such as `A=1;B=2;FLAG` is split on the delimiter first and each
//! non-empty segment is then split at its first `=`. Because the delimiter split
//! happens before the `=` search, a value can never contain the delimiter.

use std::collections::HashMap;

/// Separator between a key and its value inside one segment. Not configurable.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Split a single segment into `(key, value)`.
///
/// `key=value` splits at the first `=`, so `a=b=c` yields `("a", "b=c")`.
/// A segment without `=` is a bare flag and yields an empty value.
pub fn split_entry(segment: &str) -> (&str, &str) {
    segment
        .split_once(KEY_VALUE_SEPARATOR)
        .unwrap_or((segment, ""))
}

/// Iterate over the non-empty segments of `raw`.
///
/// An empty delimiter cannot separate anything, so the whole value is
/// treated as one segment.
pub fn segments<'a>(raw: &'a str, delimiter: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let (split, whole) = if delimiter.is_empty() {
        (None, Some(raw))
    } else {
        (Some(raw.split(delimiter)), None)
    };

    split
        .into_iter()
        .flatten()
        .chain(whole)
        .filter(|s| !s.is_empty())
}

/// Parse `raw` into a key/value map.
///
/// Consecutive delimiters produce empty segments which are skipped. When a key
/// occurs more than once the last occurrence wins.
pub fn parse_entries(raw: &str, delimiter: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();

    for segment in segments(raw, delimiter) {
        let (key, value) = split_entry(segment);
        tracing::trace!("Parsed token: key '{}', value '{}'", key, value);
        entries.insert(key.to_string(), value.to_string());
    }

    entries
}
