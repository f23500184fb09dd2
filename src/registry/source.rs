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

//! Sources of environment variables
//!
//! [`SystemEnv`] reads the real process environment. [`InMemoryEnv`] is a
//! stand-in that never touches it, which keeps tests independent of each other.

use std::collections::HashMap;
use std::env;
use std::sync::{PoisonError, RwLock};

/// Read access to a set of environment variables.
///
/// Implementations are shared by a [`Registry`](super::Registry) across
/// threads, hence the `Send + Sync` bound.
pub trait ReadEnv: Send + Sync {
    fn var(&self, key: &str) -> Result<String, env::VarError>;
}

/// Delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

/// Environment held in memory.
///
/// All methods take `&self` so the source can be mutated while a registry
/// holds it.
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn clear(&self) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: RwLock::new(vars),
        }
    }
}

impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .ok_or(env::VarError::NotPresent)
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        (**self).var(key)
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for std::sync::Arc<E> {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        (**self).var(key)
    }
}

/// Read `key` from `source`, mapping absence to `None`.
///
/// A value that is not valid UTF-8 still counts as present; it is converted
/// lossily.
pub fn read_var<E: ReadEnv + ?Sized>(source: &E, key: &str) -> Option<String> {
    match source.var(key) {
        Ok(value) => Some(value),
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(raw)) => {
            tracing::warn!(
                "Environment variable '{}' is not valid UTF-8; using lossy conversion",
                key
            );
            Some(raw.to_string_lossy().into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_system_env_delegation() {
        let std_result = std::env::var("PATH");
        let provider_result = SystemEnv.var("PATH");
        assert_eq!(std_result.is_ok(), provider_result.is_ok());
    }

    #[test]
    fn test_system_env_missing_variable() {
        assert_eq!(read_var(&SystemEnv, "ENVDICT_NONEXISTENT_VAR_12345"), None);
    }

    #[test]
    fn test_in_memory_env_set_and_get() {
        let env = InMemoryEnv::new();
        env.set("TEST_VAR", "test_value");

        assert_eq!(env.var("TEST_VAR").unwrap(), "test_value");
        assert_eq!(read_var(&env, "TEST_VAR").as_deref(), Some("test_value"));
    }

    #[test]
    fn test_in_memory_env_not_present() {
        let env = InMemoryEnv::new();

        assert!(matches!(
            env.var("NONEXISTENT"),
            Err(std::env::VarError::NotPresent)
        ));
        assert_eq!(read_var(&env, "NONEXISTENT"), None);
    }

    #[test]
    fn test_in_memory_env_empty_value_is_present() {
        let env = InMemoryEnv::new();
        env.set("EMPTY", "");

        assert_eq!(read_var(&env, "EMPTY").as_deref(), Some(""));
    }

    #[test]
    fn test_in_memory_env_remove_and_clear() {
        let env: InMemoryEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert!(env.contains("A"));

        env.remove("A");
        assert!(!env.contains("A"));
        assert!(env.contains("B"));

        env.clear();
        assert!(!env.contains("B"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_is_present_and_lossy() {
        use crate::registry::Dictionary;
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        struct NonUnicodeEnv;

        impl ReadEnv for NonUnicodeEnv {
            fn var(&self, _key: &str) -> Result<String, env::VarError> {
                Err(env::VarError::NotUnicode(OsString::from_vec(
                    b"a=\xff;b".to_vec(),
                )))
            }
        }

        assert_eq!(
            read_var(&NonUnicodeEnv, "BINARY").as_deref(),
            Some("a=\u{FFFD};b")
        );

        let dict = Dictionary::from_source(&NonUnicodeEnv, "BINARY", ";");
        assert!(dict.exists());
        assert_eq!(dict.get("a"), Some("\u{FFFD}"));
        assert_eq!(dict.get("b"), Some(""));
        assert_eq!(dict.get(""), Some("a=\u{FFFD};b"));
    }

    #[test]
    fn test_read_var_through_arc() {
        let env = Arc::new(InMemoryEnv::new());
        env.set("SHARED", "yes");

        let shared = Arc::clone(&env);
        assert_eq!(read_var(&shared, "SHARED").as_deref(), Some("yes"));
    }
}
