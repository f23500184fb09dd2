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

//! Error type for strict lookups.
//!
//! Ordinary lookups never fail: a missing variable or key is reported as
//! `None`. [`EnvDictError`] exists for callers that prefer to propagate a
//! missing value with `?`, see [`Dictionary::require`](crate::Dictionary::require)
//! and [`Registry::require`](crate::Registry::require).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvDictError {
    /// The variable was not present in the environment when it was first read
    #[error("environment variable '{name}' is not set")]
    VariableNotSet { name: String },

    /// The variable is set but has no entry for the key
    #[error("environment variable '{name}' has no key '{key}'")]
    KeyNotFound { name: String, key: String },
}

pub type Result<T> = std::result::Result<T, EnvDictError>;
