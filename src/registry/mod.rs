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

//! Cached dictionaries parsed from environment variables
//!
//! A variable such as `NS_LOG="level=debug;prefix_time;node=3"` is read and
//! parsed once into a [`Dictionary`], which the [`Registry`] then hands out to
//! every caller until it is cleared.

mod cache;
mod config;
mod dictionary;
mod global;
pub mod parser;
mod source;
mod stats;

pub use cache::Registry;
pub use config::{DEFAULT_DELIMITER, RegistryConfig};
pub use dictionary::Dictionary;
pub use global::{GLOBAL_REGISTRY, clear, get, get_dictionary, get_dictionary_with, get_with};
pub use source::{InMemoryEnv, ReadEnv, SystemEnv, read_var};
pub use stats::RegistryStats;
