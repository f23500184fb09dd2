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

//! Registry statistics for monitoring and debugging

use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of registry statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Lookups served by an already-built dictionary
    pub hits: u64,
    /// Lookups that built a new dictionary
    pub misses: u64,
    /// Number of times the registry was cleared
    pub clears: u64,
    /// Current number of cached dictionaries
    pub current_entries: usize,
}

impl RegistryStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Live counters.
///
/// Atomics keep the hit path free of exclusive locks.
#[derive(Debug, Default)]
pub(super) struct StatsCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    clears: AtomicU64,
}

impl StatsCounters {
    pub(super) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_clear(&self) {
        self.clears.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn snapshot(&self, current_entries: usize) -> RegistryStats {
        RegistryStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            clears: self.clears.load(Ordering::Relaxed),
            current_entries,
        }
    }
}
