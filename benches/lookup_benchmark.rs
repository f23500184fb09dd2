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

//! Benchmarks for dictionary lookups
//!
//! Compares cached lookups through a registry against building a fresh
//! dictionary on every call, for values of increasing token count.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use envdict::{Dictionary, InMemoryEnv, Registry};
use std::hint::black_box;

fn make_value(tokens: usize) -> String {
    (0..tokens)
        .map(|i| {
            if i % 4 == 0 {
                format!("flag{i}")
            } else {
                format!("key{i}=value{i}")
            }
        })
        .collect::<Vec<_>>()
        .join(";")
}

/// Benchmark lookups served from the registry cache
fn bench_cached_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_lookup");

    for tokens in [4usize, 64, 1024] {
        let env = InMemoryEnv::new();
        env.set("BENCH_VAR", make_value(tokens));
        let registry = Registry::with_source(env);
        let key = format!("key{}", tokens - 1);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("registry", tokens), &key, |b, key| {
            b.iter(|| black_box(registry.get(black_box("BENCH_VAR"), black_box(key))));
        });
    }

    group.finish();
}

/// Benchmark parsing a fresh dictionary for every lookup
fn bench_uncached_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncached_parse");

    for tokens in [4usize, 64, 1024] {
        let value = make_value(tokens);
        let key = format!("key{}", tokens - 1);

        group.throughput(Throughput::Bytes(value.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", tokens), &value, |b, value| {
            b.iter(|| {
                let value = black_box(value.as_str());
                let dict = Dictionary::from_value("BENCH_VAR", Some(value), ";");
                black_box(dict.get(&key).map(str::len))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cached_lookup, bench_uncached_parse);
criterion_main!(benches);
