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

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use envdict::{Cli, Dictionary, GLOBAL_REGISTRY, ReadEnv, Registry, utils::init_logging};

/// Format entries as `key=value` lines sorted by key; flags print without `=`
fn format_entries(dict: &Dictionary) -> Vec<String> {
    let mut entries: Vec<_> = dict.entries().iter().collect();
    entries.sort();

    entries
        .into_iter()
        .map(|(key, value)| {
            if value.is_empty() {
                key.clone()
            } else {
                format!("{key}={value}")
            }
        })
        .collect()
}

/// Resolve the lookup requested on the command line and write the result to `out`
fn run<E: ReadEnv>(cli: &Cli, registry: &Registry<E>, out: &mut impl Write) -> Result<()> {
    let dict = registry.get_dictionary_with(&cli.name, &cli.delimiter);

    if cli.raw {
        let raw = dict.require("")?;
        writeln!(out, "{raw}")?;
        return Ok(());
    }

    if let Some(key) = &cli.key {
        let value = dict
            .require(key)
            .with_context(|| format!("Lookup failed with delimiter '{}'", dict.delimiter()))?;
        writeln!(out, "{value}")?;
        return Ok(());
    }

    if !dict.exists() {
        anyhow::bail!("Environment variable '{}' is not set", dict.name());
    }

    for line in format_entries(&dict) {
        writeln!(out, "{line}")?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    run(&cli, &*GLOBAL_REGISTRY, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use envdict::InMemoryEnv;

    fn registry() -> Registry<InMemoryEnv> {
        let env: InMemoryEnv = [("NS_LOG", "z=1;a=2;flag"), ("EMPTY", "")]
            .into_iter()
            .collect();
        Registry::with_source(env)
    }

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("envdict").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(&cli, &registry(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_format_entries_sorted() {
        let dict = Dictionary::from_value("NS_LOG", Some("z=1;a=2;flag"), ";");
        assert_eq!(format_entries(&dict), vec!["a=2", "flag", "z=1"]);
    }

    #[test]
    fn test_format_entries_empty() {
        let dict = Dictionary::from_value("EMPTY", Some(""), ";");
        assert!(format_entries(&dict).is_empty());
    }

    #[test]
    fn test_run_prints_sorted_entries() {
        assert_eq!(run_args(&["NS_LOG"]).unwrap(), "a=2\nflag\nz=1\n");
    }

    #[test]
    fn test_run_prints_single_value() {
        assert_eq!(run_args(&["NS_LOG", "a"]).unwrap(), "2\n");
        assert_eq!(run_args(&["NS_LOG", "flag"]).unwrap(), "\n");
    }

    #[test]
    fn test_run_prints_raw_value() {
        assert_eq!(run_args(&["--raw", "NS_LOG"]).unwrap(), "z=1;a=2;flag\n");
        assert_eq!(run_args(&["--raw", "EMPTY"]).unwrap(), "\n");
    }

    #[test]
    fn test_run_missing_key_fails() {
        let err = run_args(&["NS_LOG", "missing"]).unwrap_err();
        assert!(format!("{err:#}").contains("has no key 'missing'"));
    }

    #[test]
    fn test_run_unset_variable_fails() {
        let err = run_args(&["UNSET"]).unwrap_err();
        assert!(err.to_string().contains("'UNSET' is not set"));

        assert!(run_args(&["UNSET", "a"]).is_err());
        assert!(run_args(&["--raw", "UNSET"]).is_err());
    }
}
