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

use clap::Parser;

use crate::registry::DEFAULT_DELIMITER;

#[derive(Parser, Debug)]
#[command(
    name = "envdict",
    version,
    about = "Inspect how an environment variable parses into a key/value dictionary",
    long_about = "envdict reads a delimiter-separated environment variable such as\n  NS_LOG=\"level=debug;prefix_time;node=3\"\nand prints the dictionary it parses into, or the value of a single key.\nTokens are 'key' (a flag with an empty value) or 'key=value'; empty tokens are skipped\nand the last occurrence of a repeated key wins.",
    after_help = "EXAMPLES:\n  Print every entry:            envdict NS_LOG\n  Print one value:              envdict NS_LOG level\n  Split on commas:              envdict -d , FEATURES\n  Print the unparsed value:     envdict --raw NS_LOG"
)]
pub struct Cli {
    #[arg(help = "Name of the environment variable")]
    pub name: String,

    #[arg(help = "Key to look up; prints every entry when omitted")]
    pub key: Option<String>,

    #[arg(
        short = 'd',
        long,
        default_value = DEFAULT_DELIMITER,
        help = "Delimiter between tokens"
    )]
    pub delimiter: String,

    #[arg(
        long,
        conflicts_with = "key",
        help = "Print the unparsed value of the variable"
    )]
    pub raw: bool,

    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,
}
