//! Cached key/value dictionaries parsed from environment variables.
//!
//! An environment variable holding `key=value` tokens separated by a
//! delimiter (`;` by default) is read once, parsed into a [`Dictionary`] and
//! shared from then on:
//!
//! ```
//! use envdict::{InMemoryEnv, Registry};
//!
//! let env = InMemoryEnv::new();
//! env.set("NS_LOG", "level=debug;prefix_time");
//! let registry = Registry::with_source(env);
//!
//! assert_eq!(registry.get("NS_LOG", "level").as_deref(), Some("debug"));
//! assert_eq!(registry.get("NS_LOG", "prefix_time").as_deref(), Some(""));
//! assert_eq!(registry.get("NS_LOG", "").as_deref(), Some("level=debug;prefix_time"));
//! assert_eq!(registry.get("NS_LOG", "missing"), None);
//! ```
//!
//! The free functions [`get`], [`get_dictionary`] and [`clear`] do the same
//! against a process-wide [`Registry`] over the real environment.
//!
//! The delimiter given on the first access for a variable is the one used
//! until [`clear`] is called; later delimiters are ignored.

pub mod cli;
pub mod error;
pub mod registry;
pub mod utils;

pub use cli::Cli;
pub use error::EnvDictError;
pub use registry::{
    Dictionary, GLOBAL_REGISTRY, InMemoryEnv, ReadEnv, Registry, RegistryConfig, RegistryStats,
    SystemEnv, clear, get, get_dictionary, get_dictionary_with, get_with,
};
