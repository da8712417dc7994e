//! # Randid
//!
//! Randid generates random human-readable identifier strings from a
//! configurable pool of character classes.
//!
//! Not a source of secrets: the pseudorandom source is seeded from the
//! clock and is predictable.
//!
#![deny(missing_docs, unused_imports)]
#![deny(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod error;
pub mod generator;
pub mod pool;

pub use error::RandidError;
pub use generator::Generator;
pub use pool::PoolConfig;

use std::sync::LazyLock;

/// Randid Version
pub const RANDID_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process-wide default Generator, with every character class enabled.
/// Initialized on first use.
static DEFAULT_GENERATOR: LazyLock<Generator> = LazyLock::new(Generator::default);

/// Generate a random string of `n` characters using the default Generator
///
/// ```rust
/// let id = randid::generate(10);
///
/// assert_eq!(id.len(), 10);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate(n: usize) -> String {
    DEFAULT_GENERATOR.generate(n)
}

/// Generate a random string of `total_length` characters starting with `prefix`
///
/// The random tail fills the `total_length - prefix.len()` remaining
/// characters. A prefix at least as long as `total_length` is returned
/// unchanged.
///
/// ```rust
/// let id = randid::generate_with_prefix(20, "cust_");
///
/// assert_eq!(id.len(), 20);
/// assert!(id.starts_with("cust_"));
/// ```
pub fn generate_with_prefix(total_length: usize, prefix: &str) -> String {
    DEFAULT_GENERATOR.generate_with_prefix(total_length, prefix)
}
