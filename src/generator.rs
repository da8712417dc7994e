//! # Random String Generator
//!
//! A [`Generator`] owns a resolved character pool and a seeded
//! pseudorandom source. Output characters are drawn independently and
//! uniformly from the pool.
//!
//! Instead of one call into the source per character, the generator draws
//! 63 random bits at a time and slices them into 6-bit pool indices.
//! Indices beyond the pool size are rejected, leaving the accepted ones
//! uniform. One draw covers up to 10 output characters, which keeps
//! contention on the shared source low.

use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::pool::PoolConfig;

/// Bits per pool index. A 6-bit index addresses pools of up to 64
/// symbols; the full built-in pool has 62.
const IDX_BITS: u32 = 6;
/// Low `IDX_BITS` bits set
const IDX_MASK: u64 = (1 << IDX_BITS) - 1;
/// Pool indices fitting in one 63-bit draw
const IDX_PER_DRAW: u32 = 63 / IDX_BITS;

/// Random string Generator
///
/// Safe to share across threads: the pseudorandom source sits behind a
/// `Mutex` which one call holds for its entire fill loop, so concurrent
/// callers cannot interleave draws. Distinct instances are fully
/// independent and carry their own source.
///
/// ```rust
/// use randid::{Generator, PoolConfig};
///
/// let generator = Generator::new(PoolConfig::default().without_lowercase().without_digits());
/// let id = generator.generate(10);
///
/// assert_eq!(id.len(), 10);
/// assert!(id.chars().all(|c| c.is_ascii_uppercase()));
/// ```
#[derive(Debug)]
pub struct Generator {
    alphabet: String,
    source: Mutex<SmallRng>,
}

impl Generator {
    /// Create a new Generator for the given pool configuration
    ///
    /// The pseudorandom source is seeded from a nanosecond wall-clock
    /// reading taken at construction time, so instances created at
    /// different moments draw from different streams.
    pub fn new(config: PoolConfig) -> Self {
        let alphabet = config.alphabet();
        debug!("Creating Generator with a {} symbol pool", alphabet.len());
        Self {
            alphabet,
            source: Mutex::new(SmallRng::seed_from_u64(nano_seed())),
        }
    }

    /// The resolved character pool of this Generator
    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    /// Generate a random string of `n` characters
    ///
    /// Every character is drawn independently and uniformly from the
    /// pool. An empty pool (every class excluded) yields an empty string
    /// whatever `n` is.
    ///
    /// ```rust
    /// let generator = randid::Generator::default();
    /// let id = generator.generate(24);
    ///
    /// assert_eq!(id.len(), 24);
    /// ```
    pub fn generate(&self, n: usize) -> String {
        let pool = self.alphabet.as_bytes();
        if pool.is_empty() {
            return String::new();
        }

        let mut buffer = vec![0u8; n];
        // A poisoned source still holds a usable state
        let mut source = self.source.lock().unwrap_or_else(PoisonError::into_inner);

        // One 63-bit draw supplies up to IDX_PER_DRAW candidate indices
        let mut cache = source.next_u64() >> 1;
        let mut remain = IDX_PER_DRAW;
        let mut cursor = n;
        while cursor > 0 {
            if remain == 0 {
                cache = source.next_u64() >> 1;
                remain = IDX_PER_DRAW;
            }
            // Candidates beyond the pool size are rejected; their bits
            // are spent either way
            let idx = (cache & IDX_MASK) as usize;
            if idx < pool.len() {
                cursor -= 1;
                buffer[cursor] = pool[idx];
            }
            cache >>= IDX_BITS;
            remain -= 1;
        }
        drop(source);

        buffer.into_iter().map(char::from).collect()
    }

    /// Generate a random string of `total_length` characters starting with `prefix`
    ///
    /// The random tail fills the `total_length - prefix.len()` remaining
    /// characters. A prefix at least as long as `total_length` is
    /// returned unchanged.
    ///
    /// ```rust
    /// let generator = randid::Generator::default();
    /// let key = generator.generate_with_prefix(43, "kagent_");
    ///
    /// assert_eq!(key.len(), 43);
    /// assert!(key.starts_with("kagent_"));
    /// ```
    pub fn generate_with_prefix(&self, total_length: usize, prefix: &str) -> String {
        if prefix.len() > total_length {
            log::warn!(
                "Prefix ({} chars) exceeds the requested total length ({})",
                prefix.len(),
                total_length
            );
        }
        let n = total_length.saturating_sub(prefix.len());
        format!("{}{}", prefix, self.generate(n))
    }
}

impl Default for Generator {
    /// Generator over the full pool of lowercase, uppercase and digits
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

/// Nanosecond wall-clock seed; a clock before the epoch degrades to 0
fn nano_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_generated_length() {
        let generator = Generator::default();
        for n in [0, 1, 5, 64, 1000] {
            assert_eq!(generator.generate(n).len(), n);
        }
    }

    #[test]
    fn test_pool_membership() {
        let generator = Generator::default();
        let id = generator.generate(512);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_digits_only() {
        let generator =
            Generator::new(PoolConfig::default().without_lowercase().without_uppercase());
        let id = generator.generate(64);
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_uppercase_only() {
        let generator = Generator::new(PoolConfig::default().without_lowercase().without_digits());
        let id = generator.generate(64);
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_lowercase_only() {
        let generator = Generator::new(PoolConfig::default().without_uppercase().without_digits());
        let id = generator.generate(64);
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_empty_pool() {
        let generator = Generator::new(
            PoolConfig::default()
                .without_lowercase()
                .without_uppercase()
                .without_digits(),
        );
        assert_eq!(generator.alphabet(), "");
        assert_eq!(generator.generate(0), "");
        assert_eq!(generator.generate(32), "");
    }

    #[test]
    fn test_prefix() {
        let generator = Generator::default();
        let id = generator.generate_with_prefix(20, "cust_");
        assert_eq!(id.len(), 20);
        assert!(id.starts_with("cust_"));
        assert!(
            id["cust_".len()..]
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        );
    }

    #[test]
    fn test_prefix_exceeds_total_length() {
        let generator = Generator::default();
        assert_eq!(generator.generate_with_prefix(4, "kagent_"), "kagent_");
        assert_eq!(generator.generate_with_prefix(0, ""), "");
    }

    #[test]
    fn test_concurrent_uniqueness() {
        let generator = Arc::new(Generator::default());
        let threads = 8;
        let per_thread = 2500;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let generator = Arc::clone(&generator);
                std::thread::spawn(move || {
                    (0..per_thread)
                        .map(|_| generator.generate_with_prefix(20, "sch_"))
                        .collect::<Vec<String>>()
                })
            })
            .collect();

        let mut seen = HashSet::with_capacity(threads * per_thread);
        for handle in handles {
            for id in handle.join().expect("generator thread panicked") {
                assert_eq!(id.len(), 20);
                assert!(id.starts_with("sch_"));
                assert!(
                    id["sch_".len()..]
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric())
                );
                assert!(seen.insert(id), "duplicate identifier generated");
            }
        }
        assert_eq!(seen.len(), threads * per_thread);
    }
}
