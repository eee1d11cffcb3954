//! Harness runtime configuration.
//!
//! The word-slot capacity the runner supplies to derived word destinations
//! is set via the `MINISCAN_WORD_CAP` environment variable (bytes,
//! decimal). Missing, zero, or unparsable values fall back to the default.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default word-slot capacity in bytes.
pub const DEFAULT_WORD_CAP: usize = 256;

// Atomic cache: 0 = unresolved (zero is not a legal capacity).
static CACHED_WORD_CAP: AtomicUsize = AtomicUsize::new(0);

/// The configured word capacity (reads the env var on first call, caches
/// thereafter).
#[must_use]
pub fn word_capacity() -> usize {
    let cached = CACHED_WORD_CAP.load(Ordering::Relaxed);
    if cached != 0 {
        return cached;
    }
    let resolved = std::env::var("MINISCAN_WORD_CAP")
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|&cap| cap > 0)
        .unwrap_or(DEFAULT_WORD_CAP);
    CACHED_WORD_CAP.store(resolved, Ordering::Relaxed);
    resolved
}
