//! # Thread Utilities

use core::{
    hash::{Hash, Hasher},
    str::FromStr,
};
use std::{collections::hash_map::DefaultHasher, num::NonZeroUsize, thread};

/// Hash of the current thread's id.
///
/// ``thread::current().id().as_u64()`` is unstable; so the id is hashed instead.
/// The value is stable for the life of the thread.
pub fn current_thread_id_hash() -> usize {
    let mut hasher = DefaultHasher::new();
    thread::current().id().hash(&mut hasher);
    hasher.finish() as usize
}

/// The search list of environment variables that Rayon uses to control parallelism.
#[cfg(feature = "rayon")]
pub const RAYON_VARS: &[&str] = &["RAYON_NUM_THREADS", "RAYON_RS_NUM_CPUS"];

/// Parse a positive thread count from an environment value.
pub fn parse_thread_count(value: &str) -> Option<usize> {
    match usize::from_str(value.trim()) {
        Ok(x @ 1..) => Some(x),
        _ => None,
    }
}

/// Get the max parallelism available.
///
/// When `rayon` is enabled, will scan over `RAYON_VARS`.
pub fn est_max_parallelism() -> usize {
    #[cfg(feature = "rayon")]
    for name in RAYON_VARS {
        if let Some(x) = std::env::var(name)
            .ok()
            .and_then(|s| parse_thread_count(&s))
        {
            return x;
        }
    }

    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Resolve the max pool size.
///
/// ``min(max_pool, est_max_parallelism())``
pub fn resolve_max_pool(max_pool: Option<NonZeroUsize>) -> usize {
    let sys_max = est_max_parallelism();

    let max_pool = max_pool.map(|x| x.get()).unwrap_or(sys_max);

    core::cmp::min(max_pool, sys_max)
}
