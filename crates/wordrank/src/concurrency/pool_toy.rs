//! # Thread Pool Toy

use core::fmt::Debug;
use std::num::NonZeroUsize;

use crate::concurrency::threads;

/// Current Thread -> T Pool.
///
/// This struct provides a thread-id hashed pool of items.
/// Rather than pure thread-local storage, the pool is
/// initialized with a vector of items, and the current
/// thread's ID is hashed to get the item.
///
/// Two threads may hash to the same slot; items which carry
/// mutable state should be wrapped in a lock.
///
/// ## Style Hints
///
/// Instance names should prefer `${T-name}_pool`,
/// for example, `regex_pool`, `se_pool`, etc.
pub struct PoolToy<T> {
    pool: Vec<T>,
}

impl<T> PoolToy<T> {
    /// Create a new pool from a vector of items.
    ///
    /// ## Panics
    /// If `pool` is empty.
    pub fn from_pool(pool: Vec<T>) -> Self {
        assert!(!pool.is_empty(), "PoolToy requires at least one item");
        Self { pool }
    }

    /// Build a pool with one item per slot.
    ///
    /// ## Arguments
    /// * `max_pool` - the requested size, clipped to the system parallelism.
    /// * `builder` - called once per slot.
    pub fn from_builder<F>(
        max_pool: Option<NonZeroUsize>,
        builder: F,
    ) -> Self
    where
        F: FnMut() -> T,
    {
        let size = threads::resolve_max_pool(max_pool);
        Self::from_pool(core::iter::repeat_with(builder).take(size).collect())
    }

    /// Get a reference to the item for the current thread.
    pub fn get(&self) -> &T {
        let tid = threads::current_thread_id_hash();
        &self.pool[tid % self.pool.len()]
    }

    /// Get the length of the pool.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.pool.len()
    }
}

impl<T: Clone> PoolToy<T> {
    /// Initialize a pool of clones of the given item.
    pub fn init(
        item: T,
        max_pool: Option<NonZeroUsize>,
    ) -> Self {
        let size = threads::resolve_max_pool(max_pool);
        Self::from_pool(vec![item; size])
    }
}

impl<T: Clone> Clone for PoolToy<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}

impl<T> AsRef<T> for PoolToy<T> {
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<T: Debug> Debug for PoolToy<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("PoolToy")
            .field("item", &self.pool[0])
            .field("len", &self.pool.len())
            .finish()
    }
}
