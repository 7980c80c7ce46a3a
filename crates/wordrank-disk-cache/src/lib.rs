//! # wordrank-disk-cache
//!
//! Resolves the per-user cache directory for `wordrank`,
//! and downloads mirrored resources into it on a miss.
//! Resources with a known sha256 are checked on every load.
#![warn(missing_docs)]

use crate::cache_dir::CacheDirResolver;

pub mod cache_dir;
pub mod disk_cache;
pub mod integrity;

pub use disk_cache::{WordrankDiskCache, WordrankDiskCacheOptions};

/// Environment variable key to override the default cache directory.
pub const WORDRANK_CACHE_DIR: &str = "WORDRANK_CACHE_DIR";

/// Default [`CacheDirResolver`] for wordrank.
pub const WORDRANK_CACHE_CONFIG: CacheDirResolver = CacheDirResolver {
    qualifier: "io.crates.wordrank",
    organization: "",
    application: "wordrank",
    env_vars: &[WORDRANK_CACHE_DIR],
};
