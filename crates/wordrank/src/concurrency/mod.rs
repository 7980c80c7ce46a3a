//! # Concurrency Utilities

pub mod pool_toy;
#[cfg(feature = "rayon")]
pub mod rayon;
pub mod threads;

#[doc(inline)]
pub use pool_toy::PoolToy;
