//! # Construct-Once Tokenizer Cell

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::{errors::WRResult, tokenizer::Tokenizer, types::TokenType};

/// A construct-once slot for a lazily built [`Tokenizer`].
///
/// Concurrent first callers of [`get_or_try_init`](Self::get_or_try_init)
/// block until exactly one initializer has succeeded; a failed initializer
/// leaves the cell empty, and a later call may retry.
///
/// The cell is an explicit value; owners decide its scope:
/// ```rust
/// use wordrank::TokenizerCell;
///
/// static TOKENIZER: TokenizerCell<u32> = TokenizerCell::new();
/// assert!(TOKENIZER.get().is_none());
/// ```
pub struct TokenizerCell<T: TokenType> {
    cell: OnceCell<Arc<Tokenizer<T>>>,
}

impl<T: TokenType> Default for TokenizerCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenType> core::fmt::Debug for TokenizerCell<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("TokenizerCell")
            .field("initialized", &self.cell.get().is_some())
            .finish()
    }
}

impl<T: TokenType> TokenizerCell<T> {
    /// Create a new, empty, cell.
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Get the tokenizer, if it has been built.
    pub fn get(&self) -> Option<&Arc<Tokenizer<T>>> {
        self.cell.get()
    }

    /// Get the tokenizer, building it with `init` on first use.
    ///
    /// ## Arguments
    /// * `init` - builds the tokenizer; called at most once per successful init.
    pub fn get_or_try_init<F>(
        &self,
        init: F,
    ) -> WRResult<&Arc<Tokenizer<T>>>
    where
        F: FnOnce() -> WRResult<Arc<Tokenizer<T>>>,
    {
        self.cell.get_or_try_init(init)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
    };

    use super::*;
    use crate::{
        TokenizerOptions,
        encoders::TokenEncoder,
        errors::WRError,
        vocab::testing::build_test_vocab,
    };

    #[test]
    fn test_init_once() {
        type T = u32;
        static CELL: TokenizerCell<T> = TokenizerCell::new();
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        assert!(CELL.get().is_none());
        assert_eq!(format!("{CELL:?}"), "TokenizerCell { initialized: false }");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    let tokenizer = CELL
                        .get_or_try_init(|| {
                            CALLS.fetch_add(1, Ordering::SeqCst);
                            TokenizerOptions::default().build(build_test_vocab::<T>().into())
                        })
                        .unwrap();
                    tokenizer.try_encode("hello world").unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec![263, 269]);
        }

        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
        assert!(CELL.get().is_some());
        assert_eq!(format!("{CELL:?}"), "TokenizerCell { initialized: true }");
    }

    #[test]
    fn test_failed_init_retries() {
        type T = u32;
        let cell: TokenizerCell<T> = Default::default();

        let err = cell
            .get_or_try_init(|| Err(WRError::External("offline".to_string())))
            .unwrap_err();
        assert_eq!(err.to_string(), "offline");
        assert!(cell.get().is_none());

        let tokenizer = cell
            .get_or_try_init(|| TokenizerOptions::default().build(build_test_vocab::<T>().into()))
            .unwrap();
        assert_eq!(tokenizer.try_encode("hello").unwrap(), vec![263]);
    }
}
