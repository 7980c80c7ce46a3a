//! # Error Types

/// Errors from constructing a [`RankVocab`](crate::vocab::RankVocab).
///
/// These are construction-time failures; a malformed or incomplete
/// ranking source is fatal to startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabError {
    /// A vocabulary entry had an empty byte span.
    #[error("empty byte span for rank {rank}")]
    EmptySpan {
        /// The rank of the offending entry.
        rank: u64,
    },

    /// Ranks are not a dense `0..len` range.
    #[error("ranks are not contiguous from 0: rank {rank} missing (vocab size {size})")]
    NonContiguousRanks {
        /// The first missing rank.
        rank: u64,

        /// The number of entries provided.
        size: usize,
    },

    /// Two entries share a rank.
    #[error("duplicate rank {rank}")]
    DuplicateRank {
        /// The repeated rank.
        rank: u64,
    },

    /// Two entries share a byte span.
    #[error("duplicate byte span {span:?}")]
    DuplicateSpan {
        /// The repeated span.
        span: Vec<u8>,
    },

    /// One of the 256 single-byte spans is missing.
    #[error("missing single-byte entry for byte {byte:#04x}")]
    MissingByte {
        /// The missing byte value.
        byte: u8,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },
}

/// Errors from wordrank operations.
#[derive(Debug, thiserror::Error)]
pub enum WRError {
    /// The vocabulary could not be constructed.
    #[error("vocab error: {0}")]
    Vocab(#[from] VocabError),

    /// A token id has no entry in the vocabulary.
    #[error("unknown token {token} at index {index}")]
    UnknownToken {
        /// The offending token id.
        token: u64,

        /// The position of the token in the input sequence.
        index: usize,
    },

    /// The decoded bytes are not valid UTF-8.
    #[error("decoded bytes are not valid utf-8 (valid up to byte {valid_up_to})")]
    DecodeUtf8 {
        /// The length of the valid UTF-8 prefix.
        valid_up_to: usize,
    },

    /// A split pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Parse error (base64, integer, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for wordrank operations.
pub type WRResult<T> = core::result::Result<T, WRError>;
