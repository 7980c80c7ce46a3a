//! # `o200k_base` Pattern and Loaders

use core::num::NonZeroUsize;
#[cfg(feature = "download")]
use std::path::PathBuf;
use std::path::Path;

#[cfg(feature = "download")]
use crate::disk_cache::WordrankDiskCache;
#[cfg(feature = "download")]
use crate::errors::WRError;
use crate::{
    errors::WRResult,
    join_patterns,
    pretrained::resources::ConstUrlResource,
    spanning::{ConstRegexPattern, TextSpanner},
    types::TokenType,
    vocab::{RankVocab, io::load_tiktoken_vocab_path},
};

/// The name of the `o200k_base` encoding.
pub const O200K_ENCODING_NAME: &str = "o200k_base";

/// The number of entries in the `o200k_base` rank table.
pub const O200K_BASE_VOCAB_SIZE: usize = 199_998;

/// The "`o200k_base.tiktoken`" vocabulary resource.
pub const O200K_BASE_TIKTOKEN_RESOURCE: ConstUrlResource = ConstUrlResource {
    urls: &["https://openaipublic.blob.core.windows.net/encodings/o200k_base.tiktoken"],
    sha256: Some("446a9538cb6c348e3516120d7c08b09f57c36495e2acfffe59a5bf8b0cfb1a2d"),
};

/// The `o200k_base` word split pattern.
///
/// The ``\s+(?!\S)`` alternative needs look-ahead; so this is a `Fancy` pattern.
pub const O200K_BASE_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]*[\p{Ll}\p{Lm}\p{Lo}\p{M}]+(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]+[\p{Ll}\p{Lm}\p{Lo}\p{M}]*(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"\p{N}{1,3}",
    r" ?[^\s\p{L}\p{N}]+[\r\n/]*",
    r"\s*[\r\n]+",
    r"\s+(?!\S)",
    r"\s+"
));

/// Disk cache context for `o200k` resources.
#[cfg(feature = "download")]
const O200K_CACHE_CONTEXT: &[&str] = &["openai", "o200k"];

/// Build a [`TextSpanner`] for the `o200k_base` pattern.
///
/// ## Arguments
/// * `max_pool` - The maximum size of the regex pool; if None, lib defaults are used.
pub fn o200k_base_spanner(max_pool: Option<NonZeroUsize>) -> WRResult<TextSpanner> {
    TextSpanner::from_pattern(O200K_BASE_PATTERN, max_pool)
}

/// Fetch the "`o200k_base.tiktoken`" data path.
///
/// Downloads and caches the resource using the `disk_cache`;
/// the file is checked against the resource's sha256.
#[cfg(feature = "download")]
pub fn fetch_o200k_base_data(disk_cache: &mut WordrankDiskCache) -> WRResult<PathBuf> {
    let resource = O200K_BASE_TIKTOKEN_RESOURCE;
    disk_cache
        .load_cached_path(O200K_CACHE_CONTEXT, resource.urls, resource.sha256, true)
        .map_err(|err| WRError::External(format!("{err:#}")))
}

/// Load the `o200k_base` rank table.
///
/// Downloads and caches resources using the `disk_cache`.
#[cfg(feature = "download")]
pub fn load_o200k_base_vocab<T: TokenType>(
    disk_cache: &mut WordrankDiskCache
) -> WRResult<RankVocab<T>> {
    load_o200k_base_vocab_path(fetch_o200k_base_data(disk_cache)?)
}

/// Load the `o200k_base` rank table from a local tiktoken file.
pub fn load_o200k_base_vocab_path<T: TokenType>(path: impl AsRef<Path>) -> WRResult<RankVocab<T>> {
    let vocab: RankVocab<T> = load_tiktoken_vocab_path(path)?;

    if vocab.len() != O200K_BASE_VOCAB_SIZE {
        log::warn!(
            "{O200K_ENCODING_NAME} vocab has {} entries; expected {O200K_BASE_VOCAB_SIZE}",
            vocab.len()
        );
    }

    Ok(vocab)
}
