//! # Tiktoken Vocabulary IO
//!
//! Lines are:
//! ```terminaloutput
//! {BASE64 SPAN} {RANK}
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{WRError, WRResult},
    types::TokenType,
    vocab::RankVocab,
};

/// Load a [`RankVocab`] from a tiktoken vocab file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_tiktoken_vocab_path<T, P>(path: P) -> WRResult<RankVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    log::info!("loading tiktoken vocab: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    read_tiktoken_vocab(reader)
}

/// Read a [`RankVocab`] from a tiktoken vocab line reader.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_tiktoken_vocab<T, R>(reader: R) -> WRResult<RankVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    Ok(RankVocab::try_from_pairs(read_tiktoken_pairs(reader)?)?)
}

/// Read the ``(span, rank)`` entries from a tiktoken vocab line reader.
///
/// Blank lines are skipped; entries are not validated beyond parsing.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_tiktoken_pairs<T, R>(reader: R) -> WRResult<Vec<(Vec<u8>, T)>>
where
    T: TokenType,
    R: BufRead,
{
    let mut pairs = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let s = line.trim_end();
        if s.is_empty() {
            continue;
        }

        let Some((span, rank)) = s.split_once(' ') else {
            return Err(WRError::Parse(format!(
                "line {}: expected \"{{BASE64}} {{RANK}}\"",
                idx + 1
            )));
        };

        let span = BASE64_STANDARD
            .decode(span)
            .map_err(|e| WRError::Parse(format!("line {}: {e}", idx + 1)))?;

        let rank: u64 = rank
            .trim()
            .parse()
            .map_err(|e| WRError::Parse(format!("line {}: {e}", idx + 1)))?;

        let token = T::from_u64(rank).ok_or_else(|| {
            WRError::Parse(format!("line {}: rank {rank} out of range", idx + 1))
        })?;

        pairs.push((span, token));
    }

    Ok(pairs)
}

/// Save a [`RankVocab`] to a tiktoken vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_tiktoken_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &RankVocab<T>,
    path: P,
) -> WRResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_tiktoken_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`RankVocab`] to a [`Write`] writer, in rank order.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_tiktoken_vocab<T, W>(
    vocab: &RankVocab<T>,
    writer: &mut W,
) -> WRResult<()>
where
    T: TokenType,
    W: Write,
{
    for (token, span) in vocab.iter() {
        writeln!(writer, "{} {}", BASE64_STANDARD.encode(span), token)?;
    }
    Ok(())
}
