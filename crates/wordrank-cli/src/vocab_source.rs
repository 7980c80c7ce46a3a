use std::{path::PathBuf, sync::Arc};

use wordrank::{
    RankVocab,
    Tokenizer,
    TokenizerOptions,
    Utf8Policy,
    pretrained::{load_o200k_base_vocab, load_o200k_base_vocab_path},
};

use crate::disk_cache::DiskCacheArgs;

/// Vocabulary source arg group.
///
/// Either a local `o200k_base.tiktoken` file, or the disk cache.
#[derive(clap::Args, Debug)]
pub struct VocabSourceArgs {
    /// Local `o200k_base.tiktoken` file; skips the disk cache.
    #[arg(long, conflicts_with = "cache_dir")]
    vocab: Option<PathBuf>,

    #[command(flatten)]
    disk_cache: DiskCacheArgs,
}

impl VocabSourceArgs {
    /// Load the `o200k_base` vocabulary.
    pub fn load_vocab(&self) -> Result<Arc<RankVocab<u32>>, Box<dyn std::error::Error>> {
        let vocab = match &self.vocab {
            Some(path) => load_o200k_base_vocab_path(path)?,
            None => {
                let mut disk_cache = self.disk_cache.init_disk_cache()?;
                load_o200k_base_vocab(&mut disk_cache)?
            }
        };
        Ok(Arc::new(vocab))
    }

    /// Load the `o200k_base` tokenizer.
    pub fn load_tokenizer(
        &self,
        utf8_policy: Utf8Policy,
    ) -> Result<Arc<Tokenizer<u32>>, Box<dyn std::error::Error>> {
        let vocab = self.load_vocab()?;
        log::info!("loaded vocab: {} entries", vocab.len());

        Ok(TokenizerOptions::default()
            .with_utf8_policy(utf8_policy)
            .build(vocab)?)
    }
}
