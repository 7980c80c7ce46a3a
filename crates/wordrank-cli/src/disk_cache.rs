use wordrank::disk_cache::{WordrankDiskCache, WordrankDiskCacheOptions};

/// Disk cache argument group.
#[derive(clap::Args, Debug)]
pub struct DiskCacheArgs {
    /// Cache directory.
    #[arg(long, default_value = None)]
    pub cache_dir: Option<String>,
}

impl DiskCacheArgs {
    /// Initialize the disk cache.
    pub fn init_disk_cache(&self) -> Result<WordrankDiskCache, Box<dyn std::error::Error>> {
        let mut options = WordrankDiskCacheOptions::default();

        if let Some(cache_dir) = &self.cache_dir {
            options = options.with_cache_dir(Some(cache_dir.clone()));
        }

        Ok(WordrankDiskCache::new(options)?)
    }
}
