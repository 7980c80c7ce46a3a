//! # Wordrank Disk Cache

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::{Download, Downloader};

use crate::{WORDRANK_CACHE_CONFIG, integrity::verify_sha256};

/// Options for [`WordrankDiskCache`].
#[derive(Clone, Default, Debug)]
pub struct WordrankDiskCacheOptions {
    /// Optional path to the cache directory.
    pub cache_dir: Option<PathBuf>,
}

impl WordrankDiskCacheOptions {
    /// Set the cache directory.
    pub fn with_cache_dir<P: AsRef<Path>>(
        mut self,
        cache_dir: Option<P>,
    ) -> Self {
        self.cache_dir = cache_dir.map(|p| p.as_ref().to_path_buf());
        self
    }
}

/// Disk cache for downloaded vocabulary files.
///
/// Files live at ``<cache_dir>/<context...>/<file name of the first url>``.
/// A miss downloads from the mirrors with [`Downloader`];
/// files with a known sha256 are verified on every load.
pub struct WordrankDiskCache {
    cache_dir: PathBuf,
    downloader: Downloader,
}

impl core::fmt::Debug for WordrankDiskCache {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("WordrankDiskCache")
            .field("cache_dir", &self.cache_dir)
            .finish()
    }
}

impl Default for WordrankDiskCache {
    /// ## Panics
    /// If no cache directory can be resolved, or the downloader fails to build.
    fn default() -> Self {
        match Self::new(WordrankDiskCacheOptions::default()) {
            Ok(cache) => cache,
            Err(err) => panic!("failed to initialize default disk cache: {err:#}"),
        }
    }
}

impl WordrankDiskCache {
    /// Construct a new [`WordrankDiskCache`].
    ///
    /// The directory comes from `options`, then `WORDRANK_CACHE_DIR`,
    /// then the platform cache dir.
    pub fn new(options: WordrankDiskCacheOptions) -> anyhow::Result<Self> {
        let cache_dir = WORDRANK_CACHE_CONFIG
            .resolve(options.cache_dir)
            .context("failed to resolve cache directory")?;

        log::debug!("disk cache dir: {}", cache_dir.display());

        Ok(Self {
            cache_dir,
            downloader: Downloader::builder().build()?,
        })
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// The cache path for a file under `context`.
    ///
    /// Does not check or create anything on disk.
    pub fn cache_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        let mut path = self.cache_dir.clone();
        path.extend(context.iter().map(|c| c.as_ref()));
        path.push(file);
        path
    }

    /// Load a cached file, downloading it on a miss.
    ///
    /// # Arguments
    /// * `context`: path segments placed between the cache dir and the file name.
    /// * `urls`: mirror URLs for the file; the file name is taken from the first.
    /// * `sha256`: the expected hex digest, if known.
    /// * `download`: whether to download the file on a miss.
    ///
    /// # Errors
    /// * The file is missing, or fails verification, and `download` is `false`.
    ///   A cached file that fails verification is removed.
    /// * The download fails, or the downloaded file fails verification.
    ///   The partial or bad file is removed.
    pub fn load_cached_path<C, S>(
        &mut self,
        context: &[C],
        urls: &[S],
        sha256: Option<&str>,
        download: bool,
    ) -> anyhow::Result<PathBuf>
    where
        C: AsRef<Path>,
        S: AsRef<str>,
    {
        let urls: Vec<&str> = urls.iter().map(|s| s.as_ref()).collect();
        let mut dl = Download::new_mirrored(&urls);
        let path = self.cache_path(context, &dl.file_name);
        dl.file_name = path.clone();

        if path.exists() {
            match sha256.map(|expected| verify_sha256(&path, expected)) {
                None | Some(Ok(())) => {
                    log::debug!("cache hit: {}", path.display());
                    return Ok(path);
                }
                Some(Err(err)) => {
                    log::warn!("discarding cached file: {err:#}");
                    fs::remove_file(&path)
                        .with_context(|| format!("failed to remove {}", path.display()))?;
                }
            }
        }

        if !download {
            anyhow::bail!("cached file not found: {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        log::info!("downloading {} -> {}", urls.join(", "), path.display());

        let fetched = self
            .downloader
            .download(&[dl])
            .map_err(anyhow::Error::from)
            .and_then(|results| {
                results
                    .into_iter()
                    .try_for_each(|r| r.map(|_| ()).map_err(anyhow::Error::from))
            })
            .with_context(|| format!("failed to download {}", urls.join(", ")))
            .and_then(|()| match sha256 {
                Some(expected) => verify_sha256(&path, expected),
                None => Ok(()),
            });

        if let Err(err) = fetched {
            let _ = fs::remove_file(&path);
            return Err(err);
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use serial_test::serial;

    use crate::{
        WORDRANK_CACHE_CONFIG,
        disk_cache::{WordrankDiskCache, WordrankDiskCacheOptions},
        integrity::file_sha256,
    };

    const TEST_URL: &str = "https://example.com/encodings/test_vocab.tiktoken";

    fn cache_in(dir: &tempdir::TempDir) -> WordrankDiskCache {
        WordrankDiskCache::new(WordrankDiskCacheOptions::default().with_cache_dir(Some(dir.path())))
            .unwrap()
    }

    #[test]
    fn test_user_dir() {
        let user_cache_dir = PathBuf::from("/tmp/wordrank/cache");

        let cache = WordrankDiskCache::new(
            WordrankDiskCacheOptions::default().with_cache_dir(Some(user_cache_dir.clone())),
        )
        .unwrap();
        assert_eq!(cache.cache_dir(), user_cache_dir.as_path());

        assert_eq!(
            format!("{cache:?}"),
            "WordrankDiskCache { cache_dir: \"/tmp/wordrank/cache\" }"
        );

        assert_eq!(
            cache.cache_path(&["a", "b"], "file.txt"),
            user_cache_dir.join("a").join("b").join("file.txt")
        );
        let no_context: &[&str] = &[];
        assert_eq!(
            cache.cache_path(no_context, "file.txt"),
            user_cache_dir.join("file.txt")
        );
    }

    #[test]
    #[serial]
    fn test_default_dir() {
        let cache = WordrankDiskCache::new(WordrankDiskCacheOptions::default()).unwrap();

        let no_path: Option<PathBuf> = None;
        assert_eq!(
            Some(cache.cache_dir().to_path_buf()),
            WORDRANK_CACHE_CONFIG.resolve(no_path)
        );
    }

    #[test]
    fn test_load_cached_path() {
        let dir = tempdir::TempDir::new("disk_cache_test").unwrap();
        let mut cache = cache_in(&dir);

        // Miss, without download.
        let err = cache
            .load_cached_path(&["test"], &[TEST_URL], None, false)
            .unwrap_err();
        assert!(err.to_string().contains("cached file not found"));

        // Hit.
        let expected = dir.path().join("test").join("test_vocab.tiktoken");
        fs::create_dir_all(expected.parent().unwrap()).unwrap();
        fs::write(&expected, "IQ== 0\n").unwrap();

        let path = cache
            .load_cached_path(&["test"], &[TEST_URL], None, false)
            .unwrap();
        assert_eq!(path, expected);
    }

    #[test]
    fn test_load_verified_path() {
        let dir = tempdir::TempDir::new("disk_cache_test").unwrap();
        let mut cache = cache_in(&dir);

        let expected = dir.path().join("test").join("test_vocab.tiktoken");
        fs::create_dir_all(expected.parent().unwrap()).unwrap();
        fs::write(&expected, "IQ== 0\n").unwrap();
        let digest = file_sha256(&expected).unwrap();

        let path = cache
            .load_cached_path(&["test"], &[TEST_URL], Some(&digest), false)
            .unwrap();
        assert_eq!(path, expected);

        // A corrupt cached file is discarded, and reported as a miss.
        let bad = "0".repeat(64);
        let err = cache
            .load_cached_path(&["test"], &[TEST_URL], Some(&bad), false)
            .unwrap_err();
        assert!(err.to_string().contains("cached file not found"));
        assert!(!expected.exists());
    }
}
