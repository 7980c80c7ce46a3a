//! # Download Integrity Checks

use std::{fs::File, io, path::Path};

use anyhow::Context;
use sha2::{Digest, Sha256};

/// The lowercase hex sha256 of a file's contents.
pub fn file_sha256<P: AsRef<Path>>(path: P) -> anyhow::Result<String> {
    let path = path.as_ref();
    let mut file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(format!("{:x}", hasher.finalize()))
}

/// Check a file against an expected sha256; case-insensitive hex.
pub fn verify_sha256<P: AsRef<Path>>(
    path: P,
    expected: &str,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let actual = file_sha256(path)?;
    if !actual.eq_ignore_ascii_case(expected) {
        anyhow::bail!(
            "sha256 mismatch for {}: expected {expected}, found {actual}",
            path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn test_sha256() {
        let dir = tempdir::TempDir::new("integrity_test").unwrap();
        let path = dir.path().join("abc.txt");
        fs::write(&path, "abc").unwrap();

        assert_eq!(file_sha256(&path).unwrap(), ABC_SHA256);

        verify_sha256(&path, ABC_SHA256).unwrap();
        verify_sha256(&path, &ABC_SHA256.to_uppercase()).unwrap();

        let err = verify_sha256(&path, &"0".repeat(64)).unwrap_err();
        assert!(err.to_string().contains("sha256 mismatch"));

        assert!(file_sha256(dir.path().join("missing")).is_err());
    }
}
