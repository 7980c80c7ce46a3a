//! # Public Resources

/// A static, mirrored download resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstUrlResource {
    /// The mirror URLs for this resource, tried in order.
    pub urls: &'static [&'static str],

    /// The hex sha256 of this resource, if known; checked on load.
    pub sha256: Option<&'static str>,
}

impl ConstUrlResource {
    /// Create a new [`ConstUrlResource`].
    pub const fn new(
        urls: &'static [&'static str],
        sha256: Option<&'static str>,
    ) -> Self {
        Self { urls, sha256 }
    }

    /// Create a new [`ConstUrlResource`] with no known sha256.
    pub const fn unverified(urls: &'static [&'static str]) -> Self {
        Self::new(urls, None)
    }

    /// The file name of the first URL.
    pub fn file_name(&self) -> Option<&'static str> {
        self.urls
            .first()
            .and_then(|url| url.rsplit('/').next())
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let res = ConstUrlResource::unverified(&["https://example.com/a/b.tiktoken"]);
        assert_eq!(res.sha256, None);
        assert_eq!(res.file_name(), Some("b.tiktoken"));

        assert_eq!(ConstUrlResource::unverified(&[]).file_name(), None);
        assert_eq!(
            ConstUrlResource::unverified(&["https://example.com/"]).file_name(),
            None
        );
    }
}
