//! # Cache Directory Resolution

use std::{
    env,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

/// Static configuration for locating an application's cache directory.
#[derive(Debug, Clone, Copy)]
pub struct CacheDirResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// Override variables, highest priority first.
    pub env_vars: &'static [&'static str],
}

impl CacheDirResolver {
    /// The platform cache directory for this application, if the platform has one.
    ///
    /// On Linux this is ``$XDG_CACHE_HOME/<app>`` or ``$HOME/.cache/<app>``.
    pub fn platform_cache_dir(&self) -> Option<PathBuf> {
        ProjectDirs::from(self.organization, self.application, self.qualifier)
            .map(|dirs| dirs.cache_dir().to_path_buf())
    }

    /// Resolve the cache directory from the process environment.
    ///
    /// See [`resolve_with`](Self::resolve_with).
    pub fn resolve<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        self.resolve_with(path, |var| env::var(var).ok())
    }

    /// Resolve the cache directory, reading variables through `lookup`.
    ///
    /// The first of these wins:
    /// 1. `path`;
    /// 2. the first non-empty variable of `self.env_vars`;
    /// 3. [`platform_cache_dir`](Self::platform_cache_dir).
    pub fn resolve_with<P, F>(
        &self,
        path: Option<P>,
        lookup: F,
    ) -> Option<PathBuf>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = path {
            return Some(path.as_ref().to_path_buf());
        }

        self.env_vars
            .iter()
            .find_map(|var| lookup(var).filter(|s| !s.is_empty()))
            .map(PathBuf::from)
            .or_else(|| self.platform_cache_dir())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const PRIMARY_VAR: &str = "_CACHE_DIR_PRIMARY";
    const FALLBACK_VAR: &str = "_CACHE_DIR_FALLBACK";

    const TEST_RESOLVER: CacheDirResolver = CacheDirResolver {
        qualifier: "io",
        organization: "crates",
        application: "example",
        env_vars: &[PRIMARY_VAR, FALLBACK_VAR],
    };

    #[test]
    fn test_resolve_order() {
        let platform = TEST_RESOLVER
            .platform_cache_dir()
            .expect("no platform cache dir");
        let explicit = PathBuf::from("/tmp/example/explicit");
        let no_path: Option<PathBuf> = None;

        let mut env: HashMap<&str, &str> = HashMap::new();
        let resolve = |path: Option<&PathBuf>, env: &HashMap<&str, &str>| {
            TEST_RESOLVER.resolve_with(path, |var| env.get(var).map(|s| s.to_string()))
        };

        assert_eq!(resolve(no_path.as_ref(), &env), Some(platform));

        env.insert(FALLBACK_VAR, "/tmp/example/fallback");
        assert_eq!(
            resolve(no_path.as_ref(), &env),
            Some(PathBuf::from("/tmp/example/fallback"))
        );

        // Empty values are skipped.
        env.insert(PRIMARY_VAR, "");
        assert_eq!(
            resolve(no_path.as_ref(), &env),
            Some(PathBuf::from("/tmp/example/fallback"))
        );

        env.insert(PRIMARY_VAR, "/tmp/example/primary");
        assert_eq!(
            resolve(no_path.as_ref(), &env),
            Some(PathBuf::from("/tmp/example/primary"))
        );

        assert_eq!(resolve(Some(&explicit), &env), Some(explicit.clone()));
    }
}
