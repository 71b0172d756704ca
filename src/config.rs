use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::environment::BuildEnv;
use crate::error::ConfigError;

/// Build profile loaded from a JSON file: where build output goes and where
/// the sources live. The smallest environment a scoped glob needs.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Build-output location, `"."` for in-place builds.
    pub build_to: String,

    /// Source directory the build description lives in.
    pub src_dir: PathBuf,
}

impl BuildConfig {
    /// Load a build profile from `path`.
    ///
    /// `src_dir` is canonicalized so [`BuildEnv::source_dir`] hands out an
    /// absolute path no matter how the file spelled it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let mut config: BuildConfig = serde_json::from_str(&contents)?;
        config.src_dir = config.src_dir.canonicalize()?;
        log::debug!(
            "loaded build profile from {}: build_to={}, src_dir={}",
            path.display(),
            config.build_to,
            config.src_dir.display()
        );
        Ok(config)
    }
}

impl BuildEnv for BuildConfig {
    fn build_to(&self) -> &str {
        &self.build_to
    }

    fn source_dir(&self) -> PathBuf {
        self.src_dir.clone()
    }
}
