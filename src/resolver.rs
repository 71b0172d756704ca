use std::path::MAIN_SEPARATOR;

use glob::glob;

use crate::environment::{BuildEnv, BUILD_IN_PLACE};
use crate::error::ResolveError;

/// Find all paths that match a glob pattern, scoped to the environment's
/// source directory.
///
/// For in-place builds (`build_to == "."`) the pattern is resolved against
/// the working directory and the matches are returned untouched. For
/// out-of-tree builds the pattern is resolved under the source directory and
/// every match is returned relative to it, so build descriptions can name
/// their inputs the same way in both modes.
///
/// Zero matches is an empty list, not an error.
pub fn resolve(env: &impl BuildEnv, pattern: &str) -> Result<Vec<String>, ResolveError> {
    if env.build_to() == BUILD_IN_PLACE {
        let mut matches = Vec::new();
        for entry in glob(pattern)? {
            matches.push(entry?.to_string_lossy().into_owned());
        }
        log::debug!(
            "{} match(es) for {} in the working directory",
            matches.len(),
            pattern
        );
        return Ok(matches);
    }

    let base = format!("{}{}", env.source_dir().display(), MAIN_SEPARATOR);
    let mut matches = Vec::new();
    for entry in glob(&format!("{}{}", base, pattern))? {
        let path = entry?.to_string_lossy().into_owned();
        // Matches are built by appending matched components to `base`, so
        // the prefix is always there to strip.
        matches.push(path[base.len()..].to_string());
    }
    log::debug!("{} match(es) for {} under {}", matches.len(), pattern, base);
    Ok(matches)
}

/// Resolve every pattern in order and concatenate the matches.
///
/// No dedup and no sorting; a path matched by two patterns shows up twice.
pub fn resolve_all(env: &impl BuildEnv, patterns: &[String]) -> Result<Vec<String>, ResolveError> {
    let mut matches = Vec::new();
    for pattern in patterns {
        matches.extend(resolve(env, pattern)?);
    }
    Ok(matches)
}

/// Scoped globbing as a method on the environment itself.
///
/// Importing this trait gives every [`BuildEnv`] a `glob` method, so code
/// holding an environment can call `env.glob("src/*.c")` directly.
pub trait Glob {
    /// Resolve a pattern against this environment; see [`resolve`]
    fn glob(&self, pattern: &str) -> Result<Vec<String>, ResolveError>;
}

impl<E: BuildEnv> Glob for E {
    fn glob(&self, pattern: &str) -> Result<Vec<String>, ResolveError> {
        resolve(self, pattern)
    }
}
