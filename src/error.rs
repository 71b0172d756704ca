use thiserror::Error;

/// Errors surfaced while resolving a glob pattern.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The pattern is not valid glob syntax.
    #[error("invalid glob pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    /// A directory visited during matching could not be read.
    #[error(transparent)]
    Io(#[from] glob::GlobError),
}

/// Errors surfaced while loading a build profile from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read build profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse build profile: {0}")]
    Parse(#[from] serde_json::Error),
}
