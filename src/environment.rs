use std::path::PathBuf;

/// Build-output mode meaning the build runs in the source tree itself.
pub const BUILD_IN_PLACE: &str = ".";

/// Trait for abstracting the build environment a glob is resolved against.
/// Any configuration type that knows its build-output mode and its source
/// directory can act as one.
pub trait BuildEnv {
    /// Build-output location; [`BUILD_IN_PLACE`] means no separate output directory
    fn build_to(&self) -> &str;

    /// Absolute path of the source directory of the build description
    /// currently being processed
    fn source_dir(&self) -> PathBuf;
}
