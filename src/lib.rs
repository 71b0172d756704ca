pub mod config;
pub mod environment;
pub mod error;
pub mod resolver;

pub use config::BuildConfig;
pub use environment::{BuildEnv, BUILD_IN_PLACE};
pub use error::{ConfigError, ResolveError};
pub use resolver::{resolve, resolve_all, Glob};
