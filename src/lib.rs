pub mod config;
pub mod env_file;
pub mod environment;
pub mod error;
pub mod loader;
pub mod reporter;

pub use env_file::{Entry, EnvFile};
pub use environment::{Environment, MapEnv, ProcessEnv};
pub use error::{LoadError, MalformedLine, MalformedReason};
pub use loader::{load, ApplySummary, EnvFileLoader};
