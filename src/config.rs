use std::env;
use std::path::{Path, PathBuf};

pub const ENV_FILE_NAME: &str = ".env";

#[derive(Debug, Clone)]
pub struct Config {
    pub env_file: PathBuf,
    pub override_existing: bool,
}

impl Config {
    /// Reads settings from the process environment.
    ///
    /// `DOTENV_PATH` overrides the file location, which otherwise is `.env`
    /// next to the running executable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_file = match env::var("DOTENV_PATH") {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_env_file()?,
        };

        let override_existing = env::var("DOTENV_OVERRIDE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            env_file,
            override_existing,
        })
    }
}

/// `.env` in the directory containing the running executable.
pub fn default_env_file() -> Result<PathBuf, ConfigError> {
    let exe = env::current_exe().map_err(ConfigError::ExecutableDir)?;
    Ok(env_file_beside(&exe))
}

pub fn env_file_beside(exe: &Path) -> PathBuf {
    exe.parent()
        .unwrap_or_else(|| Path::new(""))
        .join(ENV_FILE_NAME)
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true")
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not locate the executable directory: {0}")]
    ExecutableDir(#[source] std::io::Error),
}
