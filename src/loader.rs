use std::path::{Path, PathBuf};

use crate::env_file::EnvFile;
use crate::environment::{Environment, ProcessEnv};
use crate::error::LoadError;

/// Counts from applying an [`EnvFile`] to an [`Environment`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub set: usize,
    pub kept_existing: usize,
}

/// Loads a `.env` file into an environment table.
///
/// Loading never fails from the caller's point of view: a missing or
/// unreadable file means "nothing loaded" and malformed lines are skipped.
/// Both are reported through `tracing` for anyone who wants to look.
#[derive(Debug, Clone)]
pub struct EnvFileLoader {
    path: PathBuf,
    override_existing: bool,
}

impl EnvFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            override_existing: false,
        }
    }

    /// When set, values from the file replace ones already present.
    pub fn override_existing(mut self, yes: bool) -> Self {
        self.override_existing = yes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the file without applying it.
    pub fn read(&self) -> Result<EnvFile, LoadError> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| LoadError::from_io(self.path.clone(), e))?;

        let file = EnvFile::parse(&contents);
        for bad in file.malformed() {
            tracing::warn!("Skipping malformed entry in {}: {}", self.path.display(), bad);
        }

        Ok(file)
    }

    /// Loads into `env`. Returns whether the file was read.
    pub fn load_into<E: Environment>(&self, env: &mut E) -> bool {
        match self.read() {
            Ok(file) => {
                let summary = self.apply(&file, env);
                tracing::debug!(
                    "Loaded {}: {} set, {} kept existing, {} malformed",
                    self.path.display(),
                    summary.set,
                    summary.kept_existing,
                    file.malformed().len()
                );
                true
            }
            Err(e @ LoadError::NotFound { .. }) => {
                tracing::debug!("{}", e);
                false
            }
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }

    /// Loads into the process environment.
    pub fn load(&self) -> bool {
        self.load_into(&mut ProcessEnv)
    }

    pub fn apply<E: Environment>(&self, file: &EnvFile, env: &mut E) -> ApplySummary {
        let mut summary = ApplySummary::default();

        for entry in file.entries() {
            if !self.override_existing && env.contains(&entry.key) {
                tracing::debug!("Keeping existing value for {}", entry.key);
                summary.kept_existing += 1;
                continue;
            }
            env.set(&entry.key, &entry.value);
            summary.set += 1;
        }

        summary
    }
}

/// Loads `path` into the process environment. Returns whether it was read.
pub fn load(path: impl AsRef<Path>, override_existing: bool) -> bool {
    EnvFileLoader::new(path.as_ref())
        .override_existing(override_existing)
        .load()
}
