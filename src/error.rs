use std::fmt;
use std::path::PathBuf;

/// Why a `.env` file produced nothing to apply.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("env file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("env file {} could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Unreadable { path, source }
        }
    }
}

/// A rejected line. Holds the line number only, never the line's text, so
/// values in the file cannot leak into logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based.
    pub line: usize,
    pub reason: MalformedReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    MissingSeparator,
    EmptyKey,
    InvalidKey,
    UnterminatedQuote,
    TrailingText,
    NulByte,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingSeparator => "missing '=' separator",
            Self::EmptyKey => "empty key",
            Self::InvalidKey => "key contains whitespace",
            Self::UnterminatedQuote => "unterminated quoted value",
            Self::TrailingText => "unexpected text after closing quote",
            Self::NulByte => "contains a NUL byte",
        };
        f.write_str(text)
    }
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}
