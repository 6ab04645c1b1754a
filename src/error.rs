use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    DirectoryNotFound {
        path: PathBuf,
    },
    InvalidFilterPattern {
        pattern: String,
        source: regex::Error,
    },
    InvalidSortPattern {
        pattern: String,
        source: regex::Error,
    },
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    OutputWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryNotFound { path } => {
                write!(f, "changelog directory not found: {}", path.display())
            }
            Error::InvalidFilterPattern { pattern, source } => {
                write!(f, "invalid file filter pattern: {} ({})", pattern, source)
            }
            Error::InvalidSortPattern { pattern, source } => {
                write!(f, "invalid custom sort pattern: {} ({})", pattern, source)
            }
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::TomlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse toml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::OutputWriteError { path, source } => {
                write!(
                    f,
                    "failed to write master changelog: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::IoError(err) => {
                write!(f, "io error: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidFilterPattern { source, .. } => Some(source),
            Error::InvalidSortPattern { source, .. } => Some(source),
            Error::FileReadError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            Error::OutputWriteError { source, .. } => Some(source),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}
