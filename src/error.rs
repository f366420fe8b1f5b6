use std::path::PathBuf;

/// Result type alias for the output side of the tool
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating arguments and writing reports
#[derive(Debug)]
pub enum Error {
    IoError(std::io::Error),
    WriteError { file: PathBuf, source: std::io::Error },
    InvalidArgument(String),
    SerializationError(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::IoError(e) => write!(f, "IO error: {}", e),
            Error::WriteError { file, source } => {
                write!(f, "Failed to write to file {}: {}", file.display(), source)
            }
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(e) => Some(e),
            Error::WriteError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(format!("JSON: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::SerializationError(format!("YAML: {}", err))
    }
}
