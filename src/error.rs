use std::fmt;

#[derive(Debug)]
pub enum PolligenError {
    ConfigError(String),
    ValidationError(String),
    GenerationError(String),
    DownloadError(String),
    UnsupportedFileType(String),
}

impl fmt::Display for PolligenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolligenError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            PolligenError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            PolligenError::GenerationError(msg) => write!(f, "Generation error: {}", msg),
            PolligenError::DownloadError(msg) => write!(f, "Download error: {}", msg),
            PolligenError::UnsupportedFileType(msg) => write!(f, "Unsupported file type: {}", msg),
        }
    }
}

impl std::error::Error for PolligenError {}

pub type Result<T> = std::result::Result<T, PolligenError>;
