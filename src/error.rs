use std::path::PathBuf;

use thiserror::Error;

/// Message shown when the server answers with a non-2xx status.
pub const STATUS_FAILED_MESSAGE: &str = "Network request failed!";

/// The two failure kinds a pipeline run can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RequestFailed,
    ParseFailed,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The server answered, but not with a 2xx status.
    #[error("{}", STATUS_FAILED_MESSAGE)]
    Status { status: u16, url: String },

    /// The request never produced a response.
    #[error("Failed to fetch {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn transport(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Transport {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Status { .. } | FetchError::Transport { .. } => ErrorKind::RequestFailed,
            FetchError::Parse(_) => ErrorKind::ParseFailed,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}
