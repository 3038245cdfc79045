use std::path::PathBuf;
use thiserror::Error;

/// Failures of loading, patching or persisting a manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Manifest not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    #[error("Invalid manifest {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid manifest {}: top level must be a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("{message}")]
    Value { message: String },

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}

impl ManifestError {
    pub fn value(message: impl Into<String>) -> Self {
        ManifestError::Value {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ManifestError>;
