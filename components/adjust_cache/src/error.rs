use pcm_primitives::GainError;
use pcm_transform::TransformError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("failed to read metadata from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("metadata at {path} is not valid")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write metadata to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Why a single batch entry could not be processed
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("no factor or db specified for {0}")]
    MissingGainSpec(PathBuf),

    #[error("invalid gain: {0}")]
    InvalidGain(#[from] GainError),

    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),

    #[error("io error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("metadata error: {0}")]
    Metadata(#[from] MetadataError),
}

impl BatchError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BatchError::Io {
            path: path.into(),
            source,
        }
    }
}
