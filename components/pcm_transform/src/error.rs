use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("buffer of {0} bytes is too short for the 8-byte header")]
    MissingHeader(usize),

    #[error("PCM payload of {0} bytes is not a whole number of 16-bit samples")]
    MalformedBuffer(usize),

    #[error("io error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TransformError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TransformError::Io {
            path: path.into(),
            source,
        }
    }
}
