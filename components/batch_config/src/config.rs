use crate::error::ConfigError;
use crate::mode::MetadataMode;
use pcm_primitives::GainSpec;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "./adjusted";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// A parsed batch configuration. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub metadata_mode: MetadataMode,

    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// One file to adjust. Exactly one of `factor` or `db` is expected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileEntry {
    pub path: PathBuf,

    #[serde(default)]
    pub factor: Option<f64>,

    #[serde(default)]
    pub db: Option<f64>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            metadata_mode: MetadataMode::default(),
            files: Vec::new(),
        }
    }
}

impl BatchConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Where the adjusted copy of `input` is written
    pub fn output_path(&self, input: &Path) -> PathBuf {
        self.output_dir.join(input.file_name().unwrap_or_default())
    }
}

impl FileEntry {
    /// The requested gain. `db` wins when both are given.
    pub fn gain_spec(&self) -> Result<GainSpec, ConfigError> {
        match (self.factor, self.db) {
            (Some(_), Some(db)) => {
                tracing::warn!(
                    "{} specifies both factor and db, using {} dB",
                    self.path.display(),
                    db
                );
                Ok(GainSpec::Db(db))
            }
            (None, Some(db)) => Ok(GainSpec::Db(db)),
            (Some(factor), None) => Ok(GainSpec::Factor(factor)),
            (None, None) => Err(ConfigError::MissingGainSpec(self.path.clone())),
        }
    }
}
