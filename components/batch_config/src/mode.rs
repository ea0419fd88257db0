use serde::Deserialize;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

pub const DEFAULT_METADATA_ROOT: &str = "./metadata";
pub const METADATA_SUFFIX: &str = ".adjusted_meta.json";

/// Where the skip-cache metadata for a batch is kept
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum MetadataMode {
    /// One file shared by every config
    #[default]
    Global,
    /// One file per config, named after it
    PerConfig,
    /// A directory (named after the config inside it) or a full file path
    Custom(PathBuf),
}

impl From<String> for MetadataMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "global" => MetadataMode::Global,
            "per_config" => MetadataMode::PerConfig,
            _ => MetadataMode::Custom(PathBuf::from(value)),
        }
    }
}

impl MetadataMode {
    /// Resolve the metadata file for the config at `config_path`.
    ///
    /// `metadata_root` is the base folder for the global and per-config modes.
    pub fn resolve(&self, metadata_root: &Path, config_path: &Path) -> PathBuf {
        let per_config_name = || {
            let stem = config_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "config".to_string());
            format!("{}{}", stem, METADATA_SUFFIX)
        };

        match self {
            MetadataMode::Global => metadata_root.join(format!("global{}", METADATA_SUFFIX)),
            MetadataMode::PerConfig => metadata_root.join(per_config_name()),
            MetadataMode::Custom(path) => {
                let names_dir = path
                    .as_os_str()
                    .to_string_lossy()
                    .ends_with(|c: char| c == '/' || c == MAIN_SEPARATOR);
                if names_dir || path.is_dir() {
                    path.join(per_config_name())
                } else {
                    path.clone()
                }
            }
        }
    }
}
