//! Batch configuration for PCM gain adjustment
//!
//! A batch config is a JSON document naming the files to adjust, where the
//! results go and where the skip cache lives:
//!
//! ```json
//! {
//!     "output_dir": "./adjusted",
//!     "metadata_mode": "global",
//!     "files": [
//!         {"path": "./tracks/intro.pcm", "factor": 0.8},
//!         {"path": "./tracks/battle_theme.pcm", "db": -3}
//!     ]
//! }
//! ```

mod config;
mod discover;
mod error;
mod mode;

pub use config::{BatchConfig, FileEntry, DEFAULT_OUTPUT_DIR};
pub use discover::{discover_configs, EXAMPLE_CONFIG};
pub use error::ConfigError;
pub use mode::{MetadataMode, DEFAULT_METADATA_ROOT, METADATA_SUFFIX};
