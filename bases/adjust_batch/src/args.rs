// bases/adjust_batch/src/args.rs
use batch_config::DEFAULT_METADATA_ROOT;
use clap::Parser;
use std::path::PathBuf;

/// Adjust the volume of MSU-1 PCM files listed in a JSON config
///
/// Files already adjusted with the same gain, whose source has not changed
/// since, are skipped. Without a config path, one is picked interactively
/// from the config directory.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Batch config to run
    pub config: Option<PathBuf>,

    /// Directory to pick a config from when none is given
    #[arg(long, default_value = "./config")]
    pub config_dir: PathBuf,

    /// Base folder for "global" and "per_config" metadata
    #[arg(long, default_value = DEFAULT_METADATA_ROOT)]
    pub metadata_root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
