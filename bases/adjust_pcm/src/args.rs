// bases/adjust_pcm/src/args.rs
use clap::{ArgGroup, Parser};
use pcm_primitives::GainSpec;
use std::path::PathBuf;

/// Adjust the volume of a single MSU-1 PCM file
///
/// Examples:
///   adjust-pcm audio.pcm audio_lower.pcm 0.75
///   adjust-pcm audio.pcm audio_louder.pcm --db 3
#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(group(ArgGroup::new("gain").required(true).args(["factor", "db"])))]
pub struct Args {
    /// PCM file to read
    pub input: PathBuf,

    /// Where to write the adjusted file (overwritten)
    pub output: PathBuf,

    /// Linear factor, 1.0 = original volume
    #[arg(allow_negative_numbers = true)]
    pub factor: Option<f64>,

    /// Gain in decibels instead of a factor, e.g. --db -3
    #[arg(long, allow_negative_numbers = true)]
    pub db: Option<f64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// `None` only if clap's required "gain" group was bypassed
    pub fn gain_spec(&self) -> Option<GainSpec> {
        self.db
            .map(GainSpec::Db)
            .or(self.factor.map(GainSpec::Factor))
    }
}
