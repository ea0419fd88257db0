// bases/adjust_pcm/src/main.rs
mod args;

use args::Args;
use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use pcm_primitives::Gain;
use pcm_transform::adjust_file;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let default_filter = if args.verbose {
        "adjust_pcm=debug,pcm_transform=debug"
    } else {
        "adjust_pcm=info,pcm_transform=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let spec = args
        .gain_spec()
        .ok_or_else(|| eyre!("specify a factor or --db <value>"))?;
    let gain = Gain::try_from(spec)?;
    tracing::debug!("Resolved gain: {}", gain);

    let stats = adjust_file(&args.input, &args.output, gain.factor())
        .wrap_err_with(|| format!("failed to adjust {}", args.input.display()))?;

    println!(
        "{} -> {} ({})",
        args.input.display(),
        args.output.display(),
        gain
    );
    if stats.clipped > 0 {
        println!("  {} of {} samples clipped", stats.clipped, stats.total);
    }

    Ok(())
}
