// bases/adjust_batch/src/main.rs
mod app;
mod args;
mod output;
mod picker;

use app::App;
use args::Args;
use clap::Parser;
use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let default_filter = if args.verbose {
        "adjust_batch=debug,adjust_cache=debug,batch_config=debug,pcm_transform=debug"
    } else {
        "adjust_batch=info,adjust_cache=warn,batch_config=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let app = App::new(args);

    if let Err(error) = app.run() {
        app.print_error(&error);
        std::process::exit(1);
    }
    Ok(())
}
