// bases/adjust_batch/src/app.rs
use crate::args::Args;
use crate::output::OutputHandler;
use crate::picker::pick_config;
use adjust_cache::{run_batch_with, BatchReport, MetadataStore};
use batch_config::{discover_configs, BatchConfig};
use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use std::path::PathBuf;

pub struct App {
    args: Args,
    output: OutputHandler,
}

impl App {
    pub fn new(args: Args) -> Self {
        let output = OutputHandler::new(args.verbose);
        Self { args, output }
    }

    /// Run the selected batch. `Ok(None)` means nothing was run.
    pub fn run(&self) -> Result<Option<BatchReport>> {
        let Some(config_path) = self.select_config()? else {
            self.output.print_exit();
            return Ok(None);
        };

        let config = BatchConfig::load(&config_path)?;
        if config.files.is_empty() {
            self.output.print_no_files();
            return Ok(None);
        }

        std::fs::create_dir_all(&config.output_dir).wrap_err_with(|| {
            format!(
                "failed to create output directory {}",
                config.output_dir.display()
            )
        })?;

        let metadata_path = config
            .metadata_mode
            .resolve(&self.args.metadata_root, &config_path);
        let mut store = MetadataStore::load(&metadata_path)?;
        tracing::debug!(
            "Loaded {} metadata records from {}",
            store.len(),
            metadata_path.display()
        );

        self.output
            .print_batch_start(config.files.len(), &metadata_path);
        let report = run_batch_with(&config, &mut store, |entry| self.output.print_entry(entry))?;
        self.output.print_summary(&report);

        Ok(Some(report))
    }

    fn select_config(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.args.config {
            if !path.is_file() {
                bail!("Config file not found: {}", path.display());
            }
            return Ok(Some(path.clone()));
        }

        let dir = &self.args.config_dir;
        if !dir.is_dir() {
            bail!(
                "No config folder found at {}. Please create it and add your JSON files.",
                dir.display()
            );
        }

        let configs = discover_configs(dir)?;
        if configs.is_empty() {
            self.output.print_no_configs(dir);
            return Ok(None);
        }

        let stdin = std::io::stdin();
        Ok(pick_config(&configs, stdin.lock(), std::io::stdout())?)
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
