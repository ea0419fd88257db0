// bases/adjust_batch/src/output.rs
use adjust_cache::{BatchError, BatchReport, EntryReport, Outcome};
use std::error::Error;
use std::path::Path;

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_batch_start(&self, count: usize, metadata_path: &Path) {
        println!("Processing {} files...", count);
        if self.verbose {
            println!("Metadata: {}", metadata_path.display());
        }
    }

    pub fn print_entry(&self, entry: &EntryReport) {
        println!("{}", entry_line(entry));

        if self.verbose {
            if let Err(error) = &entry.result {
                let mut source = error.source();
                while let Some(cause) = source {
                    println!("    caused by: {}", cause);
                    source = cause.source();
                }
            }
        }
    }

    pub fn print_summary(&self, report: &BatchReport) {
        println!(
            "✅ All files have been processed: {} adjusted, {} up to date, {} failed.",
            report.processed(),
            report.skipped(),
            report.failed()
        );
    }

    pub fn print_no_files(&self) {
        println!("⚠️ No files found in the JSON configuration.");
    }

    pub fn print_no_configs(&self, dir: &Path) {
        println!(
            "No JSON files found in {} (other than {}).",
            dir.display(),
            batch_config::EXAMPLE_CONFIG
        );
    }

    pub fn print_exit(&self) {
        println!("Exiting program.");
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("❌ Error: {}", error);

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// One console line describing how an entry went
pub fn entry_line(entry: &EntryReport) -> String {
    let gain = entry
        .gain
        .map(|g| g.to_string())
        .unwrap_or_default();

    match &entry.result {
        Ok(Outcome::Processed) => format!(
            "  {} → {} ({})",
            file_name(&entry.output),
            entry.output.display(),
            gain
        ),
        Ok(Outcome::Skipped) => format!(
            "  {} is already up to date ({}), skipping.",
            file_name(&entry.output),
            gain
        ),
        Err(BatchError::MissingGainSpec(path)) => {
            format!("⚠️ No factor or db specified for {}, skipping.", path.display())
        }
        Err(BatchError::FileNotFound(path)) => format!("❌ File not found: {}", path.display()),
        Err(error) => format!("❌ {}: {}", entry.input.display(), error),
    }
}
