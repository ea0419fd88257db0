// components/adjust_cache/src/controller.rs
use crate::error::{BatchError, MetadataError};
use crate::record::{modified_secs, record_key, MetadataRecord};
use crate::store::MetadataStore;
use batch_config::BatchConfig;
use pcm_primitives::{Gain, GainSpec};
use pcm_transform::adjust_file;
use std::path::{Path, PathBuf};

/// What happened to an entry that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Output already matches the source and gain
    Skipped,
    Processed,
}

/// Result of one configured file
#[derive(Debug)]
pub struct EntryReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub gain: Option<Gain>,
    pub result: Result<Outcome, BatchError>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<EntryReport>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.count(|r| matches!(r, Ok(Outcome::Processed)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|r| matches!(r, Ok(Outcome::Skipped)))
    }

    pub fn failed(&self) -> usize {
        self.count(|r| r.is_err())
    }

    fn count(&self, pred: impl Fn(&Result<Outcome, BatchError>) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.result)).count()
    }
}

/// Adjust `input` into `output` unless the store shows it is already done.
pub fn process_entry(
    input: &Path,
    output: &Path,
    spec: GainSpec,
    store: &mut MetadataStore,
) -> Result<Outcome, BatchError> {
    let gain = Gain::try_from(spec)?;
    apply_cached(input, output, &gain, store)
}

/// [`process_entry`] for an already resolved gain.
///
/// On success the record is upserted and the store persisted before returning.
pub fn apply_cached(
    input: &Path,
    output: &Path,
    gain: &Gain,
    store: &mut MetadataStore,
) -> Result<Outcome, BatchError> {
    if !input.is_file() {
        return Err(BatchError::FileNotFound(input.to_path_buf()));
    }

    let src_mtime = modified_secs(input).map_err(|e| BatchError::io(input, e))?;
    let key = record_key(input).map_err(|e| BatchError::io(input, e))?;

    let up_to_date = store
        .get(&key)
        .is_some_and(|record| record.is_current(gain, src_mtime));
    if up_to_date && output.exists() {
        tracing::debug!("{} is up to date ({})", output.display(), gain);
        return Ok(Outcome::Skipped);
    }

    let stats = adjust_file(input, output, gain.factor())?;
    if stats.clipped > 0 {
        tracing::debug!(
            "{}: clipped {} of {} samples",
            input.display(),
            stats.clipped,
            stats.total
        );
    }

    store.upsert(key, MetadataRecord::new(gain, src_mtime));
    store.persist()?;

    tracing::info!("Adjusted {} -> {} ({})", input.display(), output.display(), gain);
    Ok(Outcome::Processed)
}

/// Process every entry of `config` in order.
///
/// Per-entry failures are collected in the report. A failure to persist the
/// store stops the batch.
pub fn run_batch(
    config: &BatchConfig,
    store: &mut MetadataStore,
) -> Result<BatchReport, MetadataError> {
    run_batch_with(config, store, |_| {})
}

/// [`run_batch`], calling `on_entry` as each entry finishes
pub fn run_batch_with(
    config: &BatchConfig,
    store: &mut MetadataStore,
    mut on_entry: impl FnMut(&EntryReport),
) -> Result<BatchReport, MetadataError> {
    let mut report = BatchReport::default();

    for entry in &config.files {
        let output = config.output_path(&entry.path);

        let gain = entry
            .gain_spec()
            .map_err(|_| BatchError::MissingGainSpec(entry.path.clone()))
            .and_then(|spec| Gain::try_from(spec).map_err(BatchError::from));

        let (gain, result) = match gain {
            Ok(gain) => (Some(gain), apply_cached(&entry.path, &output, &gain, store)),
            Err(e) => (None, Err(e)),
        };

        if let Err(BatchError::Metadata(e)) = result {
            tracing::error!("Aborting batch, metadata could not be saved: {}", e);
            return Err(e);
        }

        if let Err(e) = &result {
            tracing::warn!("{}: {}", entry.path.display(), e);
        }

        let entry_report = EntryReport {
            input: entry.path.clone(),
            output,
            gain,
            result,
        };
        on_entry(&entry_report);
        report.entries.push(entry_report);
    }

    Ok(report)
}
