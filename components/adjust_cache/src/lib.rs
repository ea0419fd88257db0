//! Cached batch adjustment of PCM tracks
//!
//! Every processed input gets a [`MetadataRecord`] holding the gain applied
//! and the source modification time. An entry whose record still matches, and
//! whose output exists, is skipped on the next run.

mod controller;
mod error;
mod record;
mod store;

pub use controller::{
    apply_cached, process_entry, run_batch, run_batch_with, BatchReport, EntryReport, Outcome,
};
pub use error::{BatchError, MetadataError};
pub use record::{modified_secs, record_key, MetadataRecord};
pub use store::MetadataStore;
