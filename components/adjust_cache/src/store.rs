// components/adjust_cache/src/store.rs
use crate::error::MetadataError;
use crate::record::MetadataRecord;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// JSON-backed map from absolute input path to [`MetadataRecord`].
///
/// There is no locking: two processes persisting the same store will
/// overwrite each other.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataStore {
    path: PathBuf,
    records: BTreeMap<String, MetadataRecord>,
}

impl MetadataStore {
    /// An empty store that will persist to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: BTreeMap::new(),
        }
    }

    /// Load the store at `path`. A missing file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, MetadataError> {
        let path = path.into();
        if !path.is_file() {
            tracing::debug!("No metadata at {}, starting empty", path.display());
            return Ok(Self::new(path));
        }

        let text = std::fs::read_to_string(&path).map_err(|source| MetadataError::Read {
            path: path.clone(),
            source,
        })?;
        let text = legacy_infinity_to_null(&text);
        if let Cow::Owned(_) = text {
            tracing::warn!(
                "{} stores -Infinity as a bare token; reading it as silence",
                path.display()
            );
        }
        let records = serde_json::from_str(&text).map_err(|source| MetadataError::Parse {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&MetadataRecord> {
        self.records.get(key)
    }

    pub fn upsert(&mut self, key: impl Into<String>, record: MetadataRecord) {
        self.records.insert(key.into(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Overwrite the backing file with the current records
    pub fn persist(&self) -> Result<(), MetadataError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| MetadataError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        let mut json = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut json, formatter);
        self.records.serialize(&mut serializer)?;

        std::fs::write(&self.path, json).map_err(|source| MetadataError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

const LEGACY_NEG_INFINITY: &str = "-Infinity";

/// Replace bare `-Infinity` tokens, which older stores used for silence, with
/// `null`. Occurrences inside strings (paths) are left alone.
fn legacy_infinity_to_null(text: &str) -> Cow<'_, str> {
    if !text.contains(LEGACY_NEG_INFINITY) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = text;
    let mut replaced = false;

    while let Some(c) = rest.chars().next() {
        if !in_string && rest.starts_with(LEGACY_NEG_INFINITY) {
            out.push_str("null");
            rest = &rest[LEGACY_NEG_INFINITY.len()..];
            replaced = true;
            continue;
        }
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    if replaced {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(text)
    }
}
