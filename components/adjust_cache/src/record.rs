use pcm_primitives::Gain;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use std::time::UNIX_EPOCH;

/// What was applied to one input file, and when that file was last modified
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub factor: f64,
    #[serde(with = "db_or_null")]
    pub db: f64,
    pub src_mtime: f64,
}

impl MetadataRecord {
    pub fn new(gain: &Gain, src_mtime: f64) -> Self {
        Self {
            factor: gain.factor(),
            db: gain.db(),
            src_mtime,
        }
    }

    /// Same gain and an untouched source
    pub fn is_current(&self, gain: &Gain, src_mtime: f64) -> bool {
        gain.matches(self.factor, self.db) && self.src_mtime == src_mtime
    }
}

/// JSON has no `-Infinity`; silence is stored as `null`.
mod db_or_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(db: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if db.is_finite() {
            serializer.serialize_f64(*db)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NEG_INFINITY))
    }
}

/// Modification time of `path` in seconds since the Unix epoch
pub fn modified_secs(path: &Path) -> std::io::Result<f64> {
    let modified = std::fs::metadata(path)?.modified()?;
    Ok(match modified.duration_since(UNIX_EPOCH) {
        Ok(since) => since.as_secs_f64(),
        Err(before) => -before.duration().as_secs_f64(),
    })
}

/// Key under which a file's record is stored: its absolute path, with `.`
/// and `..` folded away lexically. Symlinks are not resolved.
pub fn record_key(path: &Path) -> std::io::Result<String> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gain(factor: f64) -> Gain {
        Gain::from_factor(factor).unwrap()
    }

    #[test]
    fn current_when_nothing_changed() {
        let record = MetadataRecord::new(&gain(0.8), 1_700_000_000.25);
        assert!(record.is_current(&gain(0.8), 1_700_000_000.25));
    }

    #[test]
    fn stale_after_gain_change() {
        let record = MetadataRecord::new(&gain(0.8), 1_700_000_000.25);
        assert!(!record.is_current(&gain(0.81), 1_700_000_000.25));
    }

    #[test]
    fn stale_after_touch() {
        let record = MetadataRecord::new(&gain(0.8), 1_700_000_000.25);
        assert!(!record.is_current(&gain(0.8), 1_700_000_000.5));
    }

    #[test]
    fn silence_is_current_against_silence() {
        let record = MetadataRecord::new(&gain(0.0), 42.0);
        assert!(record.is_current(&gain(0.0), 42.0));
    }

    #[test]
    fn silence_serializes_as_null() {
        let record = MetadataRecord::new(&gain(0.0), 42.0);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"factor":0.0,"db":null,"src_mtime":42.0}"#);

        let decoded: MetadataRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.db, f64::NEG_INFINITY);
    }

    #[test]
    fn reads_plain_numbers() {
        let decoded: MetadataRecord =
            serde_json::from_str(r#"{"factor": 2, "db": 6.0206, "src_mtime": 1700000000}"#).unwrap();
        assert_eq!(decoded.factor, 2.0);
        assert_eq!(decoded.src_mtime, 1_700_000_000.0);
    }

    #[test]
    fn key_is_absolute() {
        let key = record_key(Path::new("tracks/intro.pcm")).unwrap();
        assert!(Path::new(&key).is_absolute());
        assert!(key.ends_with("intro.pcm"));
    }

    #[test]
    fn key_folds_dot_segments() {
        let plain = record_key(Path::new("tracks/intro.pcm")).unwrap();
        let detour = record_key(Path::new("tracks/../tracks/./intro.pcm")).unwrap();
        assert_eq!(detour, plain);
        assert!(!plain.contains(".."));
    }

    #[cfg(unix)]
    #[test]
    fn key_stops_at_root() {
        assert_eq!(record_key(Path::new("/../tracks/../intro.pcm")).unwrap(), "/intro.pcm");
    }

    #[test]
    fn sub_second_mtime_survives_json() {
        let record = MetadataRecord::new(&gain(0.8), 1_760_000_007.654_435_9);
        let json = serde_json::to_string(&record).unwrap();
        let decoded: MetadataRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.src_mtime.to_bits(), record.src_mtime.to_bits());
    }
}
