use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Template config shipped next to real ones; never offered for selection.
pub const EXAMPLE_CONFIG: &str = "example.json";

/// List the selectable `.json` configs in `dir`, sorted by file name.
pub fn discover_configs(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ConfigError> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|source| ConfigError::ConfigDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut configs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .filter(|p| p.file_name().and_then(|s| s.to_str()) != Some(EXAMPLE_CONFIG))
        .collect();

    configs.sort();
    Ok(configs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    #[test]
    fn lists_json_without_example() {
        let dir = TempDir::new().unwrap();
        for name in ["zelda.json", "example.json", "notes.txt", "metroid.json"] {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let configs = discover_configs(dir.path()).unwrap();
        let names: Vec<_> = configs
            .iter()
            .filter_map(|p| p.file_name().and_then(|s| s.to_str()))
            .collect();

        assert_eq!(names, vec!["metroid.json", "zelda.json"]);
    }

    #[test]
    fn empty_directory_has_no_configs() {
        let dir = TempDir::new().unwrap();
        assert!(discover_configs(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert_matches!(
            discover_configs("/definitely/not/a/config/dir"),
            Err(ConfigError::ConfigDir { .. })
        );
    }
}
