//! Save/load of the survey dataset as a single flat JSON file.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::dataset::Dataset;

/// Fixed relative path of the persisted dataset.
pub const DATA_FILE: &str = "respuestas_sociograma.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no saved data at {0} — answer and save a survey first")]
    NotFound(PathBuf),
    #[error("saved data at {path} is not a valid survey file: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The dataset path inside `dir`.
pub fn data_path(dir: &Path) -> PathBuf {
    dir.join(DATA_FILE)
}

/// Serialise the whole dataset: pretty-printed JSON, 4-space indent,
/// non-ASCII kept literal. Matches the original survey file byte format.
pub fn serialize(dataset: &Dataset) -> String {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    dataset
        .serialize(&mut ser)
        .expect("dataset serialisation cannot fail");
    // serde_json writes valid UTF-8
    String::from_utf8(buf).expect("serialised dataset is UTF-8")
}

/// Overwrite the dataset file in `dir` with the full dataset.
pub fn save(dir: &Path, dataset: &Dataset) -> Result<(), StoreError> {
    let path = data_path(dir);
    std::fs::write(&path, serialize(dataset)).map_err(|source| StoreError::Io { path, source })
}

/// Read the full dataset back from `dir`, replacing nothing on failure.
pub fn load(dir: &Path) -> Result<Dataset, StoreError> {
    let path = data_path(dir);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound(path));
        }
        Err(source) => return Err(StoreError::Io { path, source }),
    };
    serde_json::from_str(&text).map_err(|source| StoreError::Corrupt { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> Dataset {
        let mut d = Dataset::new();
        d.add_participants("Ana\nBea\nCarlos");
        d.add_question("¿Con quién trabajarías?").unwrap();
        d.select("¿Con quién trabajarías?", "Ana", "Bea").unwrap();
        d.select("¿Con quién trabajarías?", "Carlos", "Ana").unwrap();
        d
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let dataset = sample();
        save(dir.path(), &dataset).unwrap();
        let loaded = load(dir.path()).unwrap();
        assert_eq!(loaded, dataset);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let mut dataset = sample();
        save(dir.path(), &dataset).unwrap();
        dataset.add_participants("Diana");
        save(dir.path(), &dataset).unwrap();
        let loaded = load(dir.path()).unwrap();
        assert_eq!(loaded.participants.len(), 4);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(load(dir.path()), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn load_invalid_json_is_corrupt() {
        let dir = TempDir::new().unwrap();
        fs::write(data_path(dir.path()), "{ not json").unwrap();
        assert!(matches!(load(dir.path()), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn load_wrong_shape_is_corrupt() {
        let dir = TempDir::new().unwrap();
        fs::write(data_path(dir.path()), r#"{"alumnos": 3}"#).unwrap();
        assert!(matches!(load(dir.path()), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn serialize_uses_wire_keys_and_four_space_indent() {
        let text = serialize(&sample());
        assert!(text.starts_with("{\n    \"alumnos\""));
        assert!(text.contains("\"preguntas\""));
        assert!(text.contains("\"respuestas\""));
        // non-ASCII stays literal, not \u-escaped
        assert!(text.contains("¿Con quién trabajarías?"));
    }
}
