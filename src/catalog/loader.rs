//! Catalog file loading and saving
//!
//! Custom catalogs are JSON arrays of levels:
//! `[{"index": 1, "baseWord": "PAINTER", "subWords": ["PAIN", ...]}, ...]`.
//! A malformed catalog file is a hard error; it is operator input, not
//! player input.

use crate::core::Level;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for catalog file operations
#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "catalog I/O error: {err}"),
            Self::Parse(err) => write!(f, "catalog is not valid JSON: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load a level catalog from a JSON file
///
/// Base words and answers are normalized to uppercase on load.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Level>, CatalogError> {
    let content = fs::read_to_string(path)?;
    let mut levels: Vec<Level> = serde_json::from_str(&content)?;
    for level in &mut levels {
        level.base_word.make_ascii_uppercase();
        for word in &mut level.sub_words {
            word.make_ascii_uppercase();
        }
    }
    Ok(levels)
}

/// Write a level catalog as pretty-printed JSON
///
/// Writes to a temp file in the target directory, then renames over the
/// destination, so a crash mid-write cannot truncate the catalog.
pub fn save_to_file<P: AsRef<Path>>(path: P, levels: &[Level]) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = match dir {
        Some(dir) => tempfile::NamedTempFile::new_in(dir)?,
        None => tempfile::NamedTempFile::new_in(".")?,
    };
    serde_json::to_writer_pretty(&mut tmp, levels)?;
    tmp.persist(path).map_err(|err| CatalogError::Io(err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let levels = vec![
            Level::new(1, "PAINTER", &["PAIN", "PANE"]),
            Level::new(2, "STATION", &["SAINT"]),
        ];

        save_to_file(&path, &levels).unwrap();
        let loaded = load_from_file(&path).unwrap();
        assert_eq!(loaded, levels);
    }

    #[test]
    fn load_normalizes_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"index": 1, "baseWord": "painter", "subWords": ["pain"]}]"#,
        )
        .unwrap();

        let loaded = load_from_file(&path).unwrap();
        assert_eq!(loaded[0].base_word, "PAINTER");
        assert_eq!(loaded[0].sub_words, vec!["PAIN"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "not json").unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "old content").unwrap();

        let levels = vec![Level::new(1, "HEART", &["HEAT"])];
        save_to_file(&path, &levels).unwrap();
        assert_eq!(load_from_file(&path).unwrap(), levels);
    }
}
