//! Saved progress
//!
//! The flat progress blob play mode resumes from: current level index,
//! running score, and the guessed words of the level in progress. Stored as
//! JSON and written atomically via a temp-file rename.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Player progress across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveState {
    pub current_level_index: u32,
    pub score: u32,
    pub guessed_words: Vec<String>,
}

impl Default for SaveState {
    fn default() -> Self {
        Self {
            current_level_index: 1,
            score: 0,
            guessed_words: Vec::new(),
        }
    }
}

/// Error type for progress file operations
#[derive(Debug)]
pub enum SaveError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "progress file I/O error: {err}"),
            Self::Parse(err) => write!(f, "progress file is not valid JSON: {err}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for SaveError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load saved progress, starting fresh when no file exists
///
/// A corrupt file is still an error; silently discarding progress would be
/// worse than failing.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<SaveState, SaveError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(SaveState::default()),
        Err(err) => Err(err.into()),
    }
}

/// Write progress atomically
pub fn save<P: AsRef<Path>>(path: P, state: &SaveState) -> Result<(), SaveError> {
    let path = path.as_ref();
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = match dir {
        Some(dir) => tempfile::NamedTempFile::new_in(dir)?,
        None => tempfile::NamedTempFile::new_in(".")?,
    };
    serde_json::to_writer_pretty(&mut tmp, state)?;
    tmp.persist(path).map_err(|err| SaveError::Io(err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_or_default(dir.path().join("save.json")).unwrap();
        assert_eq!(state, SaveState::default());
        assert_eq!(state.current_level_index, 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn round_trips_progress() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        let state = SaveState {
            current_level_index: 7,
            score: 1400,
            guessed_words: vec!["GRIM".to_string(), "RING".to_string()],
        };

        save(&path, &state).unwrap();
        assert_eq!(load_or_default(&path).unwrap(), state);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, "{broken").unwrap();

        assert!(matches!(
            load_or_default(&path).unwrap_err(),
            SaveError::Parse(_)
        ));
    }

    #[test]
    fn uses_camel_case_keys() {
        let json = serde_json::to_string(&SaveState::default()).unwrap();
        assert!(json.contains("\"currentLevelIndex\""));
        assert!(json.contains("\"guessedWords\""));
    }
}
