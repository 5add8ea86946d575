//! Form defaults and their persistence.

mod file;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::entropy::Source;
use crate::pass::Selection;

pub use file::get_path;

/// Shortest password the form allows.
pub const MIN_LENGTH: usize = 1;
/// Longest password the form allows.
pub const MAX_LENGTH: usize = 50;

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("settings I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub selection: Selection,
    pub source: Source,
    pub pulse_ms: u64,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        Self::load_from(&get_path())
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        self.save_to(&get_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let mut settings = Settings::default();
        file::load(&mut settings, path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn pulse(&self) -> Duration {
        Duration::from_millis(self.pulse_ms)
    }
}

/// Clamp a requested length into the form's range.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 10,
            selection: Selection::default(),
            source: Source::Thread,
            pulse_ms: 250,
        }
    }
}
