use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// A locally readable handle to acquired audio.
///
/// When the audio was downloaded, the backing temp file is owned here and
/// deleted on drop; a local input path is passed through untouched.
#[derive(Debug)]
pub struct FetchedAudio {
    path: PathBuf,
    _temp: Option<NamedTempFile>,
}

impl FetchedAudio {
    pub fn local(path: PathBuf) -> Self {
        Self { path, _temp: None }
    }

    pub fn downloaded(temp: NamedTempFile) -> Self {
        Self {
            path: temp.path().to_path_buf(),
            _temp: Some(temp),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Domain interface for acquiring audio from a caller-supplied location
/// (local path or remote URL).
pub trait AudioSource: Send {
    fn fetch(&self, location: &str) -> Result<FetchedAudio, Box<dyn std::error::Error>>;
}
