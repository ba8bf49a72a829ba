use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::audio::domain::audio_source::{AudioSource, FetchedAudio};

#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("audio location not found: {0}")]
    NotFound(String),
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("server returned {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to write downloaded audio to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Acquires audio from a local path or an HTTP(S) URL.
///
/// Local paths pass through untouched; URLs are downloaded to a temp file
/// that lives exactly as long as the returned handle.
pub struct HttpAudioSource;

impl HttpAudioSource {
    fn fetch_url(&self, url: &str) -> Result<FetchedAudio, AcquireError> {
        log::info!("Downloading audio from {url}");

        let response = reqwest::blocking::get(url).map_err(|e| AcquireError::Download {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AcquireError::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().map_err(|e| AcquireError::Download {
            url: url.to_string(),
            source: e,
        })?;

        let mut temp =
            NamedTempFile::with_suffix(url_suffix(url)).map_err(|e| AcquireError::Write {
                path: std::env::temp_dir(),
                source: e,
            })?;
        temp.write_all(&bytes).map_err(|e| AcquireError::Write {
            path: temp.path().to_path_buf(),
            source: e,
        })?;
        temp.flush().map_err(|e| AcquireError::Write {
            path: temp.path().to_path_buf(),
            source: e,
        })?;

        log::debug!(
            "Downloaded {} bytes to {}",
            bytes.len(),
            temp.path().display()
        );

        Ok(FetchedAudio::downloaded(temp))
    }
}

impl AudioSource for HttpAudioSource {
    fn fetch(&self, location: &str) -> Result<FetchedAudio, Box<dyn std::error::Error>> {
        if location.starts_with("http://") || location.starts_with("https://") {
            return Ok(self.fetch_url(location)?);
        }

        let path = Path::new(location);
        if path.exists() {
            Ok(FetchedAudio::local(path.to_path_buf()))
        } else {
            Err(AcquireError::NotFound(location.to_string()).into())
        }
    }
}

/// Keep the URL's file extension on the temp file so ffmpeg's format
/// probing gets the same hint it would from the original name.
fn url_suffix(url: &str) -> String {
    let trimmed = url.split(['?', '#']).next().unwrap_or(url);
    match trimmed.rsplit_once('.') {
        Some((_, ext)) if ext.len() <= 4 && ext.chars().all(char::is_alphanumeric) => {
            format!(".{ext}")
        }
        _ => ".mp3".to_string(),
    }
}
