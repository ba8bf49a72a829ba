use thiserror::Error;

/// Failures surfaced by the synchronization pipeline.
///
/// A small closed set so callers can tell collaborator failures apart.
/// The alignment core itself has no failure modes — it is never invoked
/// when acquisition or transcription fail.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("audio acquisition failed for {location}: {source}")]
    Acquisition {
        location: String,
        #[source]
        source: Box<dyn std::error::Error>,
    },

    #[error("transcription failed: {source}")]
    Transcription {
        #[source]
        source: Box<dyn std::error::Error>,
    },
}
