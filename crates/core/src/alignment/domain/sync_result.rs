use serde::{Deserialize, Serialize};

/// One lyric line anchored to the audio timeline.
///
/// `text` is the original line as supplied by the caller, not the normalized
/// form used for matching. Created once per input line, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlignedLine {
    pub text: String,
    pub start: f64,
    pub end: f64,
    /// Similarity between the line and its chosen segment, in [0.0, 1.0].
    pub confidence: f64,
}

/// Outcome of synchronizing one lyrics blob against one transcription.
///
/// `lines` holds exactly one entry per non-empty input line, in input order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyncResult {
    pub lines: Vec<AlignedLine>,
    /// End timestamp of the transcription's last segment, 0.0 if there were
    /// no segments. Read from the engine output, not recomputed from lines.
    pub total_duration: f64,
    /// Arithmetic mean of line confidences, 0.0 if there were no lines.
    pub average_confidence: f64,
}
