use serde::{Deserialize, Serialize};

/// A time-bounded span of recognized speech produced by the transcription
/// engine. `text` is best-effort — it may be empty or paraphrased.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Start of the span in seconds, non-negative.
    pub start: f64,
    /// End of the span in seconds, `end >= start`.
    pub end: f64,
}

impl TranscriptSegment {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Full output of one transcription run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    /// The engine's full recognized text.
    pub text: String,
    /// Timestamped segments, in the order the engine emitted them. The
    /// aligner treats this as an unordered candidate collection.
    pub segments: Vec<TranscriptSegment>,
    /// Detected or caller-supplied language code (e.g. "en").
    pub language: String,
}

impl Transcription {
    /// End timestamp of the last emitted segment, 0.0 if there are none.
    pub fn duration(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_duration() {
        let s = TranscriptSegment {
            text: "hello".to_string(),
            start: 1.2,
            end: 3.4,
        };
        assert_relative_eq!(s.duration(), 2.2);
    }

    #[test]
    fn test_transcription_duration_from_last_segment() {
        let t = Transcription {
            text: "a b".to_string(),
            segments: vec![
                TranscriptSegment {
                    text: "a".to_string(),
                    start: 0.0,
                    end: 1.0,
                },
                TranscriptSegment {
                    text: "b".to_string(),
                    start: 1.0,
                    end: 4.5,
                },
            ],
            language: "en".to_string(),
        };
        assert_relative_eq!(t.duration(), 4.5);
    }

    #[test]
    fn test_transcription_duration_empty() {
        let t = Transcription {
            text: String::new(),
            segments: Vec::new(),
            language: "en".to_string(),
        };
        assert_relative_eq!(t.duration(), 0.0);
    }
}
