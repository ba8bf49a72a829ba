use super::audio_segment::AudioSegment;
use super::transcript::Transcription;

/// Domain interface for speech-to-text transcription.
///
/// Implementations run inference on decoded audio and produce the full
/// recognized text plus segment-level timestamps. `language` is a hint;
/// the auto-detect sentinel asks the engine to pick one itself.
pub trait SpeechRecognizer: Send {
    fn transcribe(
        &self,
        audio: &AudioSegment,
        language: &str,
    ) -> Result<Transcription, Box<dyn std::error::Error>>;
}
