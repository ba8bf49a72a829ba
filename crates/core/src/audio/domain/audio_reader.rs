use std::path::Path;

use super::audio_segment::AudioSegment;

/// Domain interface for decoding an audio file into PCM samples.
///
/// Returns `Ok(None)` when the file contains no audio stream.
pub trait AudioReader: Send {
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>>;
}
