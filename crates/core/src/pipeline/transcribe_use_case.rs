use std::time::Instant;

use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::audio_source::AudioSource;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::audio::domain::transcript::Transcription;
use crate::pipeline::sync_logger::SyncLogger;
use crate::shared::constants::WHISPER_SAMPLE_RATE;
use crate::shared::error::SyncError;

/// Diagnostics pass-through: acquire, decode, transcribe — no alignment.
///
/// Returns the engine's raw output (full text, timestamped segments,
/// detected language) for inspection.
pub struct TranscribeUseCase {
    source: Box<dyn AudioSource>,
    reader: Box<dyn AudioReader>,
    recognizer: Box<dyn SpeechRecognizer>,
}

impl TranscribeUseCase {
    pub fn new(
        source: Box<dyn AudioSource>,
        reader: Box<dyn AudioReader>,
        recognizer: Box<dyn SpeechRecognizer>,
    ) -> Self {
        Self {
            source,
            reader,
            recognizer,
        }
    }

    pub fn run(
        &self,
        location: &str,
        language: &str,
        logger: &mut dyn SyncLogger,
    ) -> Result<Transcription, SyncError> {
        if location.trim().is_empty() {
            return Err(SyncError::InvalidInput(
                "audio location is empty".to_string(),
            ));
        }

        let started = Instant::now();
        let fetched = self
            .source
            .fetch(location)
            .map_err(|e| SyncError::Acquisition {
                location: location.to_string(),
                source: e,
            })?;
        logger.timing("acquire", started.elapsed().as_secs_f64() * 1000.0);

        let started = Instant::now();
        let audio = self
            .reader
            .read_audio(fetched.path(), WHISPER_SAMPLE_RATE)
            .map_err(|e| SyncError::Acquisition {
                location: location.to_string(),
                source: e,
            })?
            .ok_or_else(|| SyncError::Acquisition {
                location: location.to_string(),
                source: "no audio stream in input".into(),
            })?;
        logger.timing("decode", started.elapsed().as_secs_f64() * 1000.0);

        let started = Instant::now();
        let transcription = self
            .recognizer
            .transcribe(&audio, language)
            .map_err(|e| SyncError::Transcription { source: e })?;
        logger.timing("transcribe", started.elapsed().as_secs_f64() * 1000.0);
        logger.info(&format!(
            "Transcribed {} segments (language: {})",
            transcription.segments.len(),
            transcription.language
        ));
        logger.summary();

        Ok(transcription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::audio_segment::AudioSegment;
    use crate::audio::domain::audio_source::FetchedAudio;
    use crate::audio::domain::transcript::{TranscriptSegment, Transcription};
    use crate::pipeline::sync_logger::NullSyncLogger;
    use std::path::{Path, PathBuf};

    struct StubSource;

    impl AudioSource for StubSource {
        fn fetch(&self, location: &str) -> Result<FetchedAudio, Box<dyn std::error::Error>> {
            Ok(FetchedAudio::local(PathBuf::from(location)))
        }
    }

    struct StubReader;

    impl AudioReader for StubReader {
        fn read_audio(
            &self,
            _: &Path,
            _: u32,
        ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>> {
            Ok(Some(AudioSegment::new(vec![0.0; 16000], 16000, 1)))
        }
    }

    struct StubRecognizer {
        seen_language: std::sync::Arc<std::sync::Mutex<Option<String>>>,
    }

    impl SpeechRecognizer for StubRecognizer {
        fn transcribe(
            &self,
            _: &AudioSegment,
            language: &str,
        ) -> Result<Transcription, Box<dyn std::error::Error>> {
            *self.seen_language.lock().unwrap() = Some(language.to_string());
            Ok(Transcription {
                text: "raw text".to_string(),
                segments: vec![TranscriptSegment {
                    text: "raw text".to_string(),
                    start: 0.5,
                    end: 3.5,
                }],
                language: "en".to_string(),
            })
        }
    }

    fn use_case() -> (TranscribeUseCase, std::sync::Arc<std::sync::Mutex<Option<String>>>) {
        let seen = std::sync::Arc::new(std::sync::Mutex::new(None));
        let uc = TranscribeUseCase::new(
            Box::new(StubSource),
            Box::new(StubReader),
            Box::new(StubRecognizer {
                seen_language: seen.clone(),
            }),
        );
        (uc, seen)
    }

    #[test]
    fn test_returns_raw_transcription_unmodified() {
        let (uc, _) = use_case();
        let t = uc.run("song.mp3", "en", &mut NullSyncLogger).unwrap();
        assert_eq!(t.text, "raw text");
        assert_eq!(t.segments.len(), 1);
        assert_eq!(t.language, "en");
    }

    #[test]
    fn test_language_hint_forwarded_to_recognizer() {
        let (uc, seen) = use_case();
        uc.run("song.mp3", "de", &mut NullSyncLogger).unwrap();
        assert_eq!(seen.lock().unwrap().as_deref(), Some("de"));
    }

    #[test]
    fn test_empty_location_is_invalid_input() {
        let (uc, _) = use_case();
        let err = uc.run("", "en", &mut NullSyncLogger).unwrap_err();
        assert!(matches!(err, SyncError::InvalidInput(_)));
    }
}
