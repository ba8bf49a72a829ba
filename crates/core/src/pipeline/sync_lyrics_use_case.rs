use std::time::Instant;

use crate::alignment::domain::sync_result::SyncResult;
use crate::alignment::domain::synchronizer::LyricSynchronizer;
use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::audio_source::AudioSource;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::pipeline::sync_logger::SyncLogger;
use crate::shared::constants::WHISPER_SAMPLE_RATE;
use crate::shared::error::SyncError;

/// End-to-end synchronization: acquire audio, decode, transcribe, align.
///
/// Collaborator failures map to distinct [`SyncError`] variants before the
/// pure alignment core runs; the core is never invoked with partial data.
pub struct SyncLyricsUseCase {
    source: Box<dyn AudioSource>,
    reader: Box<dyn AudioReader>,
    recognizer: Box<dyn SpeechRecognizer>,
}

impl SyncLyricsUseCase {
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
        lyrics: &str,
        language: &str,
        logger: &mut dyn SyncLogger,
    ) -> Result<SyncResult, SyncError> {
        if location.trim().is_empty() {
            return Err(SyncError::InvalidInput(
                "audio location is empty".to_string(),
            ));
        }

        // 1. Acquire audio (download or local path)
        let started = Instant::now();
        let fetched = self
            .source
            .fetch(location)
            .map_err(|e| SyncError::Acquisition {
                location: location.to_string(),
                source: e,
            })?;
        logger.timing("acquire", started.elapsed().as_secs_f64() * 1000.0);

        // 2. Decode to the recognizer's expected rate
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
        logger.info(&format!("Decoded {:.1}s of audio", audio.duration()));

        // 3. Transcribe
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

        // 4. Align (pure, no failure modes)
        let started = Instant::now();
        let result = LyricSynchronizer::synchronize(lyrics, &transcription);
        logger.timing("align", started.elapsed().as_secs_f64() * 1000.0);

        let total = result.lines.len();
        for (i, line) in result.lines.iter().enumerate() {
            logger.progress(i + 1, total);
            log::debug!(
                "Line {}: {:?} -> {:.2}s-{:.2}s (conf: {:.2})",
                i + 1,
                line.text,
                line.start,
                line.end,
                line.confidence
            );
        }
        logger.info(&format!(
            "Sync complete: {total} lines, average confidence {:.2}",
            result.average_confidence
        ));
        logger.summary();

        Ok(result)
    }
}
