use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use lyricsync_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use lyricsync_core::audio::infrastructure::http_audio_source::HttpAudioSource;
use lyricsync_core::audio::infrastructure::whisper_recognizer::WhisperRecognizer;
use lyricsync_core::pipeline::sync_logger::StdoutSyncLogger;
use lyricsync_core::pipeline::sync_lyrics_use_case::SyncLyricsUseCase;
use lyricsync_core::pipeline::transcribe_use_case::TranscribeUseCase;
use lyricsync_core::shared::constants::{AUTO_LANGUAGE, WHISPER_MODEL_NAME, WHISPER_MODEL_URL};
use lyricsync_core::shared::model_resolver;

/// Synchronize plain-text lyrics to an audio recording's timeline.
#[derive(Parser)]
#[command(name = "lyricsync")]
struct Cli {
    /// Audio file path or HTTP(S) URL.
    audio: String,

    /// Plain-text lyrics file, one lyric line per text line
    /// (required unless --transcribe-only is used).
    #[arg(long, required_unless_present = "transcribe_only")]
    lyrics: Option<PathBuf>,

    /// Language hint for transcription ("auto" to detect).
    #[arg(long, default_value = AUTO_LANGUAGE)]
    language: String,

    /// Whisper model file (defaults to the cached/downloaded base model).
    #[arg(long)]
    model: Option<PathBuf>,

    /// Print the raw transcription instead of aligning lyrics.
    #[arg(long)]
    transcribe_only: bool,

    /// Write JSON output to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let model_path = resolve_model(cli.model.as_deref())?;
    let recognizer = WhisperRecognizer::new(&model_path)?;

    let mut logger = StdoutSyncLogger::new();

    let json = if cli.transcribe_only {
        let use_case = TranscribeUseCase::new(
            Box::new(HttpAudioSource),
            Box::new(FfmpegAudioReader),
            Box::new(recognizer),
        );
        let transcription = use_case.run(&cli.audio, &cli.language, &mut logger)?;
        to_json(&transcription, cli.pretty)?
    } else {
        let lyrics_path = cli.lyrics.as_ref().ok_or("--lyrics is required")?;
        let lyrics = fs::read_to_string(lyrics_path)
            .map_err(|e| format!("Failed to read {}: {e}", lyrics_path.display()))?;

        let use_case = SyncLyricsUseCase::new(
            Box::new(HttpAudioSource),
            Box::new(FfmpegAudioReader),
            Box::new(recognizer),
        );
        let result = use_case.run(&cli.audio, &lyrics, &cli.language, &mut logger)?;
        to_json(&result, cli.pretty)?
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, json)?;
            log::info!("Output written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn resolve_model(model: Option<&Path>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = model {
        if !path.exists() {
            return Err(format!("Model file not found: {}", path.display()).into());
        }
        return Ok(path.to_path_buf());
    }

    log::info!("Resolving model: {WHISPER_MODEL_NAME}");
    let path = model_resolver::resolve(
        WHISPER_MODEL_NAME,
        WHISPER_MODEL_URL,
        None,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();
    Ok(path)
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = downloaded as f64 / total as f64 * 100.0;
        eprint!("\rDownloading model: {pct:.0}%");
    } else {
        eprint!("\rDownloading model: {downloaded} bytes");
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
