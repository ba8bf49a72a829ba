pub mod sync_logger;
pub mod sync_lyrics_use_case;
pub mod transcribe_use_case;
