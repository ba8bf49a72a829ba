pub mod audio_reader;
pub mod audio_segment;
pub mod audio_source;
pub mod speech_recognizer;
pub mod transcript;
