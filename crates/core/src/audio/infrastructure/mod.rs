pub mod ffmpeg_audio_reader;
pub mod http_audio_source;
pub mod whisper_recognizer;
