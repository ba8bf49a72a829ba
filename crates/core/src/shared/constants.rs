pub const WHISPER_MODEL_NAME: &str = "ggml-base.bin";
pub const WHISPER_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-base.bin";

/// whisper.cpp expects 16 kHz mono input.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

/// Language hint value that asks the engine to detect the language itself.
pub const AUTO_LANGUAGE: &str = "auto";
