/// Failures raised by a transcription backend for a single file.
///
/// During a batch run these are recorded per file and never abort the
/// run; in single-file mode they propagate to the CLI.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to load model: {0}")]
    ModelLoadFailed(String),

    #[error("unsupported audio format: {0}")]
    UnsupportedAudio(String),

    #[error("local transcription failed: {0}")]
    LocalTranscriptionFailed(String),
}
