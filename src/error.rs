use crate::clients::TranscriptionError;

/// Top-level errors surfaced to the CLI.
///
/// Setup failures abort the run immediately; per-file transcription
/// failures inside a batch are recorded and logged instead (see
/// [`crate::batch::run`]). `Transcription` only appears here when a
/// single-file invocation propagates the backend error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
}
