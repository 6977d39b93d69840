//! High-level transcription backend abstraction.

use std::path::Path;

use super::error::TranscriptionError;

/// One transcription backend, opaque to the batch core.
///
/// Implementations can be API-based (OpenAI, Azure OpenAI) or local
/// (Whisper). A call may block for seconds to minutes; the core does
/// not enforce any timeout.
pub trait TranscriptionService: Send + Sync {
    /// Transcribe an audio file to plain text.
    fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError>;

    /// Short identifier embedded in transcript filenames.
    fn vendor_tag(&self) -> &'static str;
}
