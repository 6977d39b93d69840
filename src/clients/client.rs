use std::path::Path;

use super::error::TranscriptionError;

/// Vendor-specific pieces of a transcription API call.
///
/// Each implementation knows its endpoint URL, how to authenticate the
/// request, and which fields the multipart upload needs. The shared
/// request/response handling lives in [`super::ApiTranscriber`].
pub trait TranscriptionClient: Send + Sync {
    /// Full transcription endpoint URL.
    fn transcription_url(&self) -> String;

    /// Attach authentication to the request builder.
    fn add_auth(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder;

    /// Build the multipart form for one audio file.
    fn build_form(
        &self,
        audio_path: &Path,
    ) -> Result<reqwest::blocking::multipart::Form, TranscriptionError>;

    /// Short identifier embedded in transcript filenames.
    fn vendor_tag(&self) -> &'static str;
}
