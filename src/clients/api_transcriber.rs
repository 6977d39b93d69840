//! API-based transcription service implementation.
//!
//! Handles transcription via HTTP APIs (OpenAI, Azure OpenAI).

use std::path::Path;

use log::{error, info};
use serde::Deserialize;

use super::client::TranscriptionClient;
use super::error::TranscriptionError;
use super::service::TranscriptionService;

/// Successful transcription response body, shared by both vendors.
#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// API-based transcription service.
///
/// Uploads the audio file as a multipart form and returns the `text`
/// field of the JSON response. Vendor differences (URL, auth, form
/// fields) live behind [`TranscriptionClient`].
pub struct ApiTranscriber {
    client: Box<dyn TranscriptionClient>,
}

impl ApiTranscriber {
    pub fn new(client: Box<dyn TranscriptionClient>) -> Self {
        Self { client }
    }
}

impl TranscriptionService for ApiTranscriber {
    fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError> {
        if !audio_path.exists() {
            return Err(TranscriptionError::FileNotFound(
                audio_path.to_string_lossy().to_string(),
            ));
        }

        let form = self.client.build_form(audio_path)?;

        let http_client = reqwest::blocking::Client::new();
        let request = http_client.post(self.client.transcription_url());
        let request = self.client.add_auth(request);

        let response = request.multipart(form).send().map_err(|e| {
            error!("API request error: {}", e);
            TranscriptionError::ApiError(format!("Request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("API error response ({}): {}", status, error_text);
            return Err(TranscriptionError::ApiError(format!(
                "API returned status {}: {}",
                status, error_text
            )));
        }

        let body = response.text().map_err(|e| {
            TranscriptionError::ApiError(format!("Failed to read response: {}", e))
        })?;
        let parsed: TranscriptionResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse response: {}", e);
            TranscriptionError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        info!(
            "API transcription successful: {} characters",
            parsed.text.len()
        );

        Ok(parsed.text)
    }

    fn vendor_tag(&self) -> &'static str {
        self.client.vendor_tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing_extracts_text_field() {
        let parsed: TranscriptionResponse =
            serde_json::from_str(r#"{"text":"hello world","extra":1}"#).unwrap();
        assert_eq!(parsed.text, "hello world");
    }

    #[test]
    fn response_without_text_field_is_an_error() {
        assert!(serde_json::from_str::<TranscriptionResponse>(r#"{"status":"ok"}"#).is_err());
    }
}
