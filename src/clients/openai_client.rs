use std::path::Path;

use secrecy::ExposeSecret;

use crate::config::OpenAIConfig;

use super::client::TranscriptionClient;
use super::error::TranscriptionError;

const OPENAI_TRANSCRIPTION_URL: &str = "https://api.openai.com/v1/audio/transcriptions";

/// OpenAI Whisper API client
pub struct OpenAIClient {
    config: OpenAIConfig,
}

impl OpenAIClient {
    pub fn new(config: OpenAIConfig) -> Self {
        Self { config }
    }
}

impl TranscriptionClient for OpenAIClient {
    fn transcription_url(&self) -> String {
        OPENAI_TRANSCRIPTION_URL.to_string()
    }

    fn add_auth(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        request.bearer_auth(self.config.api_key.expose_secret())
    }

    fn build_form(
        &self,
        audio_path: &Path,
    ) -> Result<reqwest::blocking::multipart::Form, TranscriptionError> {
        let form = reqwest::blocking::multipart::Form::new()
            .file("file", audio_path)
            .map_err(|e| {
                TranscriptionError::Io(std::io::Error::other(format!(
                    "Failed to read file: {}",
                    e
                )))
            })?
            .text("model", self.config.model.clone())
            .text("temperature", "0.0")
            .text("response_format", "json");

        Ok(form)
    }

    fn vendor_tag(&self) -> &'static str {
        "openai"
    }
}
