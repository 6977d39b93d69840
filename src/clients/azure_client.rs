use std::path::Path;

use secrecy::ExposeSecret;

use crate::config::AzureOpenAIConfig;

use super::client::TranscriptionClient;
use super::error::TranscriptionError;

const AZURE_API_VERSION: &str = "2024-06-01";

/// Azure OpenAI Whisper API client
pub struct AzureClient {
    config: AzureOpenAIConfig,
}

impl AzureClient {
    pub fn new(config: AzureOpenAIConfig) -> Self {
        Self { config }
    }
}

impl TranscriptionClient for AzureClient {
    fn transcription_url(&self) -> String {
        // The deployment name takes the place of a model field; the form
        // itself carries no model.
        format!(
            "{}/openai/deployments/{}/audio/transcriptions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment,
            AZURE_API_VERSION
        )
    }

    fn add_auth(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        request.header("api-key", self.config.api_key.expose_secret())
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
            .text("temperature", "0.0")
            .text("response_format", "json");

        Ok(form)
    }

    fn vendor_tag(&self) -> &'static str {
        "azureopenai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: &str) -> AzureClient {
        AzureClient::new(AzureOpenAIConfig {
            api_key: "azure-test".to_string().into(),
            endpoint: endpoint.into(),
            deployment: "whisper".into(),
        })
    }

    #[test]
    fn url_embeds_deployment_and_api_version() {
        assert_eq!(
            client("https://resource.openai.azure.com").transcription_url(),
            "https://resource.openai.azure.com/openai/deployments/whisper/audio/transcriptions?api-version=2024-06-01"
        );
    }

    #[test]
    fn url_tolerates_trailing_slash_on_endpoint() {
        assert_eq!(
            client("https://resource.openai.azure.com/").transcription_url(),
            client("https://resource.openai.azure.com").transcription_url()
        );
    }
}
