use std::env;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use strum::VariantNames;

use crate::Error;

/// Transcription providers selectable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    /// Locally loaded Whisper model (whisper.cpp)
    Local,
    /// OpenAI transcription API
    #[value(name = "openai")]
    OpenAI,
    /// Azure OpenAI transcription API
    Azure,
}

/// Default API model for the OpenAI provider.
pub const DEFAULT_OPENAI_MODEL: &str = "whisper-1";
/// Default Whisper deployment name for the Azure provider.
pub const DEFAULT_AZURE_DEPLOYMENT: &str = "whisper";

/// Whisper model sizes accepted by the local provider.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum WhisperModel {
    Tiny,
    Base,
    Small,
    Medium,
    Large,
}

impl WhisperModel {
    /// Parse a size name, reporting the valid names on mismatch.
    pub fn parse(name: &str) -> Result<Self, Error> {
        name.parse().map_err(|_| {
            Error::Config(format!(
                "invalid model size '{}'; choose from: {}",
                name,
                Self::VARIANTS.join(", ")
            ))
        })
    }

    /// ggml filename for this size, as published on
    /// huggingface.co/ggerganov/whisper.cpp.
    pub fn ggml_filename(&self) -> String {
        format!("ggml-{}.bin", self)
    }

    /// Locate the ggml model file inside `model_dir`.
    ///
    /// A missing file is a configuration error caught before any
    /// transcription starts.
    pub fn resolve_model_file(&self, model_dir: &Path) -> Result<PathBuf, Error> {
        let path = model_dir.join(self.ggml_filename());
        if !path.exists() {
            return Err(Error::Config(format!(
                "model file not found: {} (download ggml models from \
                 https://huggingface.co/ggerganov/whisper.cpp)",
                path.display()
            )));
        }
        Ok(path)
    }
}

/// Credentials and model for the OpenAI provider.
#[derive(Debug)]
pub struct OpenAIConfig {
    pub api_key: SecretString,
    pub model: String,
}

impl OpenAIConfig {
    /// Resolve from the environment (`OPENAI_API_KEY`).
    pub fn from_env(model: Option<String>) -> Result<Self, Error> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            Error::Config("missing required environment variable: OPENAI_API_KEY".into())
        })?;
        Ok(Self {
            api_key: api_key.into(),
            model: model.unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
        })
    }
}

/// Credentials, endpoint and deployment for the Azure OpenAI provider.
#[derive(Debug)]
pub struct AzureOpenAIConfig {
    pub api_key: SecretString,
    /// Resource endpoint, e.g. `https://resource.openai.azure.com`
    pub endpoint: String,
    /// Whisper deployment name in the Azure resource
    pub deployment: String,
}

impl AzureOpenAIConfig {
    /// Resolve from the environment (`AZURE_OPENAI_API_KEY`,
    /// `AZURE_OPENAI_ENDPOINT`), naming every missing variable at once.
    pub fn from_env(deployment: Option<String>) -> Result<Self, Error> {
        let mut missing = Vec::new();
        let api_key = env::var("AZURE_OPENAI_API_KEY")
            .map_err(|_| missing.push("AZURE_OPENAI_API_KEY"))
            .ok();
        let endpoint = env::var("AZURE_OPENAI_ENDPOINT")
            .map_err(|_| missing.push("AZURE_OPENAI_ENDPOINT"))
            .ok();

        match (api_key, endpoint) {
            (Some(api_key), Some(endpoint)) => Ok(Self {
                api_key: api_key.into(),
                endpoint,
                deployment: deployment.unwrap_or_else(|| DEFAULT_AZURE_DEPLOYMENT.to_string()),
            }),
            _ => Err(Error::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            ))),
        }
    }
}
