mod api_transcriber;
mod azure_client;
mod client;
mod error;
mod local_transcriber;
mod openai_client;
mod service;

// Re-export public types
pub use api_transcriber::ApiTranscriber;
pub use azure_client::AzureClient;
pub use client::TranscriptionClient;
pub use error::TranscriptionError;
pub use local_transcriber::LocalTranscriber;
pub use openai_client::OpenAIClient;
pub use service::TranscriptionService;
