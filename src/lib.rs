//! Batch audio transcription.
//!
//! Discovers audio files in a folder and transcribes each one with a
//! pluggable backend: a locally loaded Whisper model, the OpenAI
//! transcription API, or Azure OpenAI. Transcripts are written as plain
//! UTF-8 text files named `{base}_transcript_{vendor}_{timestamp}.txt`.

pub mod batch;
pub mod clients;
pub mod config;
pub mod discovery;
mod error;

pub use error::Error;
