//! Local transcription service implementation.
//!
//! Runs a Whisper model in-process via whisper.cpp. Loading the model
//! is a blocking operation that can take several seconds for the large
//! sizes, so it happens once at startup, not per file.

use std::path::Path;

use log::{debug, info};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use super::error::TranscriptionError;
use super::service::TranscriptionService;

/// Local transcription service using a Whisper ggml model.
pub struct LocalTranscriber {
    ctx: WhisperContext,
}

impl LocalTranscriber {
    /// Load the ggml model file into memory.
    pub fn load(model_path: &Path) -> Result<Self, TranscriptionError> {
        info!("Loading Whisper model from: {}", model_path.display());

        let params = WhisperContextParameters::default();
        let ctx = WhisperContext::new_with_params(&model_path.to_string_lossy(), params)
            .map_err(|e| TranscriptionError::ModelLoadFailed(e.to_string()))?;

        info!("Whisper model loaded");
        Ok(Self { ctx })
    }
}

impl TranscriptionService for LocalTranscriber {
    fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError> {
        if !audio_path.exists() {
            return Err(TranscriptionError::FileNotFound(
                audio_path.to_string_lossy().to_string(),
            ));
        }

        debug!("Transcribing file: {}", audio_path.display());
        let samples = load_wav_samples(audio_path)?;

        let mut state = self
            .ctx
            .create_state()
            .map_err(|e| TranscriptionError::LocalTranscriptionFailed(e.to_string()))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_language(Some("auto"));
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        state
            .full(params, &samples)
            .map_err(|e| TranscriptionError::LocalTranscriptionFailed(e.to_string()))?;

        let text = extract_text(&state)?;
        info!("Local transcription successful: {} characters", text.len());
        Ok(text)
    }

    fn vendor_tag(&self) -> &'static str {
        "whisper"
    }
}

/// Load an audio file as f32 samples for Whisper.
///
/// Only 16 kHz mono WAV is accepted; anything else (including
/// compressed formats like mp3) is an unsupported-format failure for
/// that file, since no resampling or conversion is performed.
fn load_wav_samples(audio_path: &Path) -> Result<Vec<f32>, TranscriptionError> {
    let reader = hound::WavReader::open(audio_path).map_err(|e| {
        TranscriptionError::UnsupportedAudio(format!(
            "{}: {} (only WAV input is supported by the local model)",
            audio_path.display(),
            e
        ))
    })?;

    let spec = reader.spec();
    debug!(
        "Audio spec: {} Hz, {} channels, {} bits",
        spec.sample_rate, spec.channels, spec.bits_per_sample
    );

    if spec.sample_rate != 16000 {
        return Err(TranscriptionError::UnsupportedAudio(format!(
            "{}: sample rate {} Hz (expected 16000 Hz)",
            audio_path.display(),
            spec.sample_rate
        )));
    }
    if spec.channels != 1 {
        return Err(TranscriptionError::UnsupportedAudio(format!(
            "{}: {} channels (expected mono)",
            audio_path.display(),
            spec.channels
        )));
    }

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Int => {
            // i64 shift: 1 << 31 overflows i32 for 32-bit samples.
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .filter_map(Result::ok)
                .map(|s| s as f32 / max_val)
                .collect()
        }
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .filter_map(Result::ok)
            .collect(),
    };

    debug!("Loaded {} audio samples", samples.len());
    Ok(samples)
}

/// Concatenate the text of every Whisper segment.
fn extract_text(state: &whisper_rs::WhisperState) -> Result<String, TranscriptionError> {
    let num_segments = state.full_n_segments().map_err(|e| {
        TranscriptionError::LocalTranscriptionFailed(format!("Failed to get segments: {}", e))
    })?;

    let mut text = String::new();
    for i in 0..num_segments {
        let segment_text = state.full_get_segment_text(i).map_err(|e| {
            TranscriptionError::LocalTranscriptionFailed(format!(
                "Failed to get segment text: {}",
                e
            ))
        })?;
        text.push_str(&segment_text);
    }

    Ok(text.trim().to_string())
}
