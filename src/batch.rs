//! Sequential batch transcription.
//!
//! Runs a caller-supplied backend over a list of audio files, writing
//! one transcript file per input. One file failing never aborts the
//! batch; the failure is logged and recorded, and the run moves on.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{info, warn};

use crate::clients::{TranscriptionError, TranscriptionService};
use crate::discovery::AudioFile;
use crate::Error;

/// Outcome of one transcription attempt.
#[derive(Debug)]
pub enum TranscriptionResult {
    Success {
        file: AudioFile,
        output_path: PathBuf,
    },
    Failure {
        file: AudioFile,
        error: String,
    },
}

impl TranscriptionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TranscriptionResult::Success { .. })
    }
}

/// Transcribe every file in order, writing transcripts into `output_dir`.
///
/// The output directory (and parents) is created up front; a failure
/// there aborts the run. After that, backend and write errors are
/// per-file: they are logged, recorded as [`TranscriptionResult::Failure`]
/// and the batch continues. Files are processed strictly one at a time,
/// in the order given.
pub fn run(
    files: Vec<AudioFile>,
    backend: &dyn TranscriptionService,
    output_dir: &Path,
    vendor_tag: &str,
) -> Result<Vec<TranscriptionResult>, Error> {
    fs::create_dir_all(output_dir)?;

    let total = files.len();
    let mut results = Vec::with_capacity(total);

    for (i, file) in files.into_iter().enumerate() {
        info!("[{}/{}] Processing: {}", i + 1, total, file.path.display());

        match transcribe_to_file(&file, backend, output_dir, vendor_tag) {
            Ok(output_path) => {
                info!("Transcript saved to: {}", output_path.display());
                results.push(TranscriptionResult::Success { file, output_path });
            }
            Err(e) => {
                warn!("Failed to transcribe {}: {}", file.path.display(), e);
                results.push(TranscriptionResult::Failure {
                    file,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(results)
}

/// Transcribe a single file and write the text to a fresh transcript
/// path. Used by the batch loop and by single-file invocations, which
/// propagate the error instead of swallowing it.
pub fn transcribe_to_file(
    file: &AudioFile,
    backend: &dyn TranscriptionService,
    output_dir: &Path,
    vendor_tag: &str,
) -> Result<PathBuf, TranscriptionError> {
    let text = backend.transcribe(&file.path)?;

    // Timestamp is captured at write time, second resolution, local clock.
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let stem = format!("{}_transcript_{}_{}", file.base_name, vendor_tag, timestamp);
    let output_path = available_path(output_dir, &stem);

    fs::write(&output_path, &text)?;
    Ok(output_path)
}

/// First non-existing `{stem}.txt` path in `dir`, appending `_2`, `_3`,
/// ... when a batch produces the same stem within one clock second.
fn available_path(dir: &Path, stem: &str) -> PathBuf {
    let candidate = dir.join(format!("{}.txt", stem));
    if !candidate.exists() {
        return candidate;
    }
    let mut n = 2u32;
    loop {
        let candidate = dir.join(format!("{}_{}.txt", stem, n));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Backend stub that fails for one configured base name and echoes
    /// a deterministic transcript for everything else.
    struct MockBackend {
        fail_on: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl MockBackend {
        fn new() -> Self {
            Self {
                fail_on: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing_on(base_name: &'static str) -> Self {
            Self {
                fail_on: Some(base_name),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TranscriptionService for MockBackend {
        fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let stem = audio_path.file_stem().unwrap().to_string_lossy();
            if Some(stem.as_ref()) == self.fail_on {
                return Err(TranscriptionError::ApiError("simulated outage".into()));
            }
            Ok(format!("transcript of {}", stem))
        }

        fn vendor_tag(&self) -> &'static str {
            "mock"
        }
    }

    fn audio_files(names: &[&str]) -> Vec<AudioFile> {
        names
            .iter()
            .map(|n| AudioFile::new(PathBuf::from(format!("/audio/{}.mp3", n))))
            .collect()
    }

    #[test]
    fn all_files_succeed_and_transcripts_land_on_disk() {
        let out = tempfile::tempdir().unwrap();
        let backend = MockBackend::new();

        let results = run(audio_files(&["a", "b", "c"]), &backend, out.path(), "mock").unwrap();

        assert_eq!(results.len(), 3);
        for result in &results {
            let TranscriptionResult::Success { file, output_path } = result else {
                panic!("expected success, got {:?}", result);
            };
            let written = fs::read_to_string(output_path).unwrap();
            assert_eq!(written, format!("transcript of {}", file.base_name));
            let name = output_path.file_name().unwrap().to_string_lossy();
            assert!(
                name.starts_with(&format!("{}_transcript_mock_", file.base_name)),
                "unexpected transcript name: {}",
                name
            );
            assert!(name.ends_with(".txt"));
        }
    }

    #[test]
    fn one_failure_does_not_abort_the_batch() {
        let out = tempfile::tempdir().unwrap();
        let backend = MockBackend::failing_on("b");

        let results = run(audio_files(&["a", "b", "c"]), &backend, out.path(), "mock").unwrap();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_success());
        assert!(results[2].is_success());
        let TranscriptionResult::Failure { file, error } = &results[1] else {
            panic!("expected failure for b");
        };
        assert_eq!(file.base_name, "b");
        assert!(error.contains("simulated outage"));
        // The two surviving transcripts made it to disk.
        let written = fs::read_dir(out.path()).unwrap().count();
        assert_eq!(written, 2);
    }

    #[test]
    fn empty_input_creates_output_dir_without_backend_calls() {
        let parent = tempfile::tempdir().unwrap();
        let out = parent.path().join("transcripts");
        let backend = MockBackend::new();

        let results = run(Vec::new(), &backend, &out, "mock").unwrap();

        assert!(results.is_empty());
        assert!(out.is_dir());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn nested_output_dir_is_created_with_parents() {
        let parent = tempfile::tempdir().unwrap();
        let out = parent.path().join("a").join("b").join("transcripts");

        run(Vec::new(), &MockBackend::new(), &out, "mock").unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn rerunning_a_batch_never_overwrites_earlier_transcripts() {
        let out = tempfile::tempdir().unwrap();
        let backend = MockBackend::new();
        let files = audio_files(&["a"]);

        let first = run(files.clone(), &backend, out.path(), "mock").unwrap();
        let second = run(files, &backend, out.path(), "mock").unwrap();

        let path_of = |r: &TranscriptionResult| match r {
            TranscriptionResult::Success { output_path, .. } => output_path.clone(),
            other => panic!("expected success, got {:?}", other),
        };
        let first_path = path_of(&first[0]);
        let second_path = path_of(&second[0]);

        assert_ne!(first_path, second_path);
        assert_eq!(
            fs::read_to_string(&first_path).unwrap(),
            fs::read_to_string(&second_path).unwrap()
        );
    }

    #[test]
    fn available_path_appends_counter_on_collision() {
        let dir = tempfile::tempdir().unwrap();
        let stem = "a_transcript_mock_20240107_120000";

        let first = available_path(dir.path(), stem);
        assert_eq!(first, dir.path().join(format!("{}.txt", stem)));
        fs::write(&first, b"x").unwrap();

        let second = available_path(dir.path(), stem);
        assert_eq!(second, dir.path().join(format!("{}_2.txt", stem)));
        fs::write(&second, b"x").unwrap();

        let third = available_path(dir.path(), stem);
        assert_eq!(third, dir.path().join(format!("{}_3.txt", stem)));
    }
}
