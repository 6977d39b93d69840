//! Audio file discovery.
//!
//! Lists a folder and keeps the entries whose extension is a recognized
//! audio format. Read-only; no recursion into subdirectories.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::Error;

/// Recognized audio file extensions, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["mp3", "wav", "m4a", "flac", "ogg", "aac", "mp4"];

/// A candidate audio file found during a folder scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    pub path: PathBuf,
    /// Filename without its extension, used for transcript naming.
    pub base_name: String,
}

impl AudioFile {
    pub fn new(path: PathBuf) -> Self {
        let base_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, base_name }
    }
}

/// List the supported audio files directly inside `folder`.
///
/// Entries come back in whatever order the filesystem yields them; no
/// sort is applied, so order is not stable across runs. Returns an
/// empty `Vec` when nothing matches - the caller decides whether that
/// is worth reporting.
pub fn discover(folder: &Path) -> Result<Vec<AudioFile>, Error> {
    if !folder.is_dir() {
        return Err(Error::NotFound(format!(
            "folder not found: {}",
            folder.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_supported_extension(&path) {
            files.push(AudioFile::new(path));
        }
    }

    debug!(
        "Found {} supported audio file(s) in {}",
        files.len(),
        folder.display()
    );
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
