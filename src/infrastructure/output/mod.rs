//! Writing the final audio file.
//!
//! Audio is staged in a hidden temporary file next to the destination and
//! moved into place with a no-clobber rename, so an interrupted or failed run
//! never leaves a partial file at the destination and never overwrites one.

use crate::error::{AppError, AppResult};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Fail if anything already sits at `path`
pub fn ensure_absent(path: &Path) -> AppResult<()> {
    if path.symlink_metadata().is_ok() {
        return Err(AppError::OutputExists(absolute(path)));
    }
    Ok(())
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

pub struct StagedOutput {
    file: NamedTempFile,
    target: PathBuf,
}

impl StagedOutput {
    /// Create the staging file in the destination's directory, keeping its
    /// extension so tools that sniff the format from the name still work.
    pub fn create(target: &Path) -> io::Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let suffix = target
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        let file = tempfile::Builder::new()
            .prefix(".tts-")
            .suffix(&suffix)
            .tempfile_in(dir)?;

        tracing::debug!(staging = %file.path().display(), target = %target.display(), "Output staged");

        Ok(Self {
            file,
            target: target.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn write_audio(&mut self, audio: &[u8]) -> io::Result<()> {
        let file = self.file.as_file_mut();
        file.write_all(audio)?;
        file.sync_all()
    }

    /// Size of whatever is currently at the staging path
    pub fn size_bytes(&self) -> io::Result<u64> {
        std::fs::metadata(self.path()).map(|metadata| metadata.len())
    }

    /// Move the staged audio to the destination, refusing to replace a file
    /// that appeared there in the meantime.
    pub fn commit(self) -> AppResult<PathBuf> {
        let target = self.target;
        self.file.persist_noclobber(&target).map_err(|err| {
            if err.error.kind() == io::ErrorKind::AlreadyExists {
                AppError::OutputExists(absolute(&target))
            } else {
                AppError::Io(err.error)
            }
        })?;
        Ok(target)
    }
}
