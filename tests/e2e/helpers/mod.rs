use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use text_to_speech::domain::tts::TtsService;
use text_to_speech::infrastructure::config::Config;
use text_to_speech::infrastructure::repositories::ConfiguredProviders;


pub use recording::RecordingProviders;

/// Isolated working area for one test: an output directory and a scratch
/// directory for intermediate files, both removed when the context drops.
pub struct TestContext {
    pub out_dir: TempDir,
    pub scratch_dir: TempDir,
    pub bin_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            out_dir: TempDir::new().expect("Failed to create output dir"),
            scratch_dir: TempDir::new().expect("Failed to create scratch dir"),
            bin_dir: TempDir::new().expect("Failed to create bin dir"),
        }
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.out_dir.path().join(name)
    }

    /// Configuration pointing all process output into this context
    pub fn config(&self) -> Config {
        Config {
            scratch_dir: self.scratch_dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    pub fn service(&self, config: Config) -> TtsService {
        TtsService::new(Arc::new(ConfiguredProviders::new(Arc::new(config))))
    }
}

/// Sorted file names inside `dir`
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub fn mock_audio_bytes() -> Vec<u8> {
    // Minimal MP3 frame header plus padding
    vec![
        0xFF, 0xFB, 0x90, 0x00, // MP3 frame header
        0x00, 0x00, 0x00, 0x00, // Some padding
    ]
}
