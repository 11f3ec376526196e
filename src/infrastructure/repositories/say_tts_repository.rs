use super::tts_repository::{SynthesisResult, TtsRepository};
use crate::domain::tts::{voices, ProviderError, ProviderKind, SynthesisRequest};
use crate::infrastructure::config::Config;
use crate::infrastructure::process::CommandRunner;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// macOS `say` implementation of TTS repository.
///
/// `say` only writes AIFF, so the audio goes through an intermediate file
/// that ffmpeg transcodes to mono 128 kbps MP3.
pub struct SayTtsRepository {
    say_bin: PathBuf,
    ffmpeg_bin: PathBuf,
    scratch_dir: PathBuf,
    runner: CommandRunner,
}

impl SayTtsRepository {
    pub fn new(config: &Config) -> Self {
        Self {
            say_bin: config.say_bin.clone(),
            ffmpeg_bin: config.ffmpeg_bin.clone(),
            scratch_dir: config.scratch_dir.clone(),
            runner: CommandRunner::new(ProviderKind::Say, config.process_timeout),
        }
    }

    /// Unique per call so concurrent runs never share an intermediate file
    fn intermediate_path(&self) -> PathBuf {
        self.scratch_dir
            .join(format!("tts-say-{}.aiff", Uuid::new_v4()))
    }

    fn say_args(voice: &str, intermediate: &Path, text: &str) -> Vec<OsString> {
        vec![
            "-v".into(),
            voice.into(),
            "-o".into(),
            intermediate.into(),
            "--".into(),
            text.into(),
        ]
    }

    fn ffmpeg_args(intermediate: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-y".into(), "-i".into(), intermediate.into()];
        args.extend(
            ["-acodec", "libmp3lame", "-ab", "128k", "-ac", "1", "-f", "mp3"]
                .into_iter()
                .map(OsString::from),
        );
        args.push(output.into());
        args
    }

    async fn render(
        &self,
        voice: &str,
        text: &str,
        intermediate: &Path,
        staging: &Path,
    ) -> Result<(), ProviderError> {
        self.runner
            .run(&self.say_bin, Self::say_args(voice, intermediate, text))
            .await?;
        tracing::debug!(intermediate = %intermediate.display(), "say finished, transcoding");

        self.runner
            .run(&self.ffmpeg_bin, Self::ffmpeg_args(intermediate, staging))
            .await?;
        Ok(())
    }
}

/// The AIFF written by `say`, removed on drop. Cancelling the synthesis
/// future removes it as well.
struct Intermediate(PathBuf);

impl Drop for Intermediate {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.0) {
            Ok(()) => tracing::debug!(intermediate = %self.0.display(), "Intermediate removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                error = %e,
                intermediate = %self.0.display(),
                "Failed to remove intermediate file"
            ),
        }
    }
}

#[async_trait]
impl TtsRepository for SayTtsRepository {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Say
    }

    async fn synthesize(
        &self,
        request: &SynthesisRequest,
        staging: &Path,
    ) -> Result<SynthesisResult, ProviderError> {
        let language = request.language();
        let voice = voices::say_voice(language).ok_or(ProviderError::UnsupportedLanguage {
            provider: ProviderKind::Say,
            language,
        })?;
        let intermediate = self.intermediate_path();

        tracing::info!(
            provider = "say",
            voice = voice,
            intermediate = %intermediate.display(),
            text_length = request.text().len(),
            "Calling say"
        );

        let intermediate = Intermediate(intermediate);
        self.render(voice, request.text(), &intermediate.0, staging).await?;
        Ok(SynthesisResult::Rendered)
    }
}
