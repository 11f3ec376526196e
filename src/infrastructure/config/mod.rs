use anyhow::Context;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const GOOGLE_TTS_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";
pub const ELEVENLABS_TTS_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";

#[derive(Debug, Clone)]
pub struct Config {
    pub log_format: LogFormat,
    // Cloud endpoints
    pub google_tts_url: String,
    pub elevenlabs_tts_url: String,
    pub http_timeout: Duration,
    // External programs
    pub say_bin: PathBuf,
    pub ffmpeg_bin: PathBuf,
    pub aws_bin: PathBuf,
    pub process_timeout: Duration,
    /// Where the say provider puts its intermediate AIFF file
    pub scratch_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            google_tts_url: GOOGLE_TTS_URL.to_string(),
            elevenlabs_tts_url: ELEVENLABS_TTS_URL.to_string(),
            http_timeout: Duration::from_secs(60),
            say_bin: PathBuf::from("say"),
            ffmpeg_bin: PathBuf::from("ffmpeg"),
            aws_bin: PathBuf::from("aws"),
            process_timeout: Duration::from_secs(120),
            scratch_dir: env::temp_dir(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Config::default();

        let config = Config {
            log_format: var("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(defaults.log_format),
            google_tts_url: var("TTS_GOOGLE_URL").unwrap_or(defaults.google_tts_url),
            elevenlabs_tts_url: var("TTS_ELEVENLABS_URL").unwrap_or(defaults.elevenlabs_tts_url),
            http_timeout: seconds(&var, "TTS_HTTP_TIMEOUT_SECS")?
                .unwrap_or(defaults.http_timeout),
            say_bin: var("TTS_SAY_BIN").map(PathBuf::from).unwrap_or(defaults.say_bin),
            ffmpeg_bin: var("TTS_FFMPEG_BIN")
                .map(PathBuf::from)
                .unwrap_or(defaults.ffmpeg_bin),
            aws_bin: var("TTS_AWS_BIN").map(PathBuf::from).unwrap_or(defaults.aws_bin),
            process_timeout: seconds(&var, "TTS_PROCESS_TIMEOUT_SECS")?
                .unwrap_or(defaults.process_timeout),
            scratch_dir: var("TTS_SCRATCH_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.scratch_dir),
        };

        Ok(config)
    }
}

fn seconds(var: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<Duration>> {
    let Some(raw) = var(key) else {
        return Ok(None);
    };
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{} must be a whole number of seconds, got `{}`", key, raw))?;
    anyhow::ensure!(secs > 0, "{} must be greater than zero", key);
    Ok(Some(Duration::from_secs(secs)))
}
