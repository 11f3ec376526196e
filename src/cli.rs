use crate::domain::tts::{LanguageCode, ProviderSelection};
use clap::{Args, Parser};
use std::path::PathBuf;

pub const ENGINES_DESCRIPTION: &str = "\
The following text-to-speech engines are supported:
- With `--use-say` the text-to-speech engine of macOS is used (command `say`, transcoded with `ffmpeg`).
- With `--use-amazon` Amazon Polly is used. Requires the AWS CLI to be installed and configured. See: https://aws.amazon.com/cli/
- With `--use-google-key=YOUR_API_KEY` Google text-to-speech is used. See: https://cloud.google.com/text-to-speech/
- With `--use-elevenlabs-key=YOUR_API_KEY` ElevenLabs text-to-speech is used. See: https://elevenlabs.io/docs

ElevenLabs sounds best, Amazon Polly is second, Google text-to-speech is third, macOS `say` sounds worst.";

/// Converts text into spoken language saved to an mp3 file.
#[derive(Debug, Parser)]
#[command(name = "text-to-speech", version)]
#[command(about = "Converts text into spoken language saved to an mp3 file.")]
#[command(long_about = format!("Converts text into spoken language saved to an mp3 file.\n\n{}", ENGINES_DESCRIPTION))]
#[command(override_usage = "text-to-speech -t \"This is my text\" -o my-output.mp3 [OPTIONS]")]
pub struct Cli {
    /// The text to convert into spoken language
    #[arg(short, long)]
    pub text: String,

    /// The output mp3 file to create (must not exist yet)
    #[arg(short, long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub tts: TtsArgs,
}

/// Language and engine flags. Other command line tools can embed these with
/// `#[command(flatten)]` and hand the result to
/// [`crate::domain::tts::TtsService::synthesize_to_file`].
#[derive(Debug, Clone, Args)]
pub struct TtsArgs {
    /// The language
    #[arg(long, value_enum, default_value_t = LanguageCode::default())]
    pub lang: LanguageCode,

    /// Use the macOS tool `say`
    #[arg(long)]
    pub use_say: bool,

    /// Use Amazon Polly through the AWS CLI
    #[arg(long)]
    pub use_amazon: bool,

    /// The API key of the Google text-to-speech account to use
    #[arg(long, value_name = "API_KEY")]
    pub use_google_key: Option<String>,

    /// The API key of the ElevenLabs account to use
    #[arg(long, value_name = "API_KEY")]
    pub use_elevenlabs_key: Option<String>,
}

impl TtsArgs {
    pub fn selection(&self) -> ProviderSelection {
        ProviderSelection {
            use_say: self.use_say,
            use_amazon: self.use_amazon,
            google_key: self.use_google_key.clone(),
            elevenlabs_key: self.use_elevenlabs_key.clone(),
        }
    }
}
