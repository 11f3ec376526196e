pub mod elevenlabs_tts_repository;
pub mod google_tts_repository;
pub mod polly_tts_repository;
pub mod provider;
pub mod say_tts_repository;
pub mod tts_repository;

pub use elevenlabs_tts_repository::ElevenLabsTtsRepository;
pub use google_tts_repository::GoogleTtsRepository;
pub use polly_tts_repository::{wrap_ssml, PollyTtsRepository};
pub use provider::{ConfiguredProviders, Provider, ProviderFactory};
pub use say_tts_repository::SayTtsRepository;
pub use tts_repository::{SynthesisResult, TtsRepository};
