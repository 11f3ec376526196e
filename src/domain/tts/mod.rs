pub mod error;
pub mod language;
pub mod request;
pub mod service;
pub mod validator;
pub mod voices;

pub use error::{ProviderError, UsageError};
pub use language::LanguageCode;
pub use request::{ProviderChoice, ProviderKind, ProviderSelection, SynthesisRequest};
pub use service::{TtsService, TtsServiceApi};
pub use validator::{build_request, validate};
pub use voices::{GoogleVoice, VoiceDescriptor};
