mod error;
mod gemini;
mod tone;

pub use error::AiError;
pub use gemini::{EMPTY_RESPONSE_FALLBACK, ERROR_FALLBACK, GeminiClient, build_prompt, fallback_message};
pub use tone::Tone;
